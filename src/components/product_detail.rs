use yew::prelude::*;

use crate::components::app::link_to;
use crate::data::catalog;
use crate::hooks::{use_shopping_list_store, use_user_store};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: u32,
    pub on_navigate: Callback<Route>,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let users = use_user_store();
    let shopping_list = use_shopping_list_store();
    let feedback = use_state(|| None::<String>);

    let Some(product) = catalog::find(props.id) else {
        return html! {
            <div class="product-detail">
                <h1>{ "Produkt nicht gefunden" }</h1>
            </div>
        };
    };

    let ingredients = product.ingredient_list();

    let on_add_ingredients = {
        let shopping_list = shopping_list.clone();
        let feedback = feedback.clone();
        let ingredients = ingredients.clone();
        let product_id = product.id;
        Callback::from(move |_: MouseEvent| {
            let shopping_list = shopping_list.clone();
            let feedback = feedback.clone();
            let ingredients = ingredients.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match shopping_list.add_from_product(product_id, &ingredients).await {
                    Some(created) => {
                        feedback.set(Some(format!(
                            "{} Zutaten auf die Einkaufsliste übernommen",
                            created.len()
                        )));
                    }
                    None => {
                        feedback.set(Some(
                            "Zutaten konnten nicht übernommen werden".to_string(),
                        ));
                    }
                }
            });
        })
    };

    html! {
        <div class="product-detail">
            <img src={product.image_url_details.clone()} alt={product.title.clone()} />
            <div class="product-info">
                <span class="category">{ &product.category }</span>
                <h1>{ &product.title }</h1>
                <p>{ &product.description }</p>
                <span class="price">{ format!("{:.2} €", product.price) }</span>

                if let Some(declaration) = &product.ingredients {
                    <section class="ingredients">
                        <h2>{ "Zutaten" }</h2>
                        <p>{ declaration }</p>
                        if users.is_logged_in() && !ingredients.is_empty() {
                            <button class="btn-primary" onclick={on_add_ingredients}>
                                { "Zutaten auf die Einkaufsliste" }
                            </button>
                        }
                        if let Some(message) = feedback.as_ref() {
                            <p class="feedback">{ message }</p>
                        }
                    </section>
                }

                if users.is_admin() {
                    <a
                        class="btn-secondary"
                        href={Route::EditProduct { id: product.id }.path()}
                        onclick={link_to(&props.on_navigate, Route::EditProduct { id: product.id })}
                    >
                        { "Bearbeiten" }
                    </a>
                }
            </div>
        </div>
    }
}
