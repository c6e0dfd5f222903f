use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::data::catalog;
use crate::models::Product;
use crate::utils::{save_to_storage, STORAGE_KEY_PRODUCT_DRAFT};

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    /// Some(id) when editing an existing product, None when creating.
    pub product_id: Option<u32>,
}

/// Admin form for the product data. Drafts are parked in localStorage until
/// the catalog maintainer takes them over into the static catalog.
#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let existing = props.product_id.and_then(catalog::find);
    let saved = use_state(|| false);

    let title_ref = use_node_ref();
    let category_ref = use_node_ref();
    let price_ref = use_node_ref();
    let description_ref = use_node_ref();
    let ingredients_ref = use_node_ref();

    let on_submit = {
        let saved = saved.clone();
        let title_ref = title_ref.clone();
        let category_ref = category_ref.clone();
        let price_ref = price_ref.clone();
        let description_ref = description_ref.clone();
        let ingredients_ref = ingredients_ref.clone();
        let product_id = props.product_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let title = value_of(&title_ref);
            if title.trim().is_empty() {
                return;
            }
            let ingredients = value_of(&ingredients_ref);

            let draft = Product {
                id: product_id.unwrap_or(0),
                title: title.trim().to_string(),
                category: value_of(&category_ref),
                price: value_of(&price_ref).parse().unwrap_or(0.0),
                description: value_of(&description_ref),
                recipe: None,
                image_url: String::new(),
                image_url_details: String::new(),
                ingredients: (!ingredients.trim().is_empty()).then(|| ingredients),
            };

            match save_to_storage(STORAGE_KEY_PRODUCT_DRAFT, &draft) {
                Ok(()) => {
                    log::info!("📝 Produktentwurf gespeichert: {}", draft.title);
                    saved.set(true);
                }
                Err(e) => log::error!("❌ Entwurf konnte nicht gespeichert werden: {}", e),
            }
        })
    };

    let heading = if props.product_id.is_some() {
        "Produkt bearbeiten"
    } else {
        "Neues Produkt anlegen"
    };

    html! {
        <div class="product-form">
            <h1>{ heading }</h1>

            if *saved {
                <p class="feedback">{ "Entwurf gespeichert." }</p>
            }

            <form onsubmit={on_submit}>
                <label>
                    { "Name" }
                    <input
                        ref={title_ref}
                        type="text"
                        value={existing.map(|p| p.title.clone()).unwrap_or_default()}
                    />
                </label>
                <label>
                    { "Kategorie" }
                    <input
                        ref={category_ref}
                        type="text"
                        value={existing.map(|p| p.category.clone()).unwrap_or_default()}
                    />
                </label>
                <label>
                    { "Preis (€)" }
                    <input
                        ref={price_ref}
                        type="number"
                        step="0.01"
                        value={existing.map(|p| format!("{:.2}", p.price)).unwrap_or_default()}
                    />
                </label>
                <label>
                    { "Beschreibung" }
                    <input
                        ref={description_ref}
                        type="text"
                        value={existing.map(|p| p.description.clone()).unwrap_or_default()}
                    />
                </label>
                <label>
                    { "Zutaten (kommagetrennt)" }
                    <input
                        ref={ingredients_ref}
                        type="text"
                        value={existing.and_then(|p| p.ingredients.clone()).unwrap_or_default()}
                    />
                </label>
                <button type="submit" class="btn-primary">{ "Speichern" }</button>
            </form>
        </div>
    }
}
