use yew::prelude::*;

use crate::components::app::link_to;
use crate::data::catalog;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ProductCatalogProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(ProductCatalog)]
pub fn product_catalog(props: &ProductCatalogProps) -> Html {
    html! {
        <div class="catalog">
            <h1>{ "Unsere Spezialitäten" }</h1>
            <div class="product-grid">
                { for catalog::all().iter().map(|product| {
                    let target = Route::Product { id: product.id };
                    html! {
                        <div class="product-card">
                            <img src={product.image_url.clone()} alt={product.title.clone()} />
                            <div class="product-card-body">
                                <span class="category">{ &product.category }</span>
                                <h3>{ &product.title }</h3>
                                <p>{ &product.description }</p>
                                <div class="product-card-footer">
                                    <span class="price">{ format!("{:.2} €", product.price) }</span>
                                    <a
                                        class="btn-secondary"
                                        href={target.path()}
                                        onclick={link_to(&props.on_navigate, target.clone())}
                                    >
                                        { "Details" }
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
