use yew::prelude::*;

use crate::components::app::link_to;
use crate::data::catalog;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <h1>{ "Casellese" }</h1>
                <p>{ "Handwerkliche Spezialitäten aus Süditalien, direkt vom Erzeuger." }</p>
                <a
                    class="btn-primary"
                    href="/rezepte"
                    onclick={link_to(&props.on_navigate, Route::Rezepte)}
                >
                    { "Zu den Rezepten" }
                </a>
            </section>
            <section class="teaser-grid">
                { for catalog::all().iter().map(|product| {
                    let target = Route::Product { id: product.id };
                    html! {
                        <a
                            class="teaser-card"
                            href={target.path()}
                            onclick={link_to(&props.on_navigate, target.clone())}
                        >
                            <img src={product.image_url.clone()} alt={product.title.clone()} />
                            <h3>{ &product.title }</h3>
                            <span class="price">{ format!("{:.2} €", product.price) }</span>
                        </a>
                    }
                }) }
            </section>
        </div>
    }
}
