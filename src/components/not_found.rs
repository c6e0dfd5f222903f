use yew::prelude::*;

use crate::components::app::link_to;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundViewProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundView)]
pub fn not_found_view(props: &NotFoundViewProps) -> Html {
    html! {
        <div class="not-found">
            <h1>{ "Seite nicht gefunden" }</h1>
            <a href="/" onclick={link_to(&props.on_navigate, Route::Home)}>
                { "Zurück zur Startseite" }
            </a>
        </div>
    }
}
