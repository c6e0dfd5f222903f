use yew::prelude::*;

use crate::components::app::link_to;
use crate::hooks::{use_shopping_list_store, use_stores, use_user_store};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let stores = use_stores();
    let users = use_user_store();
    let shopping_list = use_shopping_list_store();

    let item_class = |route: &Route| {
        if *route == props.current {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let on_login = {
        let stores = stores.clone();
        let current = props.current.clone();
        Callback::from(move |_: MouseEvent| {
            stores.auth.login_redirect(&current);
        })
    };

    let on_logout = {
        let stores = stores.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            stores.auth.logout();
            stores.teardown();
            on_navigate.emit(Route::Home);
        })
    };

    let unchecked = shopping_list.unchecked_count();

    html! {
        <nav class="navbar">
            <a class="brand" href="/" onclick={link_to(&props.on_navigate, Route::Home)}>
                { "🧀 Casellese" }
            </a>
            <div class="nav-links">
                <a
                    class={item_class(&Route::Rezepte)}
                    href="/rezepte"
                    onclick={link_to(&props.on_navigate, Route::Rezepte)}
                >
                    { "Rezepte" }
                </a>
                <a
                    class={item_class(&Route::Kontakt)}
                    href="/kontakt"
                    onclick={link_to(&props.on_navigate, Route::Kontakt)}
                >
                    { "Kontakt" }
                </a>
                if users.is_logged_in() {
                    <a
                        class={item_class(&Route::Profile)}
                        href="/profile"
                        onclick={link_to(&props.on_navigate, Route::Profile)}
                    >
                        { "Profil" }
                        if unchecked > 0 {
                            <span class="badge">{ unchecked }</span>
                        }
                    </a>
                }
                if users.is_admin() {
                    <a
                        class={item_class(&Route::CreateProduct)}
                        href="/product/create"
                        onclick={link_to(&props.on_navigate, Route::CreateProduct)}
                    >
                        { "Neues Produkt" }
                    </a>
                }
            </div>
            <div class="nav-auth">
                if users.is_logged_in() {
                    <span class="nav-user">{ users.user_name() }</span>
                    <button class="btn-logout" onclick={on_logout}>{ "Abmelden" }</button>
                } else {
                    <button class="btn-login" onclick={on_login}>{ "Anmelden" }</button>
                }
            </div>
        </nav>
    }
}
