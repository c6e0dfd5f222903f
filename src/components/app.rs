use yew::prelude::*;

use crate::components::{
    Banner, HomeView, KontaktView, LegalView, NavBar, NotFoundView, ProductCatalog, ProductDetail,
    ProductForm, ProfileView,
};
use crate::hooks::{use_stores, StoresProvider};
use crate::router::{self, check_navigation, Access, NavigationDecision, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <StoresProvider>
            <Shell />
        </StoresProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let stores = use_stores();
    // Guarded entry URLs stay on the home view until the gate has decided;
    // the mount effect below sends them through the guards.
    let route = use_state(|| {
        let entry = router::current_route();
        match entry.access() {
            Access::Public => entry,
            _ => Route::Home,
        }
    });

    // Every navigation attempt, including the entry URL and back/forward,
    // goes through the guards before the view switches.
    let resolve = {
        let stores = stores.clone();
        let route = route.clone();
        Callback::from(move |(target, push): (Route, bool)| {
            let stores = stores.clone();
            let route = route.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let decision =
                    check_navigation(&target, stores.auth.as_ref(), &stores.users).await;
                match decision {
                    NavigationDecision::Allow => {
                        if push {
                            router::push_route(&target);
                        }
                        route.set(target);
                    }
                    NavigationDecision::Deny => {
                        stores.auth.login_redirect(&target);
                    }
                    NavigationDecision::RedirectTo(fallback) => {
                        log::info!("↩️ Navigation umgeleitet nach {}", fallback.path());
                        router::push_route(&fallback);
                        route.set(fallback);
                    }
                }
            });
        })
    };

    let on_navigate = {
        let resolve = resolve.clone();
        Callback::from(move |target: Route| resolve.emit((target, true)))
    };

    {
        let stores = stores.clone();
        let resolve = resolve.clone();
        use_effect_with((), move |_| {
            // The login redirect may just have put a token into the URL.
            stores.auth.handle_redirect_callback();

            // Role data is fetched once per session and cached in the store;
            // the guards only ever wait for this fetch.
            if stores.auth.is_authenticated() {
                let users = stores.users.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    users.fetch_profile().await;
                });
            }

            // The entry URL is a navigation attempt like any other.
            resolve.emit((router::current_route(), false));

            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::closure::Closure;
                use wasm_bindgen::JsCast;

                let resolve = resolve.clone();
                let on_popstate = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
                    resolve.emit((router::current_route(), false));
                }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
                if let Some(win) = web_sys::window() {
                    let _ = win.add_event_listener_with_callback(
                        "popstate",
                        on_popstate.as_ref().unchecked_ref(),
                    );
                }
                // Listener stays for the lifetime of the app.
                on_popstate.forget();
            }

            || ()
        });
    }

    html! {
        <div class="app">
            <Banner />
            <NavBar current={(*route).clone()} on_navigate={on_navigate.clone()} />
            <main class="content">
                { switch(&route, &on_navigate) }
            </main>
            <footer class="footer">
                <a href="/impressum" onclick={link_to(&on_navigate, Route::Impressum)}>
                    { "Impressum" }
                </a>
                <a href="/datenschutz" onclick={link_to(&on_navigate, Route::Datenschutz)}>
                    { "Datenschutz" }
                </a>
            </footer>
        </div>
    }
}

/// Internal link: suppress the browser navigation, route client-side.
pub fn link_to(on_navigate: &Callback<Route>, target: Route) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target.clone());
    })
}

fn switch(route: &Route, on_navigate: &Callback<Route>) -> Html {
    match route {
        Route::Home => html! { <HomeView on_navigate={on_navigate.clone()} /> },
        Route::Rezepte => html! { <ProductCatalog on_navigate={on_navigate.clone()} /> },
        Route::Kontakt => html! { <KontaktView /> },
        Route::Product { id } => {
            html! { <ProductDetail id={*id} on_navigate={on_navigate.clone()} /> }
        }
        Route::Impressum => html! { <LegalView title="Impressum" /> },
        Route::Datenschutz => html! { <LegalView title="Datenschutz" /> },
        Route::Profile => html! { <ProfileView /> },
        Route::CreateProduct => html! { <ProductForm product_id={None::<u32>} /> },
        Route::EditProduct { id } => html! { <ProductForm product_id={Some(*id)} /> },
        Route::NotFound => html! { <NotFoundView on_navigate={on_navigate.clone()} /> },
    }
}
