pub mod guards;
pub mod route;

pub use guards::{admin_guard, authenticated_guard, check_navigation, NavigationDecision};
pub use route::{Access, Route};

/// Route for the browser's current location.
pub fn current_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        let path = web_sys::window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Route::from_path(&path)
    }

    #[cfg(not(target_arch = "wasm32"))]
    Route::Home
}

/// Puts a route into the address bar without reloading the page.
pub fn push_route(route: &Route) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&route.path()),
            );
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = route;
}
