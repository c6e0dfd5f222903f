// In-browser wiring tests. Run with `wasm-pack test --headless --chrome`
// or `cargo test --target wasm32-unknown-unknown` under a wasm test runner;
// on the host this file compiles to nothing.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen_test::*;

use casellese_web::models::{Role, UserProfile};
use casellese_web::router::{admin_guard, NavigationDecision, Route};
use casellese_web::services::{ApiError, AuthError, ProfileApi, TokenProvider};
use casellese_web::stores::UserStore;
use casellese_web::utils::{load_from_storage, remove_from_storage, save_to_storage};

wasm_bindgen_test_configure!(run_in_browser);

struct AlwaysToken;

#[async_trait(?Send)]
impl TokenProvider for AlwaysToken {
    async fn access_token(&self) -> Result<String, AuthError> {
        Ok("token-browser".to_string())
    }
}

struct SlowAdminProfile;

#[async_trait(?Send)]
impl ProfileApi for SlowAdminProfile {
    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        gloo_timers::future::TimeoutFuture::new(300).await;
        Ok(UserProfile {
            id: "u-admin".to_string(),
            name: "Alma Admin".to_string(),
            email: "alma@casellese.shop".to_string(),
            role: Role::Admin,
        })
    }
}

#[wasm_bindgen_test]
async fn admin_guard_waits_out_a_running_fetch_in_the_browser() {
    let store = UserStore::new(Rc::new(SlowAdminProfile), Rc::new(AlwaysToken));
    let tokens = AlwaysToken;

    let fetching = store.clone();
    wasm_bindgen_futures::spawn_local(async move {
        fetching.fetch_profile().await;
    });

    // Let the spawned fetch reach its suspension point.
    gloo_timers::future::TimeoutFuture::new(10).await;
    assert!(store.is_loading());

    let decision = admin_guard(&tokens, &store, &Route::CreateProduct).await;

    assert_eq!(decision, NavigationDecision::Allow);
    assert!(store.is_admin());
}

#[wasm_bindgen_test]
fn local_storage_roundtrip() {
    let key = "casellese_test_roundtrip";

    save_to_storage(key, &"wert".to_string()).unwrap();
    assert_eq!(load_from_storage::<String>(key), Some("wert".to_string()));

    remove_from_storage(key).unwrap();
    assert_eq!(load_from_storage::<String>(key), None);
}
