// ============================================================================
// STORE CONTEXT - explicit store construction, shared via Yew context
// ============================================================================
// The stores are built exactly once here and handed down the tree; nothing
// in the crate reaches for a global. Components get a handle through the
// use_* hooks below, which also wire store changes to re-renders.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::{ApiClient, AuthSession};
use crate::stores::{BannerStore, ShoppingListStore, UserStore};

#[derive(Clone, PartialEq)]
pub struct Stores {
    pub auth: Rc<AuthSession>,
    pub users: UserStore,
    pub shopping_list: ShoppingListStore,
    pub banner: BannerStore,
}

impl Stores {
    pub fn new() -> Self {
        let auth = Rc::new(AuthSession::new());
        let api = Rc::new(ApiClient::new());
        Self {
            users: UserStore::new(api.clone(), auth.clone()),
            shopping_list: ShoppingListStore::new(api, auth.clone()),
            banner: BannerStore::new(),
            auth,
        }
    }

    /// Logout teardown contract.
    pub fn teardown(&self) {
        self.users.clear_profile();
        self.shopping_list.clear_store();
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct StoresProviderProps {
    pub children: Children,
}

#[function_component(StoresProvider)]
pub fn stores_provider(props: &StoresProviderProps) -> Html {
    let stores = use_memo((), |_| Stores::new());

    html! {
        <ContextProvider<Stores> context={(*stores).clone()}>
            { props.children.clone() }
        </ContextProvider<Stores>>
    }
}

#[hook]
pub fn use_stores() -> Stores {
    use_context::<Stores>().expect("StoresProvider is missing above this component")
}

#[hook]
pub fn use_user_store() -> UserStore {
    let store = use_stores().users;
    let update = use_force_update();
    use_effect_with(store.clone(), move |store| {
        let subscription = store.on_change(move || update.force_update());
        move || drop(subscription)
    });
    store
}

#[hook]
pub fn use_shopping_list_store() -> ShoppingListStore {
    let store = use_stores().shopping_list;
    let update = use_force_update();
    use_effect_with(store.clone(), move |store| {
        let subscription = store.on_change(move || update.force_update());
        move || drop(subscription)
    });
    store
}

#[hook]
pub fn use_banner_store() -> BannerStore {
    let store = use_stores().banner;
    let update = use_force_update();
    use_effect_with(store.clone(), move |store| {
        let subscription = store.on_change(move || update.force_update());
        move || drop(subscription)
    });
    store
}
