use yew::prelude::*;

use crate::components::ShoppingList;
use crate::hooks::use_user_store;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let users = use_user_store();

    // The profile is normally fetched once at app start; refetch only when
    // this page is entered with a stale, empty session.
    {
        let users = users.clone();
        use_effect_with((), move |_| {
            if !users.is_logged_in() && !users.is_loading() {
                wasm_bindgen_futures::spawn_local(async move {
                    users.fetch_profile().await;
                });
            }
            || ()
        });
    }

    html! {
        <div class="profile">
            <h1>{ "Mein Profil" }</h1>

            if users.is_loading() {
                <p class="loading">{ "Lade Profil..." }</p>
            } else if let Some(error) = users.error() {
                <p class="error">{ error }</p>
            } else if users.is_logged_in() {
                <div class="profile-card">
                    <p class="name">{ users.user_name() }</p>
                    <p class="email">{ users.user_email() }</p>
                    if users.is_admin() {
                        <span class="role-badge">{ "Administrator" }</span>
                    }
                </div>
                <ShoppingList />
            } else {
                <p>{ "Kein Profil verfügbar." }</p>
            }
        </div>
    }
}
