// ============================================================================
// NAVIGATION GUARDS - the authorization gate in front of protected routes
// ============================================================================
// Two layered guards: the base guard lets any authenticated session pass,
// the admin guard additionally requires the ADMIN role. The role lives in
// the user store (fetched once per session); the admin guard only waits out
// the race where navigation happens before that fetch has settled.
// ============================================================================

use crate::router::{Access, Route};
use crate::services::TokenProvider;
use crate::stores::UserStore;
use crate::utils::blocking_notice;

const ADMIN_DENIED_NOTICE: &str = "Zugriff verweigert: Nur für Administratoren";

/// What the router does with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Enter the route.
    Allow,
    /// Not authenticated; the router hands off to the external login flow.
    Deny,
    /// Authenticated but not authorized; go elsewhere instead.
    RedirectTo(Route),
}

/// Base guard: any authenticated session may pass. Backed by the token
/// provider alone; never touches the user store.
pub async fn authenticated_guard(tokens: &dyn TokenProvider, target: &Route) -> bool {
    match tokens.access_token().await {
        Ok(_) => true,
        Err(e) => {
            log::info!("🔒 {} verlangt Login: {}", target.path(), e);
            false
        }
    }
}

/// Admin guard, layered on the base guard. Waits for an in-flight profile
/// fetch (bounded, never triggers one) and then decides on the cached role.
pub async fn admin_guard(
    tokens: &dyn TokenProvider,
    users: &UserStore,
    target: &Route,
) -> NavigationDecision {
    if !authenticated_guard(tokens, target).await {
        return NavigationDecision::Deny;
    }

    users.wait_until_settled().await;

    if users.is_admin() {
        NavigationDecision::Allow
    } else {
        blocking_notice(ADMIN_DENIED_NOTICE);
        NavigationDecision::RedirectTo(Route::Home)
    }
}

/// Entry point for the router: dispatches on the target's access level.
pub async fn check_navigation(
    target: &Route,
    tokens: &dyn TokenProvider,
    users: &UserStore,
) -> NavigationDecision {
    match target.access() {
        Access::Public => NavigationDecision::Allow,
        Access::Authenticated => {
            if authenticated_guard(tokens, target).await {
                NavigationDecision::Allow
            } else {
                NavigationDecision::Deny
            }
        }
        Access::AdminOnly => admin_guard(tokens, users, target).await,
    }
}
