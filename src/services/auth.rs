// ============================================================================
// AUTH - thin adapter around the external identity provider
// ============================================================================
// The provider itself (hosted login page, token issuance, expiry) is not
// our code. This adapter only hands out the current bearer token, sends the
// browser to the hosted login flow and takes the token out of the redirect
// fragment when the browser comes back.
// ============================================================================

use async_trait::async_trait;

use crate::router::Route;
use crate::utils::{load_from_storage, remove_from_storage, STORAGE_KEY_ACCESS_TOKEN};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No token for the current session.
    NotAuthenticated,
    /// The provider reported a fault.
    Provider(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "not authenticated"),
            AuthError::Provider(message) => write!(f, "auth provider error: {}", message),
        }
    }
}

impl std::error::Error for AuthError {}

/// Supplies the bearer token for the current session on demand. May be slow
/// or fail; callers treat a failure as "no session".
#[async_trait(?Send)]
pub trait TokenProvider {
    async fn access_token(&self) -> Result<String, AuthError>;
}

/// Browser-backed session: the token lives in localStorage, written by the
/// redirect callback and removed on logout.
#[derive(Clone, Default, PartialEq)]
pub struct AuthSession;

impl AuthSession {
    pub fn new() -> Self {
        Self
    }

    pub fn is_authenticated(&self) -> bool {
        load_from_storage::<String>(STORAGE_KEY_ACCESS_TOKEN).is_some()
    }

    /// Sends the browser to the hosted login page. The target route comes
    /// back to us via the redirect URI.
    pub fn login_redirect(&self, target: &Route) {
        #[cfg(target_arch = "wasm32")]
        if let Some(win) = web_sys::window() {
            use crate::config::CONFIG;

            let origin = win.location().origin().unwrap_or_default();
            let redirect_uri = format!("{}{}", origin, target.path());
            let url = format!(
                "https://{}/authorize?client_id={}&response_type=token&redirect_uri={}",
                CONFIG.auth_domain,
                CONFIG.auth_client_id,
                js_sys::encode_uri_component(&redirect_uri),
            );
            log::info!("🔐 Redirecting to login, target {}", target.path());
            let _ = win.location().assign(&url);
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::info!("🔐 Login redirect requested, target {}", target.path());
    }

    /// Picks the access token out of the provider's redirect fragment and
    /// persists it. Returns true when a token was found.
    pub fn handle_redirect_callback(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::utils::save_to_storage;

            let Some(win) = web_sys::window() else {
                return false;
            };
            let fragment = win.location().hash().unwrap_or_default();
            let Some(token) = token_from_fragment(&fragment) else {
                return false;
            };

            if let Err(e) = save_to_storage(STORAGE_KEY_ACCESS_TOKEN, &token) {
                log::error!("❌ Could not persist access token: {}", e);
                return false;
            }

            // Strip the fragment so the token never shows up in the URL bar
            // or the history.
            if let Ok(history) = win.history() {
                let path = win.location().pathname().unwrap_or_else(|_| "/".to_string());
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&path),
                );
            }

            log::info!("✅ Login completed");
            true
        }

        #[cfg(not(target_arch = "wasm32"))]
        false
    }

    pub fn logout(&self) {
        let _ = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        log::info!("👋 Logout");
    }
}

#[async_trait(?Send)]
impl TokenProvider for AuthSession {
    async fn access_token(&self) -> Result<String, AuthError> {
        load_from_storage::<String>(STORAGE_KEY_ACCESS_TOKEN).ok_or(AuthError::NotAuthenticated)
    }
}

/// Extracts `access_token` from an implicit-flow redirect fragment like
/// `#access_token=abc&token_type=Bearer&expires_in=7200`.
fn token_from_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#')?;
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "access_token")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
