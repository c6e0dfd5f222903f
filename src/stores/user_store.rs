// ============================================================================
// USER STORE - profile of the logged-in user
// ============================================================================
// The profile (and with it the role) is fetched once per session and cached
// here; navigation guards only wait for that fetch, they never start one.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, Either};

use crate::models::UserProfile;
use crate::services::{ProfileApi, TokenProvider};
use crate::stores::reactive::{ReactiveCell, Subscription};
use crate::utils::sleep_ms;

/// Ceiling for waiting on an in-flight profile fetch. A guarded navigation
/// never stalls longer than this before it proceeds with whatever profile
/// state exists.
pub const PROFILE_SETTLE_CEILING_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Default)]
struct UserState {
    profile: Option<UserProfile>,
    is_loading: bool,
    error: Option<String>,
}

/// Session store. Explicitly constructed once per application and handed
/// around via context; cloning yields another handle onto the same state.
#[derive(Clone)]
pub struct UserStore {
    state: ReactiveCell<UserState>,
    settle_waiters: Rc<RefCell<Vec<oneshot::Sender<()>>>>,
    api: Rc<dyn ProfileApi>,
    tokens: Rc<dyn TokenProvider>,
}

impl PartialEq for UserStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl UserStore {
    pub fn new(api: Rc<dyn ProfileApi>, tokens: Rc<dyn TokenProvider>) -> Self {
        Self {
            state: ReactiveCell::new(UserState::default()),
            settle_waiters: Rc::new(RefCell::new(Vec::new())),
            api,
            tokens,
        }
    }

    /// Loads the profile from the backend. After this settles, exactly one
    /// of profile/error reflects the attempt and `is_loading` is false
    /// again on every path.
    pub async fn fetch_profile(&self) {
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let outcome = self.request_profile().await;

        self.state.update(|s| {
            match outcome {
                Ok(profile) => {
                    log::info!("✅ Profil geladen: {}", profile.email);
                    s.profile = Some(profile);
                }
                Err(message) => {
                    log::error!("❌ Profil konnte nicht geladen werden: {}", message);
                    s.profile = None;
                    s.error = Some(message);
                }
            }
            s.is_loading = false;
        });

        self.notify_settled();
    }

    async fn request_profile(&self) -> Result<UserProfile, String> {
        let token = self
            .tokens
            .access_token()
            .await
            .map_err(|e| e.to_string())?;
        // user_message keeps the raw message for network faults and formats
        // HTTP failures as "Fehler: <status> <statusText>".
        self.api
            .fetch_profile(&token)
            .await
            .map_err(|e| e.user_message())
    }

    /// Logout teardown. Synchronous, no network.
    pub fn clear_profile(&self) {
        self.state.update(|s| {
            s.profile = None;
            s.error = None;
        });
    }

    /// Waits until no profile fetch is in flight, bounded by
    /// [`PROFILE_SETTLE_CEILING_MS`]. Returns immediately when nothing is
    /// loading; never starts a fetch itself.
    pub async fn wait_until_settled(&self) {
        self.wait_until_settled_for(PROFILE_SETTLE_CEILING_MS).await;
    }

    pub(crate) async fn wait_until_settled_for(&self, ceiling_ms: u32) {
        if !self.is_loading() {
            return;
        }

        let (tx, rx) = oneshot::channel();
        self.settle_waiters.borrow_mut().push(tx);

        match future::select(rx, Box::pin(sleep_ms(ceiling_ms))).await {
            Either::Left(_) => {}
            Either::Right(_) => {
                log::warn!("⏳ Profil-Fetch nach {} ms nicht abgeschlossen", ceiling_ms);
            }
        }
    }

    fn notify_settled(&self) {
        for waiter in self.settle_waiters.borrow_mut().drain(..) {
            let _ = waiter.send(());
        }
    }

    // ------------------------------------------------------------------
    // Derived accessors. Pure reads, never fetch or mutate.
    // ------------------------------------------------------------------

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.profile.as_ref().map(|p| p.role.is_admin()).unwrap_or(false))
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(|s| s.profile.is_some())
    }

    pub fn user_name(&self) -> String {
        self.state
            .with(|s| s.profile.as_ref().map(|p| p.name.clone()).unwrap_or_default())
    }

    pub fn user_email(&self) -> String {
        self.state
            .with(|s| s.profile.as_ref().map(|p| p.email.clone()).unwrap_or_default())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.with(|s| s.profile.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn on_change(&self, callback: impl Fn() + 'static) -> Subscription {
        self.state.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::ApiError;
    use crate::testing::{
        admin_profile, customer_profile, DelayedProfileApi, FakeProfileApi, FakeTokens,
        NeverProfileApi,
    };
    use futures::executor::block_on;

    fn store_with(api: Rc<dyn ProfileApi>, tokens: FakeTokens) -> UserStore {
        UserStore::new(api, Rc::new(tokens))
    }

    #[test]
    fn fetch_success_populates_profile() {
        let api = FakeProfileApi::returning(Ok(admin_profile()));
        let store = store_with(Rc::new(api), FakeTokens::valid());

        block_on(store.fetch_profile());

        assert_eq!(store.profile(), Some(admin_profile()));
        assert_eq!(store.error(), None);
        assert!(!store.is_loading());
        assert!(store.is_admin());
        assert!(store.is_logged_in());
    }

    #[test]
    fn fetch_http_failure_formats_status() {
        let api = FakeProfileApi::returning(Err(ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }));
        let store = store_with(Rc::new(api), FakeTokens::valid());

        block_on(store.fetch_profile());

        assert_eq!(store.profile(), None);
        assert_eq!(store.error(), Some("Fehler: 503 Service Unavailable".to_string()));
        assert!(!store.is_loading());
    }

    #[test]
    fn fetch_network_failure_keeps_raw_message() {
        let api = FakeProfileApi::returning(Err(ApiError::Network("connection reset".to_string())));
        let store = store_with(Rc::new(api), FakeTokens::valid());

        block_on(store.fetch_profile());

        assert_eq!(store.error(), Some("connection reset".to_string()));
        assert_eq!(store.profile(), None);
        assert!(!store.is_loading());
    }

    #[test]
    fn fetch_without_token_fails_without_touching_api() {
        let api = FakeProfileApi::returning(Ok(admin_profile()));
        let calls = api.calls();
        let store = store_with(Rc::new(api), FakeTokens::denied());

        block_on(store.fetch_profile());

        assert_eq!(calls.get(), 0);
        assert_eq!(store.profile(), None);
        assert_eq!(store.error(), Some("not authenticated".to_string()));
        assert!(!store.is_loading());
    }

    #[test]
    fn exactly_one_of_profile_and_error_after_settle() {
        let ok = store_with(
            Rc::new(FakeProfileApi::returning(Ok(customer_profile()))),
            FakeTokens::valid(),
        );
        block_on(ok.fetch_profile());
        assert!(ok.profile().is_some() && ok.error().is_none());

        let failed = store_with(
            Rc::new(FakeProfileApi::returning(Err(ApiError::Network("down".to_string())))),
            FakeTokens::valid(),
        );
        block_on(failed.fetch_profile());
        assert!(failed.profile().is_none() && failed.error().is_some());
    }

    #[test]
    fn clear_profile_resets_profile_and_error() {
        let store = store_with(
            Rc::new(FakeProfileApi::returning(Ok(admin_profile()))),
            FakeTokens::valid(),
        );
        block_on(store.fetch_profile());

        store.clear_profile();

        assert_eq!(store.profile(), None);
        assert_eq!(store.error(), None);
        assert!(!store.is_logged_in());
        assert!(!store.is_admin());
    }

    #[test]
    fn derived_accessors_default_when_logged_out() {
        let store = store_with(
            Rc::new(FakeProfileApi::returning(Ok(customer_profile()))),
            FakeTokens::valid(),
        );

        assert!(!store.is_admin());
        assert!(!store.is_logged_in());
        assert_eq!(store.user_name(), "");
        assert_eq!(store.user_email(), "");

        block_on(store.fetch_profile());
        assert_eq!(store.user_name(), "Carla Kunde");
        assert_eq!(store.user_email(), "carla@example.com");
        assert_eq!(store.profile().map(|p| p.role), Some(Role::Customer));
    }

    #[test]
    fn wait_returns_immediately_when_nothing_is_loading() {
        let store = store_with(
            Rc::new(FakeProfileApi::returning(Ok(admin_profile()))),
            FakeTokens::valid(),
        );
        // No fetch in flight, so this must not block on any timer.
        block_on(store.wait_until_settled());
    }

    #[test]
    fn wait_is_woken_by_a_settling_fetch() {
        let api = DelayedProfileApi::new(50, admin_profile());
        let store = store_with(Rc::new(api), FakeTokens::valid());
        let waiter = store.clone();

        // join! polls the fetch first, so the waiter observes is_loading.
        block_on(async {
            futures::join!(store.fetch_profile(), async {
                waiter.wait_until_settled().await;
                assert!(!waiter.is_loading());
                assert!(waiter.is_admin());
            });
        });
    }

    #[test]
    fn wait_gives_up_at_the_ceiling() {
        let store = store_with(Rc::new(NeverProfileApi), FakeTokens::valid());
        let waiter = store.clone();

        block_on(async {
            let fetch = Box::pin(store.fetch_profile());
            let wait = Box::pin(async {
                waiter.wait_until_settled_for(100).await;
                // Still loading: the ceiling fired, the wait did not hang.
                assert!(waiter.is_loading());
                assert!(!waiter.is_admin());
            });
            match future::select(fetch, wait).await {
                Either::Right(_) => {}
                Either::Left(_) => panic!("fetch completed unexpectedly"),
            }
        });
    }
}
