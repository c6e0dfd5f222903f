use crate::stores::reactive::{ReactiveCell, Subscription};

/// Promotional banner at the top of every page. Once dismissed it stays
/// hidden for the rest of the browser session.
#[derive(Clone)]
pub struct BannerStore {
    visible: ReactiveCell<bool>,
}

impl PartialEq for BannerStore {
    fn eq(&self, other: &Self) -> bool {
        self.visible.ptr_eq(&other.visible)
    }
}

impl BannerStore {
    pub fn new() -> Self {
        Self {
            visible: ReactiveCell::new(!Self::dismissed_this_session()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.with(|v| *v)
    }

    pub fn hide_banner(&self) {
        self.visible.update(|v| *v = false);
        Self::persist_dismissed();
    }

    pub fn on_change(&self, callback: impl Fn() + 'static) -> Subscription {
        self.visible.subscribe(callback)
    }

    #[cfg(target_arch = "wasm32")]
    fn dismissed_this_session() -> bool {
        use gloo_storage::Storage as _;
        gloo_storage::SessionStorage::get::<bool>(crate::utils::STORAGE_KEY_BANNER_DISMISSED)
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn dismissed_this_session() -> bool {
        false
    }

    #[cfg(target_arch = "wasm32")]
    fn persist_dismissed() {
        use gloo_storage::Storage as _;
        let _ = gloo_storage::SessionStorage::set(crate::utils::STORAGE_KEY_BANNER_DISMISSED, true);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn persist_dismissed() {}
}

impl Default for BannerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_starts_visible_and_hides() {
        let store = BannerStore::new();
        assert!(store.is_visible());

        store.hide_banner();
        assert!(!store.is_visible());
    }
}
