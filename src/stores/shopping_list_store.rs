// ============================================================================
// SHOPPING LIST STORE
// ============================================================================
// Confirmed mutation only: the local collection is never touched before the
// backend has acknowledged the request. A failed action leaves the items
// exactly as they were and reports through the return value and the shared
// error slot.
// ============================================================================

use std::rc::Rc;

use crate::models::ShoppingListItem;
use crate::services::{ShoppingListApi, TokenProvider};
use crate::stores::reactive::{ReactiveCell, Subscription};

const FETCH_ERROR_MESSAGE: &str = "Fehler beim Laden der Einkaufsliste";

#[derive(Debug, Clone, PartialEq, Default)]
struct ListState {
    items: Vec<ShoppingListItem>,
    is_loading: bool,
    error: Option<String>,
}

#[derive(Clone)]
pub struct ShoppingListStore {
    state: ReactiveCell<ListState>,
    api: Rc<dyn ShoppingListApi>,
    tokens: Rc<dyn TokenProvider>,
}

impl PartialEq for ShoppingListStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl ShoppingListStore {
    pub fn new(api: Rc<dyn ShoppingListApi>, tokens: Rc<dyn TokenProvider>) -> Self {
        Self {
            state: ReactiveCell::new(ListState::default()),
            api,
            tokens,
        }
    }

    /// Replaces the local collection with the server's. On failure the
    /// items stay untouched and the error slot carries a fixed message.
    pub async fn fetch_items(&self) {
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = match self.tokens.access_token().await {
            Ok(token) => self.api.fetch_items(&token).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        self.state.update(|s| {
            match result {
                Ok(items) => {
                    log::info!("🛒 Einkaufsliste geladen: {} Einträge", items.len());
                    s.items = items;
                }
                Err(cause) => {
                    log::error!("❌ Einkaufsliste konnte nicht geladen werden: {}", cause);
                    s.error = Some(FETCH_ERROR_MESSAGE.to_string());
                }
            }
            s.is_loading = false;
        });
    }

    /// Adds one entry; the confirmed item is prepended.
    pub async fn add_item(&self, ingredient: &str, category: &str) -> bool {
        let token = match self.access_token_or_record("Hinzufügen").await {
            Some(token) => token,
            None => return false,
        };

        match self.api.add_item(&token, ingredient, category).await {
            Ok(item) => {
                self.state.update(|s| {
                    s.items.insert(0, item);
                    s.error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("Hinzufügen", e.user_message());
                false
            }
        }
    }

    /// Bulk add of a product's ingredient list. The confirmed items are
    /// prepended in the order the server returned them.
    pub async fn add_from_product(
        &self,
        product_id: u32,
        ingredients: &[String],
    ) -> Option<Vec<ShoppingListItem>> {
        let token = match self.access_token_or_record("Produkt-Übernahme").await {
            Some(token) => token,
            None => return None,
        };

        match self.api.add_from_product(&token, product_id, ingredients).await {
            Ok(created) => {
                self.state.update(|s| {
                    s.items.splice(0..0, created.iter().cloned());
                    s.error = None;
                });
                Some(created)
            }
            Err(e) => {
                self.record_failure("Produkt-Übernahme", e.user_message());
                None
            }
        }
    }

    /// Flips the checked state of one entry. Only the item matching the
    /// confirmed id changes; an id the local list does not know leaves the
    /// collection as it is.
    pub async fn toggle_item(&self, item_id: u64) -> bool {
        let token = match self.access_token_or_record("Abhaken").await {
            Some(token) => token,
            None => return false,
        };

        match self.api.toggle_item(&token, item_id).await {
            Ok(updated) => {
                self.state.update(|s| {
                    if let Some(pos) = s.items.iter().position(|i| i.id == item_id) {
                        s.items[pos] = updated;
                    }
                    s.error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("Abhaken", e.user_message());
                false
            }
        }
    }

    pub async fn delete_item(&self, item_id: u64) -> bool {
        let token = match self.access_token_or_record("Löschen").await {
            Some(token) => token,
            None => return false,
        };

        match self.api.delete_item(&token, item_id).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.items.retain(|i| i.id != item_id);
                    s.error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("Löschen", e.user_message());
                false
            }
        }
    }

    pub async fn delete_checked(&self) -> bool {
        let token = match self.access_token_or_record("Löschen erledigter Einträge").await {
            Some(token) => token,
            None => return false,
        };

        match self.api.delete_checked(&token).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.items.retain(|i| !i.checked);
                    s.error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("Löschen erledigter Einträge", e.user_message());
                false
            }
        }
    }

    pub async fn clear_all(&self) -> bool {
        let token = match self.access_token_or_record("Liste leeren").await {
            Some(token) => token,
            None => return false,
        };

        match self.api.clear_all(&token).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.items.clear();
                    s.error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("Liste leeren", e.user_message());
                false
            }
        }
    }

    /// Session teardown. Pure local reset, idempotent, no network.
    pub fn clear_store(&self) {
        self.state.update(|s| {
            s.items.clear();
            s.error = None;
        });
    }

    async fn access_token_or_record(&self, action: &str) -> Option<String> {
        match self.tokens.access_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                self.record_failure(action, e.to_string());
                None
            }
        }
    }

    fn record_failure(&self, action: &str, message: String) {
        log::error!("❌ {} fehlgeschlagen: {}", action, message);
        self.state.update(|s| s.error = Some(message));
    }

    // ------------------------------------------------------------------
    // Derived projections.
    // ------------------------------------------------------------------

    pub fn items(&self) -> Vec<ShoppingListItem> {
        self.state.with(|s| s.items.clone())
    }

    pub fn unchecked_items(&self) -> Vec<ShoppingListItem> {
        self.state
            .with(|s| s.items.iter().filter(|i| !i.checked).cloned().collect())
    }

    pub fn checked_items(&self) -> Vec<ShoppingListItem> {
        self.state
            .with(|s| s.items.iter().filter(|i| i.checked).cloned().collect())
    }

    pub fn unchecked_count(&self) -> usize {
        self.state.with(|s| s.items.iter().filter(|i| !i.checked).count())
    }

    pub fn total_count(&self) -> usize {
        self.state.with(|s| s.items.len())
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
    use crate::testing::{item, FakeListApi, FakeTokens};
    use futures::executor::block_on;

    fn store_with(api: Rc<FakeListApi>) -> ShoppingListStore {
        ShoppingListStore::new(api, Rc::new(FakeTokens::valid()))
    }

    #[test]
    fn fetch_mirrors_the_server_collection_exactly() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Kuhmilch", "KAESE", false),
            item(2, "Salz", "GEWUERZ", true),
        ]));
        let store = store_with(api.clone());

        block_on(store.fetch_items());
        assert_eq!(store.items(), api.server_items());

        api.set_server_items(vec![item(3, "Fenchel", "GEWUERZ", false)]);
        block_on(store.fetch_items());

        // Exactly the server's last collection, no stale merge.
        assert_eq!(store.items(), vec![item(3, "Fenchel", "GEWUERZ", false)]);
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn add_item_prepends_the_confirmed_item() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert!(block_on(store.add_item("Salz", "GEWUERZ")));

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].ingredient, "Salz");
        assert!(!items[0].checked);
        // Prior items keep their relative order.
        assert_eq!(items[1], item(1, "Brot", "BROT", false));
    }

    #[test]
    fn add_from_product_prepends_batch_in_server_order() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api);
        block_on(store.fetch_items());

        let ingredients = vec!["Kuhmilch".to_string(), "Lab".to_string()];
        let created = block_on(store.add_from_product(7, &ingredients)).unwrap();

        assert_eq!(created.len(), 2);
        let items = store.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].ingredient, "Kuhmilch");
        assert_eq!(items[1].ingredient, "Lab");
        assert_eq!(items[2].ingredient, "Brot");
    }

    #[test]
    fn toggle_flips_only_the_matching_item() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Brot", "BROT", false),
            item(2, "Salz", "GEWUERZ", false),
        ]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert!(block_on(store.toggle_item(2)));

        let items = store.items();
        assert!(!items[0].checked);
        assert!(items[1].checked);
        assert_eq!(items[1].ingredient, "Salz");
    }

    #[test]
    fn toggle_of_unknown_local_id_leaves_collection_unchanged() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api.clone());
        block_on(store.fetch_items());

        // The server knows an item the local list has never seen.
        api.push_server_item(item(9, "Honig", "SONSTIGES", false));
        let before = store.items();

        assert!(block_on(store.toggle_item(9)));
        assert_eq!(store.items(), before);
    }

    #[test]
    fn delete_item_removes_exactly_the_matching_entry() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Brot", "BROT", false),
            item(2, "Salz", "GEWUERZ", true),
        ]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert!(block_on(store.delete_item(1)));
        assert_eq!(store.items(), vec![item(2, "Salz", "GEWUERZ", true)]);
    }

    #[test]
    fn delete_checked_removes_exactly_the_checked_entries() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Brot", "BROT", true),
            item(2, "Salz", "GEWUERZ", false),
            item(3, "Lab", "KAESE", true),
        ]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert!(block_on(store.delete_checked()));
        assert_eq!(store.items(), vec![item(2, "Salz", "GEWUERZ", false)]);
    }

    #[test]
    fn clear_all_empties_the_collection() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert!(block_on(store.clear_all()));
        assert!(store.items().is_empty());
    }

    #[test]
    fn failed_mutations_leave_the_collection_untouched() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Brot", "BROT", true),
            item(2, "Salz", "GEWUERZ", false),
        ]));
        let store = store_with(api.clone());
        block_on(store.fetch_items());
        let before = store.items();

        api.set_failing(true);

        assert!(!block_on(store.add_item("Honig", "SONSTIGES")));
        assert_eq!(store.items(), before);

        assert!(block_on(store.add_from_product(1, &["Lab".to_string()])).is_none());
        assert_eq!(store.items(), before);

        assert!(!block_on(store.toggle_item(1)));
        assert_eq!(store.items(), before);

        assert!(!block_on(store.delete_item(1)));
        assert_eq!(store.items(), before);

        assert!(!block_on(store.delete_checked()));
        assert_eq!(store.items(), before);

        assert!(!block_on(store.clear_all()));
        assert_eq!(store.items(), before);

        // Normalized policy: the failure also lands in the error slot.
        assert_eq!(store.error(), Some("Fehler: 500 Internal Server Error".to_string()));
    }

    #[test]
    fn fetch_failure_sets_the_fixed_message_and_keeps_items() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api.clone());
        block_on(store.fetch_items());

        api.set_failing(true);
        block_on(store.fetch_items());

        assert_eq!(store.error(), Some(FETCH_ERROR_MESSAGE.to_string()));
        assert_eq!(store.items(), vec![item(1, "Brot", "BROT", false)]);
        assert!(!store.is_loading());
    }

    #[test]
    fn actions_without_token_fail_and_record() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = ShoppingListStore::new(api, Rc::new(FakeTokens::denied()));

        assert!(!block_on(store.add_item("Salz", "GEWUERZ")));
        assert!(store.items().is_empty());
        assert_eq!(store.error(), Some("not authenticated".to_string()));
    }

    #[test]
    fn successful_action_clears_a_stale_error() {
        let api = Rc::new(FakeListApi::seeded(Vec::new()));
        let store = store_with(api.clone());

        api.set_failing(true);
        assert!(!block_on(store.add_item("Salz", "GEWUERZ")));
        assert!(store.error().is_some());

        api.set_failing(false);
        assert!(block_on(store.add_item("Salz", "GEWUERZ")));
        assert_eq!(store.error(), None);
    }

    #[test]
    fn clear_store_is_idempotent() {
        let api = Rc::new(FakeListApi::seeded(vec![item(1, "Brot", "BROT", false)]));
        let store = store_with(api);
        block_on(store.fetch_items());

        store.clear_store();
        let once = (store.items(), store.error());
        store.clear_store();
        let twice = (store.items(), store.error());

        assert_eq!(once, twice);
        assert!(store.items().is_empty());
    }

    #[test]
    fn derived_projections_split_by_checked() {
        let api = Rc::new(FakeListApi::seeded(vec![
            item(1, "Brot", "BROT", true),
            item(2, "Salz", "GEWUERZ", false),
            item(3, "Lab", "KAESE", false),
        ]));
        let store = store_with(api);
        block_on(store.fetch_items());

        assert_eq!(store.total_count(), 3);
        assert_eq!(store.unchecked_count(), 2);
        assert_eq!(
            store.unchecked_items().iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert_eq!(
            store.checked_items().iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1]
        );
    }
}
