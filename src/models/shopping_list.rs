use serde::{Deserialize, Serialize};

/// Ein Eintrag der Einkaufsliste. `id` is assigned by the backend and is
/// unique within the list for the lifetime of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: u64,
    pub ingredient: String,
    pub category: String,
    pub checked: bool,
}
