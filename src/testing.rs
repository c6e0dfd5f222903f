// Shared fakes for the host test suite. Everything here is behind
// #[cfg(test)] via the module declaration in lib.rs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::models::{Role, ShoppingListItem, UserProfile};
use crate::services::{ApiError, AuthError, ProfileApi, ShoppingListApi, TokenProvider};
use crate::utils::sleep_ms;

pub fn admin_profile() -> UserProfile {
    UserProfile {
        id: "u-admin".to_string(),
        name: "Alma Admin".to_string(),
        email: "alma@casellese.shop".to_string(),
        role: Role::Admin,
    }
}

pub fn customer_profile() -> UserProfile {
    UserProfile {
        id: "u-carla".to_string(),
        name: "Carla Kunde".to_string(),
        email: "carla@example.com".to_string(),
        role: Role::Customer,
    }
}

pub fn item(id: u64, ingredient: &str, category: &str, checked: bool) -> ShoppingListItem {
    ShoppingListItem {
        id,
        ingredient: ingredient.to_string(),
        category: category.to_string(),
        checked,
    }
}

/// Token provider with a fixed answer.
pub struct FakeTokens {
    token: Option<String>,
}

impl FakeTokens {
    pub fn valid() -> Self {
        Self {
            token: Some("token-123".to_string()),
        }
    }

    pub fn denied() -> Self {
        Self { token: None }
    }
}

#[async_trait(?Send)]
impl TokenProvider for FakeTokens {
    async fn access_token(&self) -> Result<String, AuthError> {
        self.token.clone().ok_or(AuthError::NotAuthenticated)
    }
}

/// Profile endpoint with a canned result and a call counter.
pub struct FakeProfileApi {
    result: Result<UserProfile, ApiError>,
    calls: Rc<Cell<u32>>,
}

impl FakeProfileApi {
    pub fn returning(result: Result<UserProfile, ApiError>) -> Self {
        Self {
            result,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> Rc<Cell<u32>> {
        self.calls.clone()
    }
}

#[async_trait(?Send)]
impl ProfileApi for FakeProfileApi {
    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

/// Profile endpoint that answers after a delay.
pub struct DelayedProfileApi {
    delay_ms: u32,
    profile: UserProfile,
}

impl DelayedProfileApi {
    pub fn new(delay_ms: u32, profile: UserProfile) -> Self {
        Self { delay_ms, profile }
    }
}

#[async_trait(?Send)]
impl ProfileApi for DelayedProfileApi {
    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        sleep_ms(self.delay_ms).await;
        Ok(self.profile.clone())
    }
}

/// Profile endpoint that never answers.
pub struct NeverProfileApi;

#[async_trait(?Send)]
impl ProfileApi for NeverProfileApi {
    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        futures::future::pending().await
    }
}

/// In-memory stand-in for the shopping list backend. Keeps its own server
/// collection so tests can assert "store equals the server's last answer".
pub struct FakeListApi {
    server: RefCell<Vec<ShoppingListItem>>,
    next_id: Cell<u64>,
    failing: Cell<bool>,
}

impl FakeListApi {
    pub fn seeded(items: Vec<ShoppingListItem>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            server: RefCell::new(items),
            next_id: Cell::new(next_id),
            failing: Cell::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn server_items(&self) -> Vec<ShoppingListItem> {
        self.server.borrow().clone()
    }

    pub fn set_server_items(&self, items: Vec<ShoppingListItem>) {
        *self.server.borrow_mut() = items;
    }

    pub fn push_server_item(&self, item: ShoppingListItem) {
        self.server.borrow_mut().insert(0, item);
    }

    fn guard(&self) -> Result<(), ApiError> {
        if self.failing.get() {
            Err(ApiError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn fresh_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[async_trait(?Send)]
impl ShoppingListApi for FakeListApi {
    async fn fetch_items(&self, _token: &str) -> Result<Vec<ShoppingListItem>, ApiError> {
        self.guard()?;
        Ok(self.server_items())
    }

    async fn add_item(
        &self,
        _token: &str,
        ingredient: &str,
        category: &str,
    ) -> Result<ShoppingListItem, ApiError> {
        self.guard()?;
        let created = ShoppingListItem {
            id: self.fresh_id(),
            ingredient: ingredient.to_string(),
            category: category.to_string(),
            checked: false,
        };
        self.server.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn add_from_product(
        &self,
        _token: &str,
        _product_id: u32,
        ingredients: &[String],
    ) -> Result<Vec<ShoppingListItem>, ApiError> {
        self.guard()?;
        let created: Vec<ShoppingListItem> = ingredients
            .iter()
            .map(|ingredient| ShoppingListItem {
                id: self.fresh_id(),
                ingredient: ingredient.clone(),
                category: "PRODUKT".to_string(),
                checked: false,
            })
            .collect();
        self.server.borrow_mut().splice(0..0, created.iter().cloned());
        Ok(created)
    }

    async fn toggle_item(&self, _token: &str, item_id: u64) -> Result<ShoppingListItem, ApiError> {
        self.guard()?;
        let mut server = self.server.borrow_mut();
        match server.iter_mut().find(|i| i.id == item_id) {
            Some(entry) => {
                entry.checked = !entry.checked;
                Ok(entry.clone())
            }
            None => Err(ApiError::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }

    async fn delete_item(&self, _token: &str, item_id: u64) -> Result<(), ApiError> {
        self.guard()?;
        self.server.borrow_mut().retain(|i| i.id != item_id);
        Ok(())
    }

    async fn delete_checked(&self, _token: &str) -> Result<(), ApiError> {
        self.guard()?;
        self.server.borrow_mut().retain(|i| !i.checked);
        Ok(())
    }

    async fn clear_all(&self, _token: &str) -> Result<(), ApiError> {
        self.guard()?;
        self.server.borrow_mut().clear();
        Ok(())
    }
}
