pub mod api;
pub mod api_client;
pub mod auth;

pub use api::{ApiError, ProfileApi, ShoppingListApi};
pub use api_client::ApiClient;
pub use auth::{AuthError, AuthSession, TokenProvider};
