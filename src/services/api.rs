// ============================================================================
// API SEAMS - trait contracts between the stores and the HTTP client
// ============================================================================
// The stores only ever see these traits. The real implementation is the
// gloo-net client in api_client.rs; tests substitute in-memory fakes.
// ============================================================================

use async_trait::async_trait;

use crate::models::{ShoppingListItem, UserProfile};

/// Failure signal of a single backend call. One request per call, no
/// retries; the caller decides whether to re-invoke.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success HTTP status.
    Status { status: u16, status_text: String },
    /// Network-level fault before any status was received.
    Network(String),
}

impl ApiError {
    /// User-facing message, formatted the way the views show it.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, status_text } => {
                format!("Fehler: {} {}", status, status_text)
            }
            ApiError::Network(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, status_text } => {
                write!(f, "HTTP {}: {}", status, status_text)
            }
            ApiError::Network(message) => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait(?Send)]
pub trait ProfileApi {
    /// `GET /api/profile`
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;
}

#[async_trait(?Send)]
pub trait ShoppingListApi {
    /// `GET /api/shopping-list`
    async fn fetch_items(&self, token: &str) -> Result<Vec<ShoppingListItem>, ApiError>;

    /// `POST /api/shopping-list`, returns the created item.
    async fn add_item(
        &self,
        token: &str,
        ingredient: &str,
        category: &str,
    ) -> Result<ShoppingListItem, ApiError>;

    /// `POST /api/shopping-list/from-product`, returns the created items in
    /// server order.
    async fn add_from_product(
        &self,
        token: &str,
        product_id: u32,
        ingredients: &[String],
    ) -> Result<Vec<ShoppingListItem>, ApiError>;

    /// `PUT /api/shopping-list/{id}/toggle`, returns the updated item.
    async fn toggle_item(&self, token: &str, item_id: u64) -> Result<ShoppingListItem, ApiError>;

    /// `DELETE /api/shopping-list/{id}`
    async fn delete_item(&self, token: &str, item_id: u64) -> Result<(), ApiError>;

    /// `DELETE /api/shopping-list/checked`
    async fn delete_checked(&self, token: &str) -> Result<(), ApiError>;

    /// `DELETE /api/shopping-list/all`
    async fn clear_all(&self, token: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats() {
        let err = ApiError::Status {
            status: 403,
            status_text: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 403: Forbidden");
        assert_eq!(err.user_message(), "Fehler: 403 Forbidden");
    }

    #[test]
    fn network_error_keeps_raw_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.user_message(), "connection refused");
    }
}
