// ============================================================================
// API CLIENT - HTTP only, stateless
// ============================================================================
// No business logic here. One request per call, bearer token on every
// request, JSON in and out. Retrying is the caller's business.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{ShoppingListItem, UserProfile};
use crate::services::api::{ApiError, ProfileApi, ShoppingListApi};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            })
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_json(Self::check_status(response)?).await
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .header("Authorization", &Self::bearer(token))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_json(Self::check_status(response)?).await
    }

    async fn delete(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(path))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response).map(|_| ())
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct AddItemRequest<'a> {
    ingredient: &'a str,
    category: &'a str,
}

#[derive(Serialize)]
struct AddFromProductRequest<'a> {
    #[serde(rename = "productId")]
    product_id: u32,
    ingredients: &'a [String],
}

#[derive(serde::Deserialize)]
struct AddFromProductResponse {
    items: Vec<ShoppingListItem>,
}

#[async_trait(?Send)]
impl ProfileApi for ApiClient {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get_json("/api/profile", token).await
    }
}

#[async_trait(?Send)]
impl ShoppingListApi for ApiClient {
    async fn fetch_items(&self, token: &str) -> Result<Vec<ShoppingListItem>, ApiError> {
        self.get_json("/api/shopping-list", token).await
    }

    async fn add_item(
        &self,
        token: &str,
        ingredient: &str,
        category: &str,
    ) -> Result<ShoppingListItem, ApiError> {
        self.post_json(
            "/api/shopping-list",
            token,
            &AddItemRequest { ingredient, category },
        )
        .await
    }

    async fn add_from_product(
        &self,
        token: &str,
        product_id: u32,
        ingredients: &[String],
    ) -> Result<Vec<ShoppingListItem>, ApiError> {
        let response: AddFromProductResponse = self
            .post_json(
                "/api/shopping-list/from-product",
                token,
                &AddFromProductRequest { product_id, ingredients },
            )
            .await?;
        Ok(response.items)
    }

    async fn toggle_item(&self, token: &str, item_id: u64) -> Result<ShoppingListItem, ApiError> {
        let response = Request::put(&self.url(&format!("/api/shopping-list/{}/toggle", item_id)))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_json(Self::check_status(response)?).await
    }

    async fn delete_item(&self, token: &str, item_id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/api/shopping-list/{}", item_id), token).await
    }

    async fn delete_checked(&self, token: &str) -> Result<(), ApiError> {
        self.delete("/api/shopping-list/checked", token).await
    }

    async fn clear_all(&self, token: &str) -> Result<(), ApiError> {
        self.delete("/api/shopping-list/all", token).await
    }
}
