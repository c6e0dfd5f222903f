use serde::{Deserialize, Serialize};

/// Katalogprodukt. The descriptive data lives in a static catalog module,
/// not behind the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub recipe: Option<String>,
    pub price: f64,
    pub image_url: String,
    pub image_url_details: String,
    pub ingredients: Option<String>,
}

impl Product {
    /// Splits the comma-separated ingredient declaration into the list the
    /// shopping list bulk add expects. Empty when the product has none.
    pub fn ingredient_list(&self) -> Vec<String> {
        self.ingredients
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
