use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub auth_domain: String,
    pub auth_client_id: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: "http://localhost:8080".to_string(),
            api_base_url_production: "https://api.casellese.shop".to_string(),
            environment: "development".to_string(),
            auth_domain: "casellese.eu.auth0.com".to_string(),
            auth_client_id: String::new(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (forwarded from .env by build.rs).
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8080")
                .to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.casellese.shop")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            auth_domain: option_env!("AUTH_DOMAIN")
                .unwrap_or("casellese.eu.auth0.com")
                .to_string(),
            auth_client_id: option_env!("AUTH_CLIENT_ID").unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Backend base URL for the current environment.
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
