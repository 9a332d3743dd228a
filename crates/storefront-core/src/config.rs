//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Backend API locations.
    #[serde(default)]
    pub api: ApiConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Phone ordering details shown under the add-to-cart action.
    #[serde(default)]
    pub support: SupportConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse configuration from TOML. Missing sections take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, base) in [
            ("api.product_base", &self.api.product_base),
            ("api.cart_base", &self.api.cart_base),
        ] {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("expected an http(s) URL, got {:?}", base),
                });
            }
        }

        let code = &self.display.currency;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid {
                key: "display.currency",
                reason: format!("expected a 3-letter currency code, got {:?}", code),
            });
        }

        Ok(())
    }
}

/// Backend API locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product service.
    #[serde(default = "default_api_base")]
    pub product_base: String,
    /// Base URL of the cart service.
    #[serde(default = "default_api_base")]
    pub cart_base: String,
}

fn default_api_base() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            product_base: default_api_base(),
            cart_base: default_api_base(),
        }
    }
}

impl ApiConfig {
    /// Product detail endpoint for a product.
    pub fn product_detail_url(&self, product_id: &str) -> String {
        format!(
            "{}/storefront/products/detail/{}",
            self.product_base.trim_end_matches('/'),
            product_id
        )
    }

    /// Product variations endpoint for a product.
    pub fn product_variations_url(&self, product_id: &str) -> String {
        format!(
            "{}/storefront/product-variations/{}",
            self.product_base.trim_end_matches('/'),
            product_id
        )
    }

    /// Cart items endpoint.
    pub fn cart_items_url(&self) -> String {
        format!("{}/storefront/cart/items", self.cart_base.trim_end_matches('/'))
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code prices are formatted in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Phone ordering details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Dialable number used in the `tel:` link.
    pub phone: String,
    /// Number as displayed to shoppers.
    pub phone_label: String,
    /// Opening hours text.
    pub hours: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            phone: "18009999".to_string(),
            phone_label: "1800.9999".to_string(),
            hours: "7:30 - 22:00".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "json" or "human".
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Minimum level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}
