//! Application configuration
//!
//! The WASM bundle has no filesystem, so the configuration is a TOML document
//! embedded at build time. `BILLING_API_URL` set during the build overrides the
//! API base URL without touching the document.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub customers: CustomersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute URL (`https://host:8000/api`) or a path resolved against the
    /// page origin (`/api`)
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomersConfig {
    /// Fixed page size of the customer list
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for CustomersConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://127.0.0.1:8000/api"

[customers]
page_size = 10
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| load_config(DEFAULT_CONFIG, option_env!("BILLING_API_URL")));

/// Current configuration (parsed once)
pub fn config() -> &'static Config {
    &CONFIG
}

/// Parse `source` and apply the optional base URL override.
///
/// A broken document falls back to built-in defaults; the error is logged.
pub fn load_config(source: &str, api_url_override: Option<&str>) -> Config {
    let mut config = match toml::from_str::<Config>(source) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {}", e);
            Config {
                api: ApiConfig {
                    base_url: "/api".to_string(),
                },
                customers: CustomersConfig::default(),
            }
        }
    };

    if let Some(url) = api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        log::debug!("API base URL overridden at build time: {}", url);
        config.api.base_url = url.to_string();
    }

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.customers.page_size == 0 {
        config.customers.page_size = default_page_size();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None);
        assert_eq!(config.api.base_url, "https://127.0.0.1:8000/api");
        assert_eq!(config.customers.page_size, 10);
    }

    #[test]
    fn test_override_and_trailing_slash() {
        let config = load_config(DEFAULT_CONFIG, Some("http://billing.local/api/"));
        assert_eq!(config.api.base_url, "http://billing.local/api");

        let config = load_config(DEFAULT_CONFIG, Some("  "));
        assert_eq!(config.api.base_url, "https://127.0.0.1:8000/api");
    }

    #[test]
    fn test_missing_customers_section_uses_default_page_size() {
        let config = load_config("[api]\nbase_url = \"/api\"\n", None);
        assert_eq!(config.customers.page_size, 10);

        let config = load_config("[api]\nbase_url = \"/api\"\n[customers]\npage_size = 0\n", None);
        assert_eq!(config.customers.page_size, 10);
    }

    #[test]
    fn test_broken_document_falls_back() {
        let config = load_config("not = [toml", None);
        assert_eq!(config.api.base_url, "/api");
    }
}
