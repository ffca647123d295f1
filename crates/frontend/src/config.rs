use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub routing: RoutingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend address without trailing slash. Empty means "same host as the page".
    #[serde(default)]
    pub base_url: String,
    /// Port used when `base_url` is derived from the page location
    #[serde(default = "default_fallback_port")]
    pub fallback_port: u16,
    #[serde(default = "default_period_days")]
    pub dashboard_period_days: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutingConfig {
    /// Prefix the app is served under, e.g. "/dropship". Empty for the site root.
    #[serde(default)]
    pub base_path: String,
}

fn default_fallback_port() -> u16 {
    8000
}

fn default_period_days() -> u32 {
    contracts::dashboards::d100_overview::DEFAULT_PERIOD_DAYS
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
fallback_port = 8000
dashboard_period_days = 30

[routing]
base_path = ""
"#;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load configuration.
///
/// The embedded default is overridden at build time by
/// `DROPSHIP_API_URL` and `DROPSHIP_BASE_PATH`.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_overrides(
        option_env!("DROPSHIP_API_URL"),
        option_env!("DROPSHIP_BASE_PATH"),
    );
    Ok(config)
}

/// Process-wide configuration, loaded on first use
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(|| match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load embedded config, using built-in defaults: {}", e);
            AppConfig::fallback()
        }
    })
}

impl AppConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                fallback_port: default_fallback_port(),
                dashboard_period_days: default_period_days(),
            },
            routing: RoutingConfig {
                base_path: String::new(),
            },
        }
    }

    pub fn apply_overrides(&mut self, api_url: Option<&str>, base_path: Option<&str>) {
        if let Some(url) = api_url {
            self.api.base_url = url.to_string();
        }
        if let Some(path) = base_path {
            self.routing.base_path = path.to_string();
        }
        self.api.base_url = normalize_base_url(&self.api.base_url);
        self.routing.base_path = normalize_base_path(&self.routing.base_path);
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// "dropship/" -> "/dropship", "/" -> ""
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.fallback_port, 8000);
        assert_eq!(config.api.dashboard_period_days, 30);
        assert_eq!(config.routing.base_path, "");
    }

    #[test]
    fn test_default_serves_from_site_root() {
        let config = load_config().unwrap();
        if option_env!("DROPSHIP_BASE_PATH").is_none() {
            assert_eq!(config.routing.base_path, "");
        }
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: AppConfig = toml::from_str("[api]\n[routing]\n").unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.fallback_port, 8000);
        assert_eq!(config.routing.base_path, "");
    }

    #[test]
    fn test_overrides_are_normalized() {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.apply_overrides(Some("https://api.example.com/ "), Some("shop/"));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.routing.base_path, "/shop");

        config.apply_overrides(None, Some("/"));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.routing.base_path, "");
    }
}
