//! Application configuration.
//!
//! The defaults are embedded in the bundle. A deployment can override them
//! without rebuilding by putting TOML into the page head:
//!
//! ```html
//! <meta name="dashboard-config" content='[api]
//! base_path = "https://pmis.example.go.ke/api"'>
//! ```
//!
//! Sections missing from the override keep their embedded values.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// localStorage key for the project table column selection
    pub column_visibility_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            column_visibility_key: "dashboard.projects.visibleColumns.v1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[storage]
column_visibility_key = "dashboard.projects.visibleColumns.v1"

[logging]
level = "debug"
"#;

const CONFIG_META_NAME: &str = "dashboard-config";

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Process-wide configuration, resolved on first use.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Parse a TOML document into a config.
pub fn parse_config(raw: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(raw)
}

/// Load configuration
///
/// Search order:
/// 1. `<meta name="dashboard-config">` in the host page
/// 2. Falls back to the embedded default config
pub fn load_config() -> AppConfig {
    if let Some(raw) = read_meta_override() {
        match parse_config(&raw) {
            Ok(config) => {
                log::info!("Loaded dashboard config from page meta");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid dashboard-config meta: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn read_meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
        .ok()??;
    meta.get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_override() -> Option<String> {
    None
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.level().to_level_filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(
            config.storage.column_visibility_key,
            "dashboard.projects.visibleColumns.v1"
        );
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_other_sections() {
        let config = parse_config("[api]\nbase_path = \"https://pmis.example/api\"\n").unwrap();
        assert_eq!(config.api.base_path, "https://pmis.example/api");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let logging = LoggingConfig {
            level: "loud".into(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
        let logging = LoggingConfig {
            level: "warn".into(),
        };
        assert_eq!(logging.level(), log::Level::Warn);
    }

    #[test]
    fn test_level_filter_matches_level() {
        let logging = LoggingConfig {
            level: "info".into(),
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
        assert_eq!(LoggingConfig::default().level_filter(), log::LevelFilter::Debug);
    }
}
