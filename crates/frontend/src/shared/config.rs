//! Dashboard configuration
//!
//! `config.toml` next to the crate manifest is embedded at build time and
//! parsed once. Every field has a default, so a partial file is fine and a
//! broken one falls back to the defaults.

use contracts::dashboards::d404_resource_inventory::{FETCH_PATH, SERVICES_PATH};
use once_cell::sync::Lazy;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<DashboardConfig> = Lazy::new(|| load_config(EMBEDDED_CONFIG));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub dashboard: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub backend_port: Option<u16>,
    pub services_path: String,
    pub fetch_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            backend_port: None,
            services_path: SERVICES_PATH.to_string(),
            fetch_path: FETCH_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub loading_text: String,
    pub no_data_text: String,
    pub refresh_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "AWS Resources".to_string(),
            loading_text: "Loading...".to_string(),
            no_data_text: "No data available".to_string(),
            refresh_label: "Refresh data".to_string(),
        }
    }
}

/// Parse configuration text, falling back to defaults on error
pub fn load_config(contents: &str) -> DashboardConfig {
    match toml::from_str::<DashboardConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid dashboard config, using defaults: {}", e);
            DashboardConfig::default()
        }
    }
}

/// Configuration embedded in the bundle
pub fn config() -> &'static DashboardConfig {
    &CONFIG
}
