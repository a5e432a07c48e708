//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs from the dashboard config.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `base_url` from config, when set (trailing `/` trimmed)
/// 2. page protocol + hostname with `backend_port`, when a port is set
/// 3. empty string, i.e. same-origin relative requests
pub fn api_base(config: &ApiConfig) -> String {
    resolve_api_base(config, page_location())
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config().api, "/api/services");
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

/// Pure part of [`api_base`]; `location` is `(protocol, hostname)` of the page
pub fn resolve_api_base(config: &ApiConfig, location: Option<(String, String)>) -> String {
    let explicit = config.base_url.trim().trim_end_matches('/');
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    match (config.backend_port, location) {
        (Some(port), Some((protocol, hostname))) => format!("{}//{}:{}", protocol, hostname, port),
        _ => String::new(),
    }
}

fn page_location() -> Option<(String, String)> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}
