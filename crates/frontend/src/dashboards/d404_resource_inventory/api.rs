use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use async_trait::async_trait;
use contracts::dashboards::d404_resource_inventory::{FetchResponse, ServicesDataset};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Backend endpoints used by the dashboard
#[async_trait(?Send)]
pub trait ResourceApi {
    /// `GET /api/services`
    async fn fetch_services(&self) -> Result<ServicesDataset, ApiError>;

    /// `POST /api/fetch`, asks the backend to re-sync its source data
    async fn trigger_sync(&self) -> Result<FetchResponse, ApiError>;
}

/// `ResourceApi` over HTTP via `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpResourceApi {
    services_url: String,
    fetch_url: String,
}

impl HttpResourceApi {
    pub fn new(services_url: impl Into<String>, fetch_url: impl Into<String>) -> Self {
        Self {
            services_url: services_url.into(),
            fetch_url: fetch_url.into(),
        }
    }

    /// Resolve both endpoint URLs against the configured API origin
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            api_url(config, &config.services_path),
            api_url(config, &config.fetch_path),
        )
    }
}

#[async_trait(?Send)]
impl ResourceApi for HttpResourceApi {
    async fn fetch_services(&self) -> Result<ServicesDataset, ApiError> {
        let response = Request::get(&self.services_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let data: ServicesDataset = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(data)
    }

    async fn trigger_sync(&self) -> Result<FetchResponse, ApiError> {
        let response = Request::post(&self.fetch_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        // Body is informational only; an unreadable body still counts as success on 2xx
        let body = response.text().await.unwrap_or_default();
        let reply = FetchResponse::from_body(&body);

        if !response.ok() {
            log::error!(
                "Sync rejected by backend ({}): {}",
                response.status(),
                reply.summary()
            );
            return Err(ApiError::Status(response.status()));
        }

        Ok(reply)
    }
}
