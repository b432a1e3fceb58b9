use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::ProductSource;
use crate::catalog::{Product, ProductId};
use crate::config::ApiConfig;

/// HTTP client for the products REST API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// GET the URL and return the raw body of a success response.
    async fn get_body(&self, url: &Url) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let body = self.get_body(&url).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(&["products"]).await
    }

    async fn product(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", id.as_str()])?;
        let body = match self.get_body(&url).await {
            Ok(body) => body,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        // The API answers unknown ids with an empty 200 body.
        let text = String::from_utf8_lossy(&body);
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<Product>>(&text).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&["products", "categories"]).await
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        self.get_json(&["products", "category", category]).await
    }
}
