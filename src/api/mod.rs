//! Catalog REST API access.

mod client;
mod error;

use async_trait::async_trait;

pub use client::CatalogClient;
pub use error::ApiError;

use crate::catalog::{Product, ProductId};

/// Source of catalog data.
///
/// Implemented by [`CatalogClient`] over HTTP; tests substitute canned
/// sources to drive the repository without a server.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// `GET /products`
    async fn products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`. `Ok(None)` when the id is unknown.
    async fn product(&self, id: ProductId) -> Result<Option<Product>, ApiError>;

    /// `GET /products/categories`
    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /products/category/{category}`
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, ApiError>;
}
