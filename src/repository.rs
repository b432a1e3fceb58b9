//! Product repository: the fetched collection and its load status.
//!
//! Every fetch attempt is tagged with a [`FetchTicket`]. Only the newest
//! ticket may complete; an older response arriving late is dropped, so the
//! last request issued always wins.

use std::fmt;

use crate::api::{ApiError, ProductSource};
use crate::catalog::{Product, ProductId};

/// Fetch lifecycle of the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// Sequence number identifying one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
    status: LoadStatus,
    last_error: Option<String>,
    latest: u64,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started and hand out its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.status = LoadStatus::Loading;
        FetchTicket(self.latest)
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the collection wholesale; failure sets
    /// [`LoadStatus::Error`] and keeps whatever was loaded before. Returns
    /// `false` if the ticket was superseded and the result was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Product>, ApiError>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Dropping stale product response"
            );
            return false;
        }

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "Products loaded");
                self.products = products;
                self.status = LoadStatus::Idle;
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load products");
                self.status = LoadStatus::Error;
                self.last_error = Some(err.to_string());
            }
        }
        true
    }

    /// Begin, issue one request, complete. No retry.
    pub async fn fetch<S>(&mut self, source: &S) -> LoadStatus
    where
        S: ProductSource + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = source.products().await;
        self.complete(ticket, result);
        self.status
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
