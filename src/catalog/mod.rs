//! Catalog transport seam
//!
//! Abstracts delivery of request bodies to the catalog endpoint so the
//! publish flow can run against the real HTTP transport or a test double.

mod http;

pub use http::{DEFAULT_TIMEOUT_SECS, HttpCatalogService};

use crate::error::Result;
use async_trait::async_trait;

/// Catalog service trait for request delivery
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// POST one request body to the catalog and return the raw response text
    async fn send_request(&self, body: &str) -> Result<String>;

    /// The endpoint this service delivers to
    fn endpoint(&self) -> &str;
}
