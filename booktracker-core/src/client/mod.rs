//! Read and write seams between the view-model and the network
//!
//! [`CatalogSource`] covers the two read paths the catalog view uses plus
//! the single-volume lookup; [`AccountService`] covers the login and
//! registration writes. [`HttpCatalogClient`] implements both over HTTP.

mod http;

pub use http::HttpCatalogClient;

use crate::error::Result;
use crate::types::{LocalPage, LoginRequest, RegisterRequest, Volume, VolumeSearch};
use async_trait::async_trait;

/// Query sent to the external search when the user submitted nothing
pub const DEFAULT_SEARCH_QUERY: &str = "subject:Computers";

/// Read-only book sources
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// One page of the local catalog, filtered by `query` when non-empty
    async fn list_local(&self, query: &str, page: usize, size: usize) -> Result<LocalPage>;

    /// One page of external keyword search results
    async fn search_external(&self, query: &str, page: usize, size: usize)
        -> Result<VolumeSearch>;

    /// A single external volume by id
    async fn get_volume(&self, id: &str) -> Result<Volume>;
}

/// Account writes; requests are sent as given, [`crate::AccountFlow`] validates them
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<()>;

    async fn register(&self, request: &RegisterRequest) -> Result<()>;
}

/// The query actually sent to the external search
pub fn effective_search_query(query: &str) -> &str {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        DEFAULT_SEARCH_QUERY
    } else {
        trimmed
    }
}
