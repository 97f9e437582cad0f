//! Booktracker Core Library
//!
//! Client-side building blocks for browsing and searching a book catalog.
//! Books arrive in two shapes, the first-party catalog's paged records and
//! the external search source's nested volumes, and are normalized into a
//! single [`BookSummary`] before anything is rendered. The
//! [`viewmodel::CatalogViewModel`] owns the query/page state machine and
//! guarantees that only the most recently issued fetch is displayed.

pub mod account;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod normalize;
pub mod types;
pub mod viewmodel;

pub use account::{AccountFlow, Redirect};
pub use client::{AccountService, CatalogSource, HttpCatalogClient};
pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use types::{
    AuthorsField, BookSummary, ImageLinks, LocalBook, LocalPage, LoginRequest, RecordId,
    RegisterRequest, Volume, VolumeInfo, VolumeSearch,
};
pub use viewmodel::{CatalogViewModel, FetchOutcome, Mode, SearchState, MAX_PAGE, PAGE_SIZE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let summary = BookSummary::new("b1", "Test Book");
        assert_eq!(summary.id, "b1");
        assert_eq!(summary.title, "Test Book");
        assert!(summary.cover_url.is_none());
    }
}
