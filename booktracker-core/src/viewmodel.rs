//! Catalog view-model: query/page state and the fetches that drive it
//!
//! Every fetch takes a ticket (a generation number plus the key it was
//! issued for) while holding the state lock, releases the lock for the
//! network call, then re-acquires it to commit. A completion whose
//! generation is no longer current is discarded, so overlapping requests
//! always settle on the most recently issued one.

use crate::client::CatalogSource;
use crate::display::EMPTY_NOTICE;
use crate::error::CatalogError;
use crate::normalize::{normalize_local, normalize_volumes};
use crate::types::BookSummary;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Records requested per page on both fetch paths
pub const PAGE_SIZE: usize = 12;

/// Highest zero-based page index the view will request
pub const MAX_PAGE: usize = 100_000;

/// Clamp a requested page index into `0..=MAX_PAGE`
pub fn clamp_page(n: i64) -> usize {
    usize::try_from(n.max(0)).map_or(MAX_PAGE, |page| page.min(MAX_PAGE))
}

/// Which source the loaded list came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Paged listing of the local catalog
    #[default]
    Browse,

    /// External keyword search
    Search,
}

/// The request a loaded list corresponds to
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FetchKey {
    pub mode: Mode,
    pub query: String,
    pub page: usize,
}

/// State of one catalog view session
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,

    /// Zero-based page index
    pub page: usize,

    pub mode: Mode,

    /// Most recently committed results
    pub books: Vec<BookSummary>,

    /// What `books` was fetched for; `None` until the first commit
    pub loaded: Option<FetchKey>,

    /// User-visible notice after a failed fetch
    pub notice: Option<String>,

    #[serde(skip)]
    generation: u64,
}

impl SearchState {
    /// Create an empty state for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last fetch failed
    pub fn has_error(&self) -> bool {
        self.notice.is_some()
    }

    fn issue(&mut self, mode: Mode) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            key: FetchKey {
                mode,
                query: self.query.clone(),
                page: self.page,
            },
        }
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.generation == ticket.generation
    }
}

#[derive(Debug)]
struct Ticket {
    generation: u64,
    key: FetchKey,
}

/// Result of one view-model operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Results were committed to the state
    Committed { count: usize },

    /// The fetch failed; previous results were kept and a notice set
    Failed,

    /// A newer request was issued meanwhile; this result was discarded
    Stale,

    /// Nothing to do (for example going back from the first page)
    Skipped,
}

/// Drives a [`SearchState`] from user intent through a [`CatalogSource`]
pub struct CatalogViewModel {
    source: Arc<dyn CatalogSource>,
    state: Mutex<SearchState>,
}

impl CatalogViewModel {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            state: Mutex::new(SearchState::new()),
        }
    }

    /// Snapshot of the current state for rendering
    pub async fn state(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    /// Update the query without fetching
    pub async fn set_query(&self, text: impl Into<String>) {
        self.state.lock().await.query = text.into();
    }

    /// Jump to a page (clamped to `0..=MAX_PAGE`) and reload the listing
    pub async fn set_page(&self, n: i64) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.page = clamp_page(n);
            state.issue(Mode::Browse)
        };
        self.run_local(ticket).await
    }

    /// Reload the local catalog for the current query and page
    pub async fn load_page(&self) -> FetchOutcome {
        let ticket = self.state.lock().await.issue(Mode::Browse);
        self.run_local(ticket).await
    }

    /// Search the external source for the current query, from the first page
    pub async fn search_external(&self) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.page = 0;
            state.issue(Mode::Search)
        };
        self.run_external(ticket).await
    }

    /// Form submission: set the query and search in one step
    pub async fn submit_search(&self, text: impl Into<String>) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.query = text.into();
            state.page = 0;
            state.issue(Mode::Search)
        };
        self.run_external(ticket).await
    }

    /// Previous page of the listing; no-op on the first page
    pub async fn go_prev(&self) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            if state.page == 0 {
                return FetchOutcome::Skipped;
            }
            state.page -= 1;
            state.issue(Mode::Browse)
        };
        self.run_local(ticket).await
    }

    /// Next page of the listing; stays on `MAX_PAGE` once there
    pub async fn go_next(&self) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.page = state.page.saturating_add(1).min(MAX_PAGE);
            state.issue(Mode::Browse)
        };
        self.run_local(ticket).await
    }

    async fn run_local(&self, ticket: Ticket) -> FetchOutcome {
        let FetchKey { query, page, .. } = &ticket.key;
        let result = self
            .source
            .list_local(query, *page, PAGE_SIZE)
            .await
            .map(|listing| normalize_local(listing, page.saturating_mul(PAGE_SIZE)));
        self.commit(ticket, result).await
    }

    async fn run_external(&self, ticket: Ticket) -> FetchOutcome {
        let FetchKey { query, page, .. } = &ticket.key;
        let result = self
            .source
            .search_external(query, *page, PAGE_SIZE)
            .await
            .map(|search| normalize_volumes(search, page.saturating_mul(PAGE_SIZE)));
        self.commit(ticket, result).await
    }

    async fn commit(
        &self,
        ticket: Ticket,
        result: crate::Result<Vec<BookSummary>>,
    ) -> FetchOutcome {
        let mut state = self.state.lock().await;
        if !state.is_current(&ticket) {
            tracing::debug!(
                generation = ticket.generation,
                current = state.generation,
                query = %ticket.key.query,
                "Discarding stale fetch result"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(books) => {
                let count = books.len();
                tracing::info!(
                    mode = ?ticket.key.mode,
                    query = %ticket.key.query,
                    page = ticket.key.page,
                    count,
                    "Loaded books"
                );
                state.mode = ticket.key.mode;
                state.books = books;
                state.loaded = Some(ticket.key);
                state.notice = None;
                FetchOutcome::Committed { count }
            }
            Err(err) => {
                report_failure(&ticket.key, &err);
                state.notice = Some(EMPTY_NOTICE.to_string());
                FetchOutcome::Failed
            }
        }
    }
}

fn report_failure(key: &FetchKey, err: &CatalogError) {
    tracing::error!(
        mode = ?key.mode,
        query = %key.query,
        page = key.page,
        error = %err,
        "Catalog fetch failed"
    );
}
