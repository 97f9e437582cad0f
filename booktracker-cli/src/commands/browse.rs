//! Browse command implementation

use super::{print_state, spinner};
use anyhow::{bail, Result};
use booktracker_core::{CatalogViewModel, FetchOutcome, HttpCatalogClient};
use std::sync::Arc;

/// Load one page of the local catalog
pub async fn browse(
    client: Arc<HttpCatalogClient>,
    query: &str,
    page: usize,
    json: bool,
) -> Result<()> {
    let vm = CatalogViewModel::new(client);
    vm.set_query(query).await;

    let pb = spinner(format!("Loading catalog page {}...", page));
    let index = i64::try_from(page.saturating_sub(1)).unwrap_or(i64::MAX);
    let outcome = vm.set_page(index).await;
    pb.finish_and_clear();

    let state = vm.state().await;
    print_state(&state, json)?;

    if outcome == FetchOutcome::Failed {
        bail!("Could not load catalog page {}", page);
    }
    Ok(())
}
