//! Search command implementation

use super::{print_state, spinner};
use anyhow::{bail, Result};
use booktracker_core::{CatalogViewModel, FetchOutcome, HttpCatalogClient};
use std::sync::Arc;

/// Run an external keyword search and print the first page of results
pub async fn search(client: Arc<HttpCatalogClient>, query: &str, json: bool) -> Result<()> {
    let vm = CatalogViewModel::new(client);

    let pb = spinner(format!("Searching for \"{}\"...", query));
    let outcome = vm.submit_search(query).await;
    pb.finish_and_clear();

    print_state(&vm.state().await, json)?;

    if outcome == FetchOutcome::Failed {
        bail!("Search for \"{}\" failed", query);
    }
    Ok(())
}
