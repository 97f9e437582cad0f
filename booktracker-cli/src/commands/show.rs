//! Show command implementation

use super::spinner;
use anyhow::{Context, Result};
use booktracker_core::display::render_card;
use booktracker_core::normalize::from_volume;
use booktracker_core::{CatalogSource, HttpCatalogClient};
use std::sync::Arc;

/// Display a single volume with its full description
pub async fn show(client: Arc<HttpCatalogClient>, id: &str, json: bool) -> Result<()> {
    let pb = spinner(format!("Fetching {}...", id));
    let result = client.get_volume(id).await;
    pb.finish_and_clear();

    let volume = result.with_context(|| format!("Failed to fetch volume {}", id))?;
    let book = from_volume(volume, 1);

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print!("{}", render_card(&book));
        if let Some(description) = &book.description {
            println!("\n{}", description);
        }
    }

    Ok(())
}
