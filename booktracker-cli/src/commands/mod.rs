//! CLI command implementations

mod account;
mod browse;
mod search;
mod shell;
mod show;

pub use account::{login, register};
pub use browse::browse;
pub use search::search;
pub use shell::shell;
pub use show::show;

use anyhow::Result;
use booktracker_core::display::render_page;
use booktracker_core::SearchState;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Animated spinner shown while a fetch is in flight
pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.into());
    pb
}

/// Print the catalog view, as JSON or as text cards
pub(crate) fn print_state(state: &SearchState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        print!("{}", render_page(state));
    }
    Ok(())
}
