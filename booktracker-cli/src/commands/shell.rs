//! Interactive catalog session
//!
//! Reads one command per line from stdin and drives a single
//! [`CatalogViewModel`] for the whole session, so paging and searching
//! behave like the buttons and forms of a catalog page.

use super::{print_state, spinner};
use anyhow::Result;
use booktracker_core::{CatalogViewModel, FetchOutcome, HttpCatalogClient};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  load              reload the catalog for the current query and page
  next | n          next page
  prev | p          previous page
  page <N>          jump to page N (starting at 1)
  query <TEXT>      set the filter used by the next load
  search <TEXT>     search the external source
  help              show this help
  quit              leave the session";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Load,
    Next,
    Prev,
    Page(i64),
    Query(String),
    Search(String),
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "load" => ShellCommand::Load,
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Prev,
        "page" => {
            let n: i64 = rest
                .parse()
                .map_err(|_| format!("'{}' is not a valid page number", rest))?;
            // Pages are shown starting at 1; the view-model clamps below 0.
            ShellCommand::Page(n.saturating_sub(1))
        }
        "query" => ShellCommand::Query(rest.to_string()),
        "search" => ShellCommand::Search(rest.to_string()),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(command))
}

/// Run the interactive session until `quit` or end of input
pub async fn shell(client: Arc<HttpCatalogClient>) -> Result<()> {
    let vm = CatalogViewModel::new(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    let pb = spinner("Loading catalog...");
    vm.load_page().await;
    pb.finish_and_clear();
    print_state(&vm.state().await, false)?;

    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Query(text) => {
                vm.set_query(text).await;
                println!("Query set. Use 'load' to apply it.");
                continue;
            }
            ShellCommand::Load => vm.load_page().await,
            ShellCommand::Next => vm.go_next().await,
            ShellCommand::Prev => vm.go_prev().await,
            ShellCommand::Page(n) => vm.set_page(n).await,
            ShellCommand::Search(text) => vm.submit_search(text).await,
        };

        match outcome {
            FetchOutcome::Skipped => println!("Already on the first page."),
            _ => print_state(&vm.state().await, false)?,
        }
    }

    Ok(())
}
