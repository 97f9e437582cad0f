//! Booktracker CLI - browse and search the book catalog from a terminal

mod commands;

use anyhow::{Context, Result};
use booktracker_core::{ClientConfig, HttpCatalogClient};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a 1-based page number (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid page number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "booktracker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog backend base URL (overrides BOOKTRACKER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// External search endpoint (overrides BOOKTRACKER_SEARCH_URL)
    #[arg(long, global = true)]
    search_url: Option<String>,

    /// External search API key (overrides BOOKTRACKER_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Bearer token for the catalog backend (overrides BOOKTRACKER_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the local catalog page by page
    Browse {
        /// Free-text filter
        #[arg(short, long, default_value = "")]
        query: String,

        /// Page number (starting at 1)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the external book source by keyword
    Search {
        /// Search keywords
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single external volume
    Show {
        /// Volume identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in to the catalog backend
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Register a new account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Interactive catalog session reading commands from stdin
    Shell,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("Invalid BOOKTRACKER_* environment")?;
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.search_url {
            config = config.with_search_url(url);
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(token) = &self.token {
            config = config.with_auth_token(token);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for catalog output
    let filter = if cli.verbose {
        "booktracker_cli=debug,booktracker_core=debug"
    } else {
        "booktracker_cli=info,booktracker_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.client_config()?;
    tracing::debug!(api_url = %config.api_url, search_url = %config.search_url, "Using configuration");
    let client = Arc::new(HttpCatalogClient::new(config).context("Failed to build HTTP client")?);

    match cli.command {
        Commands::Browse { query, page, json } => {
            commands::browse(client, &query, page, json).await
        }

        Commands::Search { query, json } => commands::search(client, &query, json).await,

        Commands::Show { id, json } => commands::show(client, &id, json).await,

        Commands::Login { username, password } => {
            commands::login(client, &username, &password).await
        }

        Commands::Register {
            username,
            email,
            password,
        } => commands::register(client, &username, &email, &password).await,

        Commands::Shell => commands::shell(client).await,
    }
}
