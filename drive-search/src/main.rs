//! Drive search CLI.
//!
//! Runs one search per invocation and prints the rendered text block to
//! stdout. Exits nonzero when the backend call failed.

use clap::Parser;
use tracing::error;

use drive_search::Dependencies;
use drive_search_tool::SearchRequest;

#[derive(Parser)]
#[command(name = "drive-search")]
#[command(about = "Search for files in Google Drive", long_about = None)]
struct Cli {
    /// Search query; may embed Drive query-language syntax
    query: String,

    /// Opaque cursor from a prior run; pair it with the same query
    #[arg(long)]
    page_token: Option<String>,

    /// Results per page (default 10, backend caps at 100)
    #[arg(long)]
    page_size: Option<i32>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let deps = match Dependencies::new() {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            std::process::exit(1);
        }
    };

    let request = SearchRequest {
        query: cli.query,
        page_token: cli.page_token,
        page_size: cli.page_size,
    };

    let response = deps.tool.call(request).await;

    println!("{}", response.text);

    if response.is_error {
        std::process::exit(1);
    }
}
