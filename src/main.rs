//! Brandmark main entry point
//!
//! This is the command-line interface for the Brandmark logo extraction
//! service.

use brandmark::extract::{build_http_client, DEFAULT_TIMEOUT_SECS};
use brandmark::server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Brandmark: a brand logo extraction service
///
/// Brandmark serves `GET /logo?url=<target>`: it fetches the target page,
/// walks an ordered list of heuristic selectors to find a logo-like element,
/// resolves it to an image resource, and responds with the image bytes.
#[derive(Parser, Debug)]
#[command(name = "brandmark")]
#[command(version = "1.0.0")]
#[command(about = "A brand logo extraction service", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Single origin allowed by CORS (GET only)
    #[arg(long, default_value = "http://localhost:5173")]
    origin: String,

    /// Per-request timeout in seconds, applied to the page fetch and the
    /// image fetch independently
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!(
        "starting server on port {} (allowed origin: {}, timeout: {}s)",
        cli.port,
        cli.origin,
        cli.timeout
    );

    let client = build_http_client(cli.timeout)?;
    server::serve(cli.port, client, &cli.origin).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("brandmark=info,warn"),
            1 => EnvFilter::new("brandmark=debug,info"),
            2 => EnvFilter::new("brandmark=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
