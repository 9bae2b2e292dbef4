use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use medlog_analytics::{export_medication_rows, render_summary, render_usage_chart, FrequencyTable};
use medlog_core::config::{credentials_path, AppConfig, CREDENTIALS_ENV};
use medlog_store::{FirestoreClient, ServiceAccountKey};

#[derive(Parser)]
#[command(
    name = "medlog",
    about = "Export medication logs from a hosted document store and report usage frequency",
    version
)]
struct Cli {
    /// Path to the service-account key file (overrides FIREBASE_CREDENTIALS)
    #[arg(short = 'k', long)]
    credentials: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chart output path (default: medication_usage.png)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Show only the top N medications in the summary
    #[arg(short, long)]
    limit: Option<usize>,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "medlog=info,warn".into()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config and apply CLI overrides.
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::default(),
    };
    if let Some(out) = cli.out {
        config.report.chart_path = out;
    }
    if let Some(limit) = cli.limit {
        config.report.limit = Some(limit);
    }

    // Fatal startup preconditions are checked explicitly; nothing retries.
    // An unset credential path exits before any store call is attempted.
    let key_path = match credentials_path(cli.credentials, std::env::var_os(CREDENTIALS_ENV)) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    let key = match ServiceAccountKey::load(&key_path) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("Error loading credentials: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(project = %key.project_id, "connecting to document store");
    let store = match FirestoreClient::connect(key).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error initializing store client: {err}");
            std::process::exit(1);
        }
    };

    // Mid-enumeration failures propagate and terminate the run.
    let rows = export_medication_rows(&store, &config.store)
        .await
        .context("exporting medication logs")?;
    let table = FrequencyTable::from_rows(&rows);

    println!("{}", render_summary(&table, config.report.limit));

    if table.is_empty() || cli.no_chart {
        return Ok(());
    }
    render_usage_chart(&table, &config.report.chart_path).context("rendering usage chart")?;
    tracing::info!(path = %config.report.chart_path.display(), "chart written");

    Ok(())
}
