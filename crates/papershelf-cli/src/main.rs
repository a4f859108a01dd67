//! Papershelf CLI - classify and file a directory of PDF papers.

use clap::Parser;
use papershelf_catalog::JsonCatalog;
use papershelf_cli::{Cli, CliError, Config, Formatter};
use papershelf_ingest::IngestionPipeline;
use papershelf_llm::GeminiClassifier;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("papershelf=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> papershelf_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });
    config.apply_overrides(&cli);

    let formatter = Formatter::new(config.color);

    let api_key = cli.api_key.clone().ok_or(CliError::MissingApiKey)?;
    let classifier = GeminiClassifier::new(api_key, &config.model);

    let ingest_config = config.to_ingest_config()?;
    // A corrupt catalog stops the run before anything is moved
    let catalog = JsonCatalog::load(&ingest_config.catalog_path)?;

    let mut pipeline = IngestionPipeline::new(classifier, catalog, ingest_config);
    let report = pipeline.run().await?;

    for outcome in &report.outcomes {
        println!("{}", formatter.status_line(&outcome.filename, &outcome.status));
    }
    if !report.outcomes.is_empty() {
        println!("{}", formatter.report_table(&report));
    }
    println!("{}", formatter.summary(&report));

    Ok(())
}
