use std::path::PathBuf;

use clap::Parser;
use staffgen_generate::{EnrichEngine, EnrichOptions, GenerateError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "staffgen", version, about = "Enrich demo person records with employment data")]
struct Cli {
    /// Source file of `id;gender;firstName;lastName;birthDate` lines.
    #[arg(long, default_value = "source.txt")]
    input: PathBuf,
    /// Destination for the enriched records.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,
    /// Seed for the random stream; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional path for a JSON run report.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    let engine = EnrichEngine::new(EnrichOptions {
        input: cli.input,
        output: cli.output,
        seed: cli.seed,
    });
    let report = engine.run()?;

    if let Some(path) = cli.report {
        std::fs::write(&path, serde_json::to_vec_pretty(&report)?)?;
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
