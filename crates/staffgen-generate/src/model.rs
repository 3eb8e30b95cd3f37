use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for an enrichment run.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Source file of raw person records.
    pub input: PathBuf,
    /// Destination for the enriched records.
    pub output: PathBuf,
    /// Seed for the random stream; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("source.txt"),
            output: PathBuf::from("output.txt"),
            seed: None,
        }
    }
}

/// Accounting for a completed run. The recorded seed reproduces the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: u64,
    pub lines_read: u64,
    pub records_skipped: u64,
    pub records_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
