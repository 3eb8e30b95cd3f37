use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::enrich::enrich;
use crate::errors::GenerateError;
use crate::loader::load_records;
use crate::model::{EnrichOptions, RunReport};
use crate::writer::write_records;

/// Entry point for one enrichment run: load, enrich in input order, write.
#[derive(Debug, Clone)]
pub struct EnrichEngine {
    options: EnrichOptions,
}

impl EnrichEngine {
    pub fn new(options: EnrichOptions) -> Self {
        Self { options }
    }

    /// Run the single sequential pass. The run either completes or stops
    /// at the first fatal error; only malformed lines are recovered from,
    /// inside the loader.
    pub fn run(&self) -> Result<RunReport, GenerateError> {
        let start = Instant::now();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            input = %self.options.input.display(),
            output = %self.options.output.display(),
            seed,
            "enrichment run started"
        );

        let outcome = load_records(&self.options.input)?;

        let mut enriched = Vec::with_capacity(outcome.records.len());
        for record in outcome.records {
            enriched.push(enrich(record, &mut rng)?);
        }

        let bytes_written = write_records(&self.options.output, &enriched)?;

        let report = RunReport {
            seed,
            lines_read: outcome.lines_read,
            records_skipped: outcome.skipped,
            records_written: enriched.len() as u64,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            records_written = report.records_written,
            records_skipped = report.records_skipped,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "enrichment run completed"
        );

        Ok(report)
    }
}
