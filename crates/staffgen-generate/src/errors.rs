use chrono::NaiveDate;
use thiserror::Error;

/// Errors emitted by the enrichment pipeline.
///
/// Malformed lines (wrong field count) are not represented here: the loader
/// skips them with a diagnostic. Everything else is fatal to the run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid birth date '{value}' on line {line}: {source}")]
    InvalidBirthDate {
        line: u64,
        value: String,
        source: chrono::ParseError,
    },
    #[error(
        "empty start-date window for birth date {birth}: earliest start {floor} is after the ceiling {ceiling}"
    )]
    EmptyStartWindow {
        birth: NaiveDate,
        floor: NaiveDate,
        ceiling: NaiveDate,
    },
    #[error("timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
}
