//! Employment-record enrichment pipeline for demo datasets.
//!
//! Reads `;`-delimited person records, fills in synthetic employment
//! attributes (start date, office location, job title, department, salary)
//! drawn from fixed reference tables, and writes the enriched rows back out
//! in input order.

pub mod engine;
pub mod enrich;
pub mod errors;
pub mod loader;
pub mod model;
pub mod record;
pub mod reference;
pub mod writer;

pub use engine::EnrichEngine;
pub use errors::GenerateError;
pub use model::{EnrichOptions, RunReport};
pub use record::{EnrichedRecord, PersonRecord};
