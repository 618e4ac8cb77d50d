//! Synthetic supplier and part generation for the supply-chain dataset.
//!
//! A [`RecordGenerator`] owns an explicit random source and builds records
//! one at a time or in batches; the `output` module serializes batches to
//! CSV with fixed column sets.

pub mod batch;
pub mod builder;
pub mod errors;
pub mod ids;
pub mod model;
pub mod output;
pub mod synth;

pub use builder::RecordGenerator;
pub use errors::GenerationError;
pub use ids::IdSource;
pub use model::{EntityReport, ExportSummary, GenerateOptions, GenerationReport};
pub use output::csv::{TabularRecord, write_records_csv, write_records_to};
