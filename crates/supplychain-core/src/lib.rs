//! Core contracts for the supply-chain data generator.
//!
//! This crate defines the canonical `Supplier` and `Part` records, their
//! enumerated fields, and the tag encoding shared by the CSV exporter and
//! the persistence adapter.

pub mod error;
pub mod part;
pub mod schema;
pub mod supplier;
pub mod tags;
pub mod types;

pub use error::{Error, Result};
pub use part::Part;
pub use schema::{part_json_schema, supplier_json_schema};
pub use supplier::{GeoCoords, Supplier};
pub use tags::{TAG_SEPARATOR, decode_tags, encode_tags};
pub use types::{
    ApprovalStatus, HazardClass, LifecycleStatus, PartCategory, QualityGrade, RiskTier,
};

/// Version stamped on every generated record.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Lineage tag for records produced by the generator.
pub const SYNTHETIC_DATA_SOURCE: &str = "synthetic.v1";
