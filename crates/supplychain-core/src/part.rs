use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{HazardClass, LifecycleStatus, PartCategory, QualityGrade};

/// A stock-keeping unit a tenant can source from one or more suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Part {
    pub part_id: String,
    pub tenant_id: String,
    pub part_number: String,

    pub description: String,
    pub category: PartCategory,
    pub lifecycle_status: LifecycleStatus,
    /// Unit of measure (`EA`, `KG`, `M`).
    pub uom: String,
    pub spec_hash: String,
    pub bom_compatibility: Vec<String>,

    /// Absent when the part was built without a supplier pool.
    pub default_supplier_id: Option<String>,
    /// Starts with `default_supplier_id` whenever that is present.
    pub qualified_supplier_ids: Vec<String>,

    pub unit_cost: f64,
    /// Minimum order quantity.
    pub moq: u32,
    pub lead_time_days_avg: u32,
    pub lead_time_days_p95: u32,

    pub quality_grade: QualityGrade,
    pub compliance_flags: Vec<String>,
    /// `None` means non-hazardous.
    pub hazard_class: Option<HazardClass>,

    pub last_price_change: DateTime<Utc>,
    pub data_source: String,
    pub source_timestamp: DateTime<Utc>,
    pub ingestion_timestamp: DateTime<Utc>,
    pub schema_version: String,
}
