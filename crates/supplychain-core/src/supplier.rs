use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{ApprovalStatus, RiskTier};

/// Geographic position of a supplier site, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoCoords {
    pub lat: f64,
    pub lon: f64,
}

/// A legal entity that can fulfill part orders for a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Supplier {
    // Identity
    /// Time-ordered ULID, assigned once at creation.
    pub supplier_id: String,
    pub tenant_id: String,
    pub supplier_code: String,

    // Names & location
    pub legal_name: String,
    /// Trade ("doing business as") name.
    pub dba_name: String,
    pub country: String,
    pub region: String,

    // Address
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,

    // Contacts
    pub contact_email: String,
    pub contact_phone: String,

    // Commercial
    pub preferred_currency: String,
    pub incoterms: String,

    // Performance & risk
    pub lead_time_days_avg: u32,
    pub lead_time_days_p95: u32,
    /// Percentage in `0..=100`.
    pub on_time_delivery_rate: f64,
    pub defect_rate_ppm: u32,
    pub capacity_units_per_week: u32,
    /// Derived from `on_time_delivery_rate`, see the generator.
    pub risk_score: f64,
    pub financial_risk_tier: RiskTier,

    // Certifications & compliance
    pub certifications: Vec<String>,
    pub compliance_flags: Vec<String>,

    // Status & contracts
    pub approved_status: ApprovalStatus,
    pub contracts: Vec<String>,
    pub terms_version: String,

    pub geo_coords: Option<GeoCoords>,

    // Lineage
    pub data_source: String,
    pub source_timestamp: DateTime<Utc>,
    pub ingestion_timestamp: DateTime<Utc>,
    pub schema_version: String,
}
