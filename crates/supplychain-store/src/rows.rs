//! Stored shape of suppliers and parts.
//!
//! Every column that the schema allows to be `NULL` is an `Option` here.
//! Converting a generated record fills every column it has; empty tag lists
//! and absent optionals become `NULL`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use supplychain_core::{Part, Supplier, encode_tags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SupplierRow {
    pub supplier_id: String,
    pub tenant_id: String,
    pub supplier_code: Option<String>,
    pub legal_name: String,
    pub dba_name: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub preferred_currency: Option<String>,
    pub incoterms: Option<String>,
    pub lead_time_days_avg: Option<i64>,
    pub lead_time_days_p95: Option<i64>,
    pub on_time_delivery_rate: Option<f64>,
    pub defect_rate_ppm: Option<i64>,
    pub capacity_units_per_week: Option<i64>,
    pub risk_score: Option<f64>,
    pub financial_risk_tier: Option<String>,
    pub certifications: Option<String>,
    pub compliance_flags: Option<String>,
    pub approved_status: Option<String>,
    pub contracts: Option<String>,
    pub terms_version: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub data_source: Option<String>,
    pub source_timestamp: Option<DateTime<Utc>>,
    pub ingestion_timestamp: Option<DateTime<Utc>>,
    pub schema_version: Option<String>,
}

impl SupplierRow {
    /// A row carrying only the required columns.
    pub fn new(
        supplier_id: impl Into<String>,
        tenant_id: impl Into<String>,
        legal_name: impl Into<String>,
    ) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            tenant_id: tenant_id.into(),
            supplier_code: None,
            legal_name: legal_name.into(),
            dba_name: None,
            country: None,
            region: None,
            address_line1: None,
            address_line2: None,
            city: None,
            state: None,
            postal_code: None,
            contact_email: None,
            contact_phone: None,
            preferred_currency: None,
            incoterms: None,
            lead_time_days_avg: None,
            lead_time_days_p95: None,
            on_time_delivery_rate: None,
            defect_rate_ppm: None,
            capacity_units_per_week: None,
            risk_score: None,
            financial_risk_tier: None,
            certifications: None,
            compliance_flags: None,
            approved_status: None,
            contracts: None,
            terms_version: None,
            lat: None,
            lon: None,
            data_source: None,
            source_timestamp: None,
            ingestion_timestamp: None,
            schema_version: None,
        }
    }
}

impl From<&Supplier> for SupplierRow {
    fn from(supplier: &Supplier) -> Self {
        Self {
            supplier_id: supplier.supplier_id.clone(),
            tenant_id: supplier.tenant_id.clone(),
            supplier_code: non_empty(&supplier.supplier_code),
            legal_name: supplier.legal_name.clone(),
            dba_name: non_empty(&supplier.dba_name),
            country: non_empty(&supplier.country),
            region: non_empty(&supplier.region),
            address_line1: non_empty(&supplier.address_line1),
            address_line2: supplier.address_line2.clone(),
            city: non_empty(&supplier.city),
            state: non_empty(&supplier.state),
            postal_code: non_empty(&supplier.postal_code),
            contact_email: non_empty(&supplier.contact_email),
            contact_phone: non_empty(&supplier.contact_phone),
            preferred_currency: non_empty(&supplier.preferred_currency),
            incoterms: non_empty(&supplier.incoterms),
            lead_time_days_avg: Some(i64::from(supplier.lead_time_days_avg)),
            lead_time_days_p95: Some(i64::from(supplier.lead_time_days_p95)),
            on_time_delivery_rate: Some(supplier.on_time_delivery_rate),
            defect_rate_ppm: Some(i64::from(supplier.defect_rate_ppm)),
            capacity_units_per_week: Some(i64::from(supplier.capacity_units_per_week)),
            risk_score: Some(supplier.risk_score),
            financial_risk_tier: Some(supplier.financial_risk_tier.to_string()),
            certifications: tags(&supplier.certifications),
            compliance_flags: tags(&supplier.compliance_flags),
            approved_status: Some(supplier.approved_status.to_string()),
            contracts: tags(&supplier.contracts),
            terms_version: non_empty(&supplier.terms_version),
            lat: supplier.geo_coords.map(|geo| geo.lat),
            lon: supplier.geo_coords.map(|geo| geo.lon),
            data_source: non_empty(&supplier.data_source),
            source_timestamp: Some(supplier.source_timestamp),
            ingestion_timestamp: Some(supplier.ingestion_timestamp),
            schema_version: non_empty(&supplier.schema_version),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PartRow {
    pub part_id: String,
    pub tenant_id: String,
    pub part_number: String,
    pub description: String,
    pub category: Option<String>,
    pub lifecycle_status: Option<String>,
    pub uom: Option<String>,
    pub spec_hash: Option<String>,
    pub bom_compatibility: Option<String>,
    pub default_supplier_id: Option<String>,
    pub qualified_supplier_ids: Option<String>,
    pub unit_cost: Option<f64>,
    pub moq: Option<i64>,
    pub lead_time_days_avg: Option<i64>,
    pub lead_time_days_p95: Option<i64>,
    pub quality_grade: Option<String>,
    pub compliance_flags: Option<String>,
    pub hazard_class: Option<String>,
    pub last_price_change: Option<DateTime<Utc>>,
    pub data_source: Option<String>,
    pub source_timestamp: Option<DateTime<Utc>>,
    pub ingestion_timestamp: Option<DateTime<Utc>>,
    pub schema_version: Option<String>,
}

impl PartRow {
    /// A row carrying only the required columns.
    pub fn new(
        part_id: impl Into<String>,
        tenant_id: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            part_id: part_id.into(),
            tenant_id: tenant_id.into(),
            part_number: part_number.into(),
            description: description.into(),
            category: None,
            lifecycle_status: None,
            uom: None,
            spec_hash: None,
            bom_compatibility: None,
            default_supplier_id: None,
            qualified_supplier_ids: None,
            unit_cost: None,
            moq: None,
            lead_time_days_avg: None,
            lead_time_days_p95: None,
            quality_grade: None,
            compliance_flags: None,
            hazard_class: None,
            last_price_change: None,
            data_source: None,
            source_timestamp: None,
            ingestion_timestamp: None,
            schema_version: None,
        }
    }
}

impl From<&Part> for PartRow {
    fn from(part: &Part) -> Self {
        Self {
            part_id: part.part_id.clone(),
            tenant_id: part.tenant_id.clone(),
            part_number: part.part_number.clone(),
            description: part.description.clone(),
            category: Some(part.category.to_string()),
            lifecycle_status: Some(part.lifecycle_status.to_string()),
            uom: non_empty(&part.uom),
            spec_hash: non_empty(&part.spec_hash),
            bom_compatibility: tags(&part.bom_compatibility),
            default_supplier_id: part.default_supplier_id.clone(),
            qualified_supplier_ids: tags(&part.qualified_supplier_ids),
            unit_cost: Some(part.unit_cost),
            moq: Some(i64::from(part.moq)),
            lead_time_days_avg: Some(i64::from(part.lead_time_days_avg)),
            lead_time_days_p95: Some(i64::from(part.lead_time_days_p95)),
            quality_grade: Some(part.quality_grade.to_string()),
            compliance_flags: tags(&part.compliance_flags),
            hazard_class: part.hazard_class.map(|class| class.to_string()),
            last_price_change: Some(part.last_price_change),
            data_source: non_empty(&part.data_source),
            source_timestamp: Some(part.source_timestamp),
            ingestion_timestamp: Some(part.ingestion_timestamp),
            schema_version: non_empty(&part.schema_version),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn tags(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(encode_tags(values))
    }
}

#[cfg(test)]
mod tests {
    use supplychain_generate::{GenerateOptions, RecordGenerator};

    use super::*;

    #[test]
    fn part_without_pool_stores_nulls_for_sourcing() {
        let part = RecordGenerator::new(&GenerateOptions::seeded(1)).build_part("t", &[]);
        let row = PartRow::from(&part);
        assert_eq!(row.default_supplier_id, None);
        assert_eq!(row.qualified_supplier_ids, None);
        assert_eq!(row.category.as_deref(), Some(part.category.as_str()));
    }

    #[test]
    fn supplier_tags_use_the_shared_encoding() {
        let mut supplier = RecordGenerator::new(&GenerateOptions::seeded(2)).build_supplier("t");
        supplier.certifications = vec!["ISO9001".to_string(), "AS9100".to_string()];
        supplier.geo_coords = None;
        let row = SupplierRow::from(&supplier);
        assert_eq!(row.certifications.as_deref(), Some("ISO9001;AS9100"));
        assert_eq!(row.lat, None);
        assert_eq!(row.lon, None);
    }
}
