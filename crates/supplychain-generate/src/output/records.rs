use supplychain_core::{Part, Supplier, encode_tags};

use crate::output::cells::{coordinate, decimal, optional, timestamp};
use crate::output::csv::TabularRecord;

pub const SUPPLIER_COLUMNS: &[&str] = &[
    "supplier_id",
    "tenant_id",
    "supplier_code",
    "legal_name",
    "dba_name",
    "country",
    "region",
    "address_line1",
    "address_line2",
    "city",
    "state",
    "postal_code",
    "contact_email",
    "contact_phone",
    "preferred_currency",
    "incoterms",
    "lead_time_days_avg",
    "lead_time_days_p95",
    "on_time_delivery_rate",
    "defect_rate_ppm",
    "capacity_units_per_week",
    "risk_score",
    "financial_risk_tier",
    "certifications",
    "compliance_flags",
    "approved_status",
    "contracts",
    "terms_version",
    "lat",
    "lon",
    "data_source",
    "source_timestamp",
    "ingestion_timestamp",
    "schema_version",
];

pub const PART_COLUMNS: &[&str] = &[
    "part_id",
    "tenant_id",
    "part_number",
    "description",
    "category",
    "lifecycle_status",
    "uom",
    "spec_hash",
    "bom_compatibility",
    "default_supplier_id",
    "qualified_supplier_ids",
    "unit_cost",
    "moq",
    "lead_time_days_avg",
    "lead_time_days_p95",
    "quality_grade",
    "compliance_flags",
    "hazard_class",
    "last_price_change",
    "data_source",
    "source_timestamp",
    "ingestion_timestamp",
    "schema_version",
];

impl TabularRecord for Supplier {
    const HEADER: &'static [&'static str] = SUPPLIER_COLUMNS;

    fn to_row(&self) -> Vec<String> {
        vec![
            self.supplier_id.clone(),
            self.tenant_id.clone(),
            self.supplier_code.clone(),
            self.legal_name.clone(),
            self.dba_name.clone(),
            self.country.clone(),
            self.region.clone(),
            self.address_line1.clone(),
            optional(self.address_line2.as_deref(), str::to_string),
            self.city.clone(),
            self.state.clone(),
            self.postal_code.clone(),
            self.contact_email.clone(),
            self.contact_phone.clone(),
            self.preferred_currency.clone(),
            self.incoterms.clone(),
            self.lead_time_days_avg.to_string(),
            self.lead_time_days_p95.to_string(),
            decimal(self.on_time_delivery_rate),
            self.defect_rate_ppm.to_string(),
            self.capacity_units_per_week.to_string(),
            decimal(self.risk_score),
            self.financial_risk_tier.to_string(),
            encode_tags(&self.certifications),
            encode_tags(&self.compliance_flags),
            self.approved_status.to_string(),
            encode_tags(&self.contracts),
            self.terms_version.clone(),
            optional(self.geo_coords, |geo| coordinate(geo.lat)),
            optional(self.geo_coords, |geo| coordinate(geo.lon)),
            self.data_source.clone(),
            timestamp(&self.source_timestamp),
            timestamp(&self.ingestion_timestamp),
            self.schema_version.clone(),
        ]
    }
}

impl TabularRecord for Part {
    const HEADER: &'static [&'static str] = PART_COLUMNS;

    fn to_row(&self) -> Vec<String> {
        vec![
            self.part_id.clone(),
            self.tenant_id.clone(),
            self.part_number.clone(),
            self.description.clone(),
            self.category.to_string(),
            self.lifecycle_status.to_string(),
            self.uom.clone(),
            self.spec_hash.clone(),
            encode_tags(&self.bom_compatibility),
            optional(self.default_supplier_id.as_deref(), str::to_string),
            encode_tags(&self.qualified_supplier_ids),
            decimal(self.unit_cost),
            self.moq.to_string(),
            self.lead_time_days_avg.to_string(),
            self.lead_time_days_p95.to_string(),
            self.quality_grade.to_string(),
            encode_tags(&self.compliance_flags),
            optional(self.hazard_class, |class| class.to_string()),
            timestamp(&self.last_price_change),
            self.data_source.clone(),
            timestamp(&self.source_timestamp),
            timestamp(&self.ingestion_timestamp),
            self.schema_version.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{GenerateOptions, RecordGenerator};

    #[test]
    fn rows_match_header_width() {
        let mut generator = RecordGenerator::new(&GenerateOptions::seeded(8));
        let supplier = generator.build_supplier("tenant_acme");
        assert_eq!(supplier.to_row().len(), Supplier::HEADER.len());
        let part = generator.build_part("tenant_acme", &[supplier.supplier_id.clone()]);
        assert_eq!(part.to_row().len(), Part::HEADER.len());
    }

    #[test]
    fn missing_coordinates_render_as_two_empty_cells() {
        let options = GenerateOptions::seeded(8)
            .with_reference_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut supplier = RecordGenerator::new(&options).build_supplier("tenant_acme");
        supplier.geo_coords = None;

        let row = supplier.to_row();
        let lat = SUPPLIER_COLUMNS.iter().position(|c| *c == "lat").unwrap();
        assert_eq!(row[lat], "");
        assert_eq!(row[lat + 1], "");
    }

    #[test]
    fn part_without_suppliers_or_hazard_renders_empty_cells() {
        let mut part = RecordGenerator::new(&GenerateOptions::seeded(9)).build_part("t", &[]);
        part.hazard_class = None;
        let row = part.to_row();
        let column = |name: &str| PART_COLUMNS.iter().position(|c| *c == name).unwrap();
        assert_eq!(row[column("default_supplier_id")], "");
        assert_eq!(row[column("qualified_supplier_ids")], "");
        assert_eq!(row[column("hazard_class")], "");
    }
}
