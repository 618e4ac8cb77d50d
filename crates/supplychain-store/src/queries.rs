//! Parameterized statements, generic over the executor so the same insert
//! runs against a pool or inside a transaction.

use sqlx::{Executor, Sqlite};

use crate::rows::{PartRow, SupplierRow};

const INSERT_SUPPLIER_SQL: &str = r#"
INSERT INTO dim_supplier_v1 (
    supplier_id, tenant_id, supplier_code, legal_name, dba_name, country, region,
    address_line1, address_line2, city, state, postal_code,
    contact_email, contact_phone, preferred_currency, incoterms,
    lead_time_days_avg, lead_time_days_p95, on_time_delivery_rate,
    defect_rate_ppm, capacity_units_per_week, risk_score, financial_risk_tier,
    certifications, compliance_flags, approved_status, contracts, terms_version,
    lat, lon, data_source, source_timestamp, ingestion_timestamp, schema_version
) VALUES (
    ?, ?, ?, ?, ?, ?, ?,
    ?, ?, ?, ?, ?,
    ?, ?, ?, ?,
    ?, ?, ?,
    ?, ?, ?, ?,
    ?, ?, ?, ?, ?,
    ?, ?, ?, ?, ?, ?
)
RETURNING *
"#;

const INSERT_PART_SQL: &str = r#"
INSERT INTO dim_part_v1 (
    part_id, tenant_id, part_number, description, category, lifecycle_status,
    uom, spec_hash, bom_compatibility, default_supplier_id, qualified_supplier_ids,
    unit_cost, moq, lead_time_days_avg, lead_time_days_p95,
    quality_grade, compliance_flags, hazard_class, last_price_change,
    data_source, source_timestamp, ingestion_timestamp, schema_version
) VALUES (
    ?, ?, ?, ?, ?, ?,
    ?, ?, ?, ?, ?,
    ?, ?, ?, ?,
    ?, ?, ?, ?,
    ?, ?, ?, ?
)
RETURNING *
"#;

/// Insert one supplier and return the stored row.
pub async fn insert_supplier<'e, E>(
    executor: E,
    row: &SupplierRow,
) -> Result<SupplierRow, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, SupplierRow>(INSERT_SUPPLIER_SQL)
        .bind(row.supplier_id.clone())
        .bind(row.tenant_id.clone())
        .bind(row.supplier_code.clone())
        .bind(row.legal_name.clone())
        .bind(row.dba_name.clone())
        .bind(row.country.clone())
        .bind(row.region.clone())
        .bind(row.address_line1.clone())
        .bind(row.address_line2.clone())
        .bind(row.city.clone())
        .bind(row.state.clone())
        .bind(row.postal_code.clone())
        .bind(row.contact_email.clone())
        .bind(row.contact_phone.clone())
        .bind(row.preferred_currency.clone())
        .bind(row.incoterms.clone())
        .bind(row.lead_time_days_avg)
        .bind(row.lead_time_days_p95)
        .bind(row.on_time_delivery_rate)
        .bind(row.defect_rate_ppm)
        .bind(row.capacity_units_per_week)
        .bind(row.risk_score)
        .bind(row.financial_risk_tier.clone())
        .bind(row.certifications.clone())
        .bind(row.compliance_flags.clone())
        .bind(row.approved_status.clone())
        .bind(row.contracts.clone())
        .bind(row.terms_version.clone())
        .bind(row.lat)
        .bind(row.lon)
        .bind(row.data_source.clone())
        .bind(row.source_timestamp)
        .bind(row.ingestion_timestamp)
        .bind(row.schema_version.clone())
        .fetch_one(executor)
        .await
}

/// Insert one part and return the stored row.
pub async fn insert_part<'e, E>(executor: E, row: &PartRow) -> Result<PartRow, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, PartRow>(INSERT_PART_SQL)
        .bind(row.part_id.clone())
        .bind(row.tenant_id.clone())
        .bind(row.part_number.clone())
        .bind(row.description.clone())
        .bind(row.category.clone())
        .bind(row.lifecycle_status.clone())
        .bind(row.uom.clone())
        .bind(row.spec_hash.clone())
        .bind(row.bom_compatibility.clone())
        .bind(row.default_supplier_id.clone())
        .bind(row.qualified_supplier_ids.clone())
        .bind(row.unit_cost)
        .bind(row.moq)
        .bind(row.lead_time_days_avg)
        .bind(row.lead_time_days_p95)
        .bind(row.quality_grade.clone())
        .bind(row.compliance_flags.clone())
        .bind(row.hazard_class.clone())
        .bind(row.last_price_change)
        .bind(row.data_source.clone())
        .bind(row.source_timestamp)
        .bind(row.ingestion_timestamp)
        .bind(row.schema_version.clone())
        .fetch_one(executor)
        .await
}

pub async fn delete_supplier<'e, E>(executor: E, supplier_id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM dim_supplier_v1 WHERE supplier_id = ?")
        .bind(supplier_id.to_string())
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_part<'e, E>(executor: E, part_id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM dim_part_v1 WHERE part_id = ?")
        .bind(part_id.to_string())
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
