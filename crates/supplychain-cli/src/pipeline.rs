//! The `generate` run: suppliers first, then parts sourced from them.

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use supplychain_generate::{
    GenerateOptions, GenerationReport, RecordGenerator, write_records_csv,
};
use supplychain_store::{PartRow, SupplierRow, SupplyStore};

use crate::CliError;

pub const SUPPLIERS_FILE: &str = "suppliers.csv";
pub const PARTS_FILE: &str = "parts.csv";
pub const REPORT_FILE: &str = "generation_report.json";

#[derive(Debug, Clone)]
pub struct GenerationRun {
    pub tenant_id: String,
    pub suppliers: usize,
    pub parts: usize,
    pub out_dir: PathBuf,
    pub options: GenerateOptions,
}

/// Generate, export and (when `store` is given) insert both entities, then
/// write the run report. The first failure ends the run.
pub async fn run_generation(
    run: &GenerationRun,
    store: Option<&SupplyStore>,
) -> Result<GenerationReport, CliError> {
    let timer = Instant::now();
    let mut report = GenerationReport::new(
        Uuid::new_v4().to_string(),
        run.tenant_id.clone(),
        run.options.seed,
    );
    info!(
        event = "run_started",
        run_id = %report.run_id,
        tenant_id = %run.tenant_id,
        suppliers = run.suppliers,
        parts = run.parts,
        insert = store.is_some(),
    );

    create_dir_all(&run.out_dir)?;
    let mut generator = RecordGenerator::new(&run.options);

    let suppliers = generator.generate_suppliers(run.suppliers, &run.tenant_id);
    report.suppliers.rows_generated = suppliers.len() as u64;
    let export = write_records_csv(&run.out_dir.join(SUPPLIERS_FILE), &suppliers)?;
    report.suppliers.record_export(&export);

    if let Some(store) = store {
        let rows: Vec<SupplierRow> = suppliers.iter().map(SupplierRow::from).collect();
        report.suppliers.rows_inserted = store.insert_suppliers(&rows).await?;
    }

    let supplier_ids: Vec<String> = suppliers
        .iter()
        .map(|supplier| supplier.supplier_id.clone())
        .collect();
    let parts = generator.generate_parts(run.parts, &run.tenant_id, &supplier_ids);
    report.parts.rows_generated = parts.len() as u64;
    let export = write_records_csv(&run.out_dir.join(PARTS_FILE), &parts)?;
    report.parts.record_export(&export);

    if let Some(store) = store {
        let rows: Vec<PartRow> = parts.iter().map(PartRow::from).collect();
        report.parts.rows_inserted = store.insert_parts(&rows).await?;
    }

    report.duration_ms = timer.elapsed().as_millis() as u64;
    let report_path = run.out_dir.join(REPORT_FILE);
    report.write_json(&report_path)?;

    info!(
        event = "run_finished",
        status = "success",
        run_id = %report.run_id,
        report = %report_path.display(),
        duration_ms = report.duration_ms,
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_out_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("supplychain_{label}_{}", Uuid::new_v4()))
    }

    fn run(label: &str) -> GenerationRun {
        GenerationRun {
            tenant_id: "tenant_test".to_string(),
            suppliers: 5,
            parts: 10,
            out_dir: temp_out_dir(label),
            options: GenerateOptions::seeded(11),
        }
    }

    #[tokio::test]
    async fn run_exports_inserts_and_reports() {
        let run = run("pipeline");
        let store = SupplyStore::in_memory().await.expect("store");

        let report = run_generation(&run, Some(&store)).await.expect("run");

        assert_eq!(report.suppliers.rows_generated, 5);
        assert_eq!(report.suppliers.rows_inserted, 5);
        assert_eq!(report.parts.rows_inserted, 10);
        assert_eq!(store.count_suppliers().await.expect("count"), 5);
        assert_eq!(store.count_parts().await.expect("count"), 10);

        let parts_csv = std::fs::read_to_string(run.out_dir.join(PARTS_FILE)).expect("csv");
        assert_eq!(parts_csv.lines().count(), 11);
        assert_eq!(report.parts.bytes_written, parts_csv.len() as u64);

        let written: GenerationReport = serde_json::from_slice(
            &std::fs::read(run.out_dir.join(REPORT_FILE)).expect("report"),
        )
        .expect("parse report");
        assert_eq!(written.run_id, report.run_id);
        assert_eq!(written.seed, Some(11));

        std::fs::remove_dir_all(&run.out_dir).ok();
    }

    #[tokio::test]
    async fn run_without_store_only_exports() {
        let run = run("no_insert");
        let report = run_generation(&run, None).await.expect("run");

        assert_eq!(report.suppliers.rows_inserted, 0);
        assert_eq!(report.parts.rows_inserted, 0);
        assert!(run.out_dir.join(SUPPLIERS_FILE).exists());

        std::fs::remove_dir_all(&run.out_dir).ok();
    }

    #[tokio::test]
    async fn store_failure_aborts_before_parts() {
        let run = run("store_failure");
        let store = SupplyStore::connect("sqlite::memory:").await.expect("store");

        // No schema applied, so the supplier batch fails.
        let err = run_generation(&run, Some(&store)).await.unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
        assert!(!run.out_dir.join(PARTS_FILE).exists());

        std::fs::remove_dir_all(&run.out_dir).ok();
    }
}
