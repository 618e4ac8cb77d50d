use anyhow::Result;
use async_trait::async_trait;

use supplychain_generate::{GenerateOptions, RecordGenerator};
use supplychain_store::{
    PartRow, PostgresWarehouse, StoreError, StoreResult, SupplierRow, SupplyStore,
    WarehouseSource, pull_suppliers,
};

const TENANT: &str = "tenant_test";

fn supplier_rows(generator: &mut RecordGenerator, count: usize) -> Vec<SupplierRow> {
    generator
        .generate_suppliers(count, TENANT)
        .iter()
        .map(SupplierRow::from)
        .collect()
}

#[tokio::test]
async fn generated_batches_land_with_expected_counts() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(42));

    let suppliers = supplier_rows(&mut generator, 5);
    assert_eq!(store.insert_suppliers(&suppliers).await?, 5);

    let supplier_ids: Vec<String> = suppliers.iter().map(|row| row.supplier_id.clone()).collect();
    let parts: Vec<PartRow> = generator
        .generate_parts(10, TENANT, &supplier_ids)
        .iter()
        .map(PartRow::from)
        .collect();
    assert_eq!(store.insert_parts(&parts).await?, 10);

    assert_eq!(store.count_suppliers().await?, 5);
    assert_eq!(store.count_parts().await?, 10);
    Ok(())
}

#[tokio::test]
async fn stored_supplier_matches_inserted_row() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(7));
    let row = supplier_rows(&mut generator, 1).remove(0);

    let stored = store.insert_supplier(&row).await?;
    assert_eq!(stored, row);
    Ok(())
}

#[tokio::test]
async fn minimal_part_round_trips_with_nulls() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let row = PartRow::new("01HZX3V5AE0000000000000000", TENANT, "PN-000001", "bracket");

    let stored = store.insert_part(&row).await?;
    assert_eq!(stored, row);
    assert_eq!(stored.unit_cost, None);
    Ok(())
}

#[tokio::test]
async fn failing_record_rolls_back_whole_batch() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(3));
    let mut rows = supplier_rows(&mut generator, 4);
    rows[3].supplier_id = rows[1].supplier_id.clone();

    let err = store.insert_suppliers(&rows).await.unwrap_err();
    match err {
        StoreError::BatchInsert { entity, index, id, .. } => {
            assert_eq!(entity, "supplier");
            assert_eq!(index, 3);
            assert_eq!(id, rows[1].supplier_id);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.count_suppliers().await?, 0);
    Ok(())
}

#[tokio::test]
async fn failing_part_rolls_back_whole_batch() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(4));
    let suppliers = supplier_rows(&mut generator, 2);
    store.insert_suppliers(&suppliers).await?;

    let supplier_ids: Vec<String> = suppliers.iter().map(|row| row.supplier_id.clone()).collect();
    let mut parts: Vec<PartRow> = generator
        .generate_parts(6, TENANT, &supplier_ids)
        .iter()
        .map(PartRow::from)
        .collect();
    parts[4].part_id = parts[0].part_id.clone();

    let err = store.insert_parts(&parts).await.unwrap_err();
    match err {
        StoreError::BatchInsert { entity, index, id, .. } => {
            assert_eq!(entity, "part");
            assert_eq!(index, 4);
            assert_eq!(id, parts[0].part_id);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.count_parts().await?, 0);
    assert_eq!(store.count_suppliers().await?, 2);
    Ok(())
}

#[tokio::test]
async fn delete_removes_row_and_reports_missing_ids() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let row = SupplierRow::new("01HZX3V5AE0000000000000001", TENANT, "Acme Metals");
    store.insert_supplier(&row).await?;

    store.delete_supplier(&row.supplier_id).await?;
    assert_eq!(store.count_suppliers().await?, 0);

    let err = store.delete_supplier(&row.supplier_id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "supplier", .. }));

    let err = store.delete_part("missing").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "part", .. }));
    Ok(())
}

#[tokio::test]
async fn migrate_is_idempotent() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    store.migrate().await?;
    assert_eq!(store.count_parts().await?, 0);
    Ok(())
}

struct FixedWarehouse {
    rows: Vec<SupplierRow>,
}

#[async_trait]
impl WarehouseSource for FixedWarehouse {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_suppliers(&self) -> StoreResult<Vec<SupplierRow>> {
        Ok(self.rows.clone())
    }
}

#[tokio::test]
async fn pull_inserts_every_fetched_row() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let warehouse = FixedWarehouse {
        rows: vec![
            SupplierRow::new("W-1", TENANT, "Northwind Components"),
            SupplierRow::new("W-2", TENANT, "Contoso Fasteners"),
        ],
    };

    let summary = pull_suppliers(&warehouse, &store).await?;
    assert_eq!(summary.source, "fixed");
    assert_eq!(summary.fetched, 2);
    assert_eq!(summary.inserted, 2);
    assert_eq!(store.count_suppliers().await?, 2);
    Ok(())
}

#[tokio::test]
async fn pull_rejects_rows_without_identity() -> Result<()> {
    let store = SupplyStore::in_memory().await?;
    let warehouse = FixedWarehouse {
        rows: vec![
            SupplierRow::new("W-1", TENANT, "Northwind Components"),
            SupplierRow::new("", TENANT, "Nameless"),
        ],
    };

    let err = pull_suppliers(&warehouse, &store).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidRow { index: 1, .. }));
    assert_eq!(store.count_suppliers().await?, 0);
    Ok(())
}

#[tokio::test]
async fn postgres_warehouse_pull() -> Result<()> {
    let Ok(url) = std::env::var("WAREHOUSE_TEST_URL") else {
        eprintln!("WAREHOUSE_TEST_URL not set; skipping");
        return Ok(());
    };
    let warehouse = PostgresWarehouse::connect(&url, None).await?;
    let store = SupplyStore::in_memory().await?;
    let summary = pull_suppliers(&warehouse, &store).await?;
    assert_eq!(summary.inserted as usize, summary.fetched);
    Ok(())
}
