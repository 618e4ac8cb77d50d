//! Pull suppliers from a remote warehouse into the local store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{ColumnIndex, Decode, Row, Type};
use tracing::info;

use crate::errors::{StoreError, StoreResult};
use crate::rows::SupplierRow;
use crate::store::SupplyStore;

/// Query used when the configuration does not supply one (`warehouse.query`
/// overrides it). Columns are read by name, so any query projecting these
/// aliases works.
pub const DEFAULT_QUERY: &str = r#"
SELECT
    supplier_id,
    tenant_id,
    supplier_code,
    legal_name,
    dba_name,
    country,
    region,
    address_line1,
    address_line2,
    city,
    state,
    postal_code
FROM public.suppliers
"#;

/// A remote source of supplier rows.
#[async_trait]
pub trait WarehouseSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_suppliers(&self) -> StoreResult<Vec<SupplierRow>>;
}

/// Warehouse reachable through the Postgres wire protocol.
#[derive(Debug, Clone)]
pub struct PostgresWarehouse {
    pool: PgPool,
    query: String,
}

impl PostgresWarehouse {
    pub fn new(pool: PgPool, query: impl Into<String>) -> Self {
        Self {
            pool,
            query: query.into(),
        }
    }

    pub async fn connect(url: &str, query: Option<String>) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await
            .map_err(StoreError::Warehouse)?;
        Ok(Self::new(
            pool,
            query.unwrap_or_else(|| DEFAULT_QUERY.to_string()),
        ))
    }
}

#[async_trait]
impl WarehouseSource for PostgresWarehouse {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn fetch_suppliers(&self) -> StoreResult<Vec<SupplierRow>> {
        let rows = sqlx::query(&self.query)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Warehouse)?;
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                supplier_from_row(row).map_err(|err| StoreError::InvalidRow {
                    index,
                    reason: err.to_string(),
                })
            })
            .collect()
    }
}

/// Map one warehouse row onto a `SupplierRow`, column by column.
fn supplier_from_row<R>(row: &R) -> Result<SupplierRow, sqlx::Error>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
{
    let mut supplier = SupplierRow::new(
        row.try_get::<String, _>("supplier_id")?,
        row.try_get::<String, _>("tenant_id")?,
        row.try_get::<String, _>("legal_name")?,
    );
    supplier.supplier_code = row.try_get::<Option<String>, _>("supplier_code")?;
    supplier.dba_name = row.try_get::<Option<String>, _>("dba_name")?;
    supplier.country = row.try_get::<Option<String>, _>("country")?;
    supplier.region = row.try_get::<Option<String>, _>("region")?;
    supplier.address_line1 = row.try_get::<Option<String>, _>("address_line1")?;
    supplier.address_line2 = row.try_get::<Option<String>, _>("address_line2")?;
    supplier.city = row.try_get::<Option<String>, _>("city")?;
    supplier.state = row.try_get::<Option<String>, _>("state")?;
    supplier.postal_code = row.try_get::<Option<String>, _>("postal_code")?;
    Ok(supplier)
}

/// Outcome of one warehouse pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullSummary {
    pub source: &'static str,
    pub fetched: usize,
    pub inserted: u64,
}

/// Fetch suppliers from `source` and insert them as one batch.
pub async fn pull_suppliers(
    source: &dyn WarehouseSource,
    store: &SupplyStore,
) -> StoreResult<PullSummary> {
    let rows = source.fetch_suppliers().await?;
    if let Some(index) = rows
        .iter()
        .position(|row| row.supplier_id.trim().is_empty() || row.tenant_id.trim().is_empty())
    {
        return Err(StoreError::InvalidRow {
            index,
            reason: "supplier_id and tenant_id must be non-empty".to_string(),
        });
    }
    info!(event = "warehouse_fetched", source = source.name(), rows = rows.len());
    let inserted = store.insert_suppliers(&rows).await?;
    Ok(PullSummary {
        source: source.name(),
        fetched: rows.len(),
        inserted,
    })
}
