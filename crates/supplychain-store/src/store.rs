use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use crate::errors::{StoreError, StoreResult};
use crate::queries;
use crate::rows::{PartRow, SupplierRow};
use crate::schema::{PART_TABLE, SCHEMA_SQL, SUPPLIER_TABLE};

/// SQLite-backed store for suppliers and parts.
#[derive(Debug, Clone)]
pub struct SupplyStore {
    pool: SqlitePool,
}

impl SupplyStore {
    /// Wrap a pre-configured pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `url`, e.g.
    /// `sqlite://supplychain.db` or `sqlite::memory:`.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to `:memory:` is a separate database, so the
        // pool must hold exactly one connection for its whole life.
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;
        info!(event = "store_connected", url = %url);
        Ok(Self::new(pool))
    }

    /// Fresh in-memory store with the schema applied.
    pub async fn in_memory() -> StoreResult<Self> {
        let store = Self::connect("sqlite::memory:").await?;
        store.migrate().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist yet.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;
        info!(event = "schema_applied");
        Ok(())
    }

    pub async fn insert_supplier(&self, row: &SupplierRow) -> StoreResult<SupplierRow> {
        let stored = queries::insert_supplier(&self.pool, row).await?;
        info!(
            event = "supplier_inserted",
            supplier_id = %stored.supplier_id,
            tenant_id = %stored.tenant_id,
        );
        Ok(stored)
    }

    pub async fn insert_part(&self, row: &PartRow) -> StoreResult<PartRow> {
        let stored = queries::insert_part(&self.pool, row).await?;
        info!(
            event = "part_inserted",
            part_id = %stored.part_id,
            tenant_id = %stored.tenant_id,
        );
        Ok(stored)
    }

    /// Insert every supplier in one transaction. The first failure rolls the
    /// whole batch back and is reported as `BatchInsert` even if the rollback
    /// itself fails (the dropped transaction is rolled back regardless).
    /// Nothing is retried.
    pub async fn insert_suppliers(&self, rows: &[SupplierRow]) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        for (index, row) in rows.iter().enumerate() {
            if let Err(source) = queries::insert_supplier(&mut *tx, row).await {
                if let Err(rollback) = tx.rollback().await {
                    warn!(event = "batch_rollback_failed", error = %rollback);
                }
                warn!(
                    event = "batch_rolled_back",
                    table = SUPPLIER_TABLE,
                    index,
                    supplier_id = %row.supplier_id,
                    error = %source,
                );
                return Err(StoreError::BatchInsert {
                    entity: "supplier",
                    index,
                    id: row.supplier_id.clone(),
                    source,
                });
            }
        }
        tx.commit().await?;
        info!(event = "batch_committed", table = SUPPLIER_TABLE, rows = rows.len());
        Ok(rows.len() as u64)
    }

    /// Insert every part in one transaction, all or nothing.
    pub async fn insert_parts(&self, rows: &[PartRow]) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        for (index, row) in rows.iter().enumerate() {
            if let Err(source) = queries::insert_part(&mut *tx, row).await {
                if let Err(rollback) = tx.rollback().await {
                    warn!(event = "batch_rollback_failed", error = %rollback);
                }
                warn!(
                    event = "batch_rolled_back",
                    table = PART_TABLE,
                    index,
                    part_id = %row.part_id,
                    error = %source,
                );
                return Err(StoreError::BatchInsert {
                    entity: "part",
                    index,
                    id: row.part_id.clone(),
                    source,
                });
            }
        }
        tx.commit().await?;
        info!(event = "batch_committed", table = PART_TABLE, rows = rows.len());
        Ok(rows.len() as u64)
    }

    pub async fn delete_supplier(&self, supplier_id: &str) -> StoreResult<()> {
        if queries::delete_supplier(&self.pool, supplier_id).await? == 0 {
            return Err(StoreError::NotFound {
                entity: "supplier",
                id: supplier_id.to_string(),
            });
        }
        info!(event = "supplier_deleted", supplier_id = %supplier_id);
        Ok(())
    }

    pub async fn delete_part(&self, part_id: &str) -> StoreResult<()> {
        if queries::delete_part(&self.pool, part_id).await? == 0 {
            return Err(StoreError::NotFound {
                entity: "part",
                id: part_id.to_string(),
            });
        }
        info!(event = "part_deleted", part_id = %part_id);
        Ok(())
    }

    pub async fn count_suppliers(&self) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dim_supplier_v1")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn count_parts(&self) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dim_part_v1")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
