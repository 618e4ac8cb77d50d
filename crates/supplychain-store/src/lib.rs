//! Persistence adapter for generated supply-chain records.
//!
//! Records are written to SQLite one insert per record; batches run inside
//! a single transaction that is rolled back on the first failure. The
//! `warehouse` module pulls supplier rows from a remote Postgres-compatible
//! warehouse and pushes them through the same batch path.

pub mod errors;
pub mod queries;
pub mod rows;
pub mod schema;
pub mod store;
pub mod warehouse;

pub use errors::{StoreError, StoreResult};
pub use rows::{PartRow, SupplierRow};
pub use sqlx;
pub use store::SupplyStore;
pub use warehouse::{PostgresWarehouse, PullSummary, WarehouseSource, pull_suppliers};
