use thiserror::Error;

/// Errors raised by the persistence adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    /// One record of a batch failed; the whole batch was rolled back.
    #[error("failed to insert {entity} #{index} ('{id}'), batch rolled back: {source}")]
    BatchInsert {
        entity: &'static str,
        index: usize,
        id: String,
        source: sqlx::Error,
    },
    #[error("warehouse row #{index} is invalid: {reason}")]
    InvalidRow { index: usize, reason: String },
    #[error("warehouse error: {0}")]
    Warehouse(#[source] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
