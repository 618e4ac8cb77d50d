use thiserror::Error;

/// Core error type shared across the supply-chain crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A stored or received value does not belong to its enumerated domain.
    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

/// Convenience alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
