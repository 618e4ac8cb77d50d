//! HTTP front end over the supply-chain store.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{router, serve};
pub use state::AppState;
