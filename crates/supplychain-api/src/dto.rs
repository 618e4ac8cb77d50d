//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplierRequest {
    pub tenant_id: String,
    pub legal_name: String,
}

impl CreateSupplierRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require("tenant_id", &self.tenant_id)?;
        require("legal_name", &self.legal_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartRequest {
    pub tenant_id: String,
    pub part_number: String,
    pub description: String,
}

impl CreatePartRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require("tenant_id", &self.tenant_id)?;
        require("part_number", &self.part_number)?;
        require("description", &self.description)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchAndInsertResponse {
    pub source: String,
    pub fetched: usize,
    pub inserted: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
