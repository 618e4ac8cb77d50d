use std::time::Instant;

use supplychain_core::{Part, Supplier};
use tracing::info;

use crate::builder::RecordGenerator;

impl RecordGenerator {
    /// Generate `count` suppliers for a tenant, in creation (and ID) order.
    pub fn generate_suppliers(&mut self, count: usize, tenant_id: &str) -> Vec<Supplier> {
        let start = Instant::now();
        let suppliers: Vec<Supplier> = (0..count)
            .map(|_| self.build_supplier(tenant_id))
            .collect();
        info!(
            event = "suppliers_generated",
            tenant_id = %tenant_id,
            rows = suppliers.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        suppliers
    }

    /// Generate `count` parts for a tenant, each sourced from
    /// `candidate_supplier_ids`.
    pub fn generate_parts(
        &mut self,
        count: usize,
        tenant_id: &str,
        candidate_supplier_ids: &[String],
    ) -> Vec<Part> {
        let start = Instant::now();
        let parts: Vec<Part> = (0..count)
            .map(|_| self.build_part(tenant_id, candidate_supplier_ids))
            .collect();
        info!(
            event = "parts_generated",
            tenant_id = %tenant_id,
            rows = parts.len(),
            candidate_suppliers = candidate_supplier_ids.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        parts
    }
}
