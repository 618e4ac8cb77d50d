use std::sync::{Arc, Mutex};

use supplychain_generate::{GenerateOptions, RecordGenerator};
use supplychain_store::{SupplyStore, WarehouseSource};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: SupplyStore,
    pub warehouse: Option<Arc<dyn WarehouseSource>>,
    generator: Arc<Mutex<RecordGenerator>>,
}

impl AppState {
    pub fn new(store: SupplyStore) -> Self {
        Self {
            store,
            warehouse: None,
            generator: Arc::new(Mutex::new(RecordGenerator::new(&GenerateOptions::default()))),
        }
    }

    pub fn with_warehouse(mut self, warehouse: Arc<dyn WarehouseSource>) -> Self {
        self.warehouse = Some(warehouse);
        self
    }

    /// Run `f` against the shared generator. The lock is never held across
    /// an await point.
    pub(crate) fn with_generator<T>(&self, f: impl FnOnce(&mut RecordGenerator) -> T) -> T {
        let mut generator = match self.generator.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut generator)
    }
}
