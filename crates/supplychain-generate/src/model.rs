use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Options for a [`crate::RecordGenerator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for the random source. `None` draws a fresh seed per generator.
    pub seed: Option<u64>,
    /// Fixed "now" for timestamps and IDs. `None` reads the system clock
    /// for every record.
    pub reference_time: Option<DateTime<Utc>>,
}

impl GenerateOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }
}

/// Result of a CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: u64,
    pub bytes_written: u64,
}

/// Per-entity section of a [`GenerationReport`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityReport {
    pub rows_generated: u64,
    pub csv_path: Option<PathBuf>,
    pub bytes_written: u64,
    pub rows_inserted: u64,
}

impl EntityReport {
    pub fn record_export(&mut self, export: &ExportSummary) {
        self.csv_path = Some(export.path.clone());
        self.bytes_written = export.bytes_written;
    }
}

/// Report for a generation run, written next to the CSV files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub tenant_id: String,
    pub seed: Option<u64>,
    pub started_at: DateTime<Utc>,
    pub suppliers: EntityReport,
    pub parts: EntityReport,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, tenant_id: String, seed: Option<u64>) -> Self {
        Self {
            run_id,
            tenant_id,
            seed,
            started_at: Utc::now(),
            suppliers: EntityReport::default(),
            parts: EntityReport::default(),
            duration_ms: 0,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), GenerationError> {
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}
