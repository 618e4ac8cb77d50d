use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::errors::GenerationError;
use crate::model::ExportSummary;

/// A record with a fixed, ordered column set.
pub trait TabularRecord {
    const HEADER: &'static [&'static str];

    /// Cells in `HEADER` order.
    fn to_row(&self) -> Vec<String>;
}

/// Write records as CSV to `path`: one header row, then one row per record.
///
/// Any failure aborts the export; a partially written file is left behind.
pub fn write_records_csv<R: TabularRecord>(
    path: &Path,
    records: &[R],
) -> Result<ExportSummary, GenerationError> {
    let mut file = BufWriter::new(File::create(path)?);
    let bytes_written = write_records_to(&mut file, records)?;

    info!(
        event = "csv_written",
        path = %path.display(),
        rows = records.len(),
        bytes_written,
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        rows: records.len() as u64,
        bytes_written,
    })
}

/// Write records as CSV to any sink and return the number of bytes written.
/// The sink is flushed before returning.
pub fn write_records_to<W: Write, R: TabularRecord>(
    sink: W,
    records: &[R],
) -> Result<u64, GenerationError> {
    let counting = CountingWriter::new(sink);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(R::HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
