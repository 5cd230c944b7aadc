use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Write `records` as CSV with a header row taken from the field names.
/// Returns the number of rows written.
pub fn export_to_csv<T: Serialize>(records: &[T], path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        wtr.serialize(record)
            .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV file")?;
    Ok(records.len())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
