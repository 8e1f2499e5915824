//! CSV Loader
//!
//! Reads the launch CSV into a [`LaunchDataset`]. The header must carry the
//! four columns the dashboard uses; any other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchDataset, LaunchRecord};

/// Columns the dashboard reads from the CSV
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Load the dataset from a CSV file on disk
pub fn load_csv(path: &Path) -> DatasetResult<LaunchDataset> {
    let file = File::open(path)?;
    let dataset = from_reader(file)?;

    tracing::debug!(path = ?path, records = dataset.len(), "Loaded launch CSV");
    Ok(dataset)
}

/// Load the dataset from any reader producing CSV text
pub fn from_reader<R: Read>(reader: R) -> DatasetResult<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.map_err(|e| DatasetError::InvalidRecord {
            line: e
                .position()
                .map(|p| p.line())
                .unwrap_or(row as u64 + 2),
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(LaunchDataset::new(records))
}

/// Parse the dataset from an in-memory CSV string (useful for testing)
pub fn load_str(csv_data: &str) -> DatasetResult<LaunchDataset> {
    from_reader(csv_data.as_bytes())
}
