//! Dataset loading error types
//!
//! Every variant is fatal: the dashboard does not start without its data.

use thiserror::Error;

/// Errors that can occur while loading the launch CSV
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure could not be read (bad header, broken quoting)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be converted into a launch record
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingColumn("class".to_string());
        assert_eq!(err.to_string(), "Missing required column: class");

        let err = DatasetError::InvalidRecord {
            line: 4,
            message: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record at line 4: invalid float literal"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
