//! Error types for life expectancy data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a raw dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File has no header line.
    #[error("input file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Schema Errors ===
    /// Identifier column absent from the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Data line with a different number of fields than the header.
    #[error("line {line} of {path} has {found} fields, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Malformed delimited text.
    #[error("failed to read delimited file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === JSON Errors ===
    /// Malformed JSON or a record missing a required field.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Record field holding a value of the wrong kind.
    #[error("record {record} of {path}: invalid {field} value {value}")]
    InvalidField {
        path: PathBuf,
        record: usize,
        field: &'static str,
        value: String,
    },

    /// Two records describing the same observation.
    #[error("duplicate observation for {key} in year {year} in {path}")]
    DuplicateObservation {
        path: PathBuf,
        key: String,
        year: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Maps an I/O error from opening `path`, keeping not-found distinct.
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/eu_life_expectancy_raw.tsv"),
        };
        assert_eq!(
            err.to_string(),
            "input file not found: /data/eu_life_expectancy_raw.tsv"
        );
    }

    #[test]
    fn test_open_maps_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::open(std::path::Path::new("missing.tsv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IngestError::open(std::path::Path::new("locked.tsv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("region".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
