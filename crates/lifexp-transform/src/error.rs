use thiserror::Error;

/// Schema defects surfaced by the cleaning core.
///
/// Malformed cell values are not errors: they are dropped during cleaning.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("required column '{column}' not found in table")]
    MissingColumn { column: String },
    #[error("year column header '{header}' is not an integer")]
    InvalidYearHeader { header: String },
    #[error("column '{column}' has type {dtype}, expected {expected}")]
    ColumnType {
        column: String,
        dtype: String,
        expected: &'static str,
    },
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
