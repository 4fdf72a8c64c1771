use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unsupported region: <{code}>")]
    UnsupportedRegion { code: String },
    #[error("unsupported input format: <{format}> (expected tsv, csv or json)")]
    UnsupportedFormat { format: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
