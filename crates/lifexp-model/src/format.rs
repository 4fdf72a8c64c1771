//! Input format selection for the loader.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// On-disk representation of the raw dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Delimited text, one column per year. Tab and comma both separate fields.
    Tsv,
    /// JSON array of records, one record per observation.
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Tsv => "tsv",
            InputFormat::Json => "json",
        }
    }

    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = ModelError;

    /// `csv` is accepted as an alias of `tsv`: the delimited reader splits on both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tsv" | "csv" => Ok(InputFormat::Tsv),
            "json" => Ok(InputFormat::Json),
            _ => Err(ModelError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}
