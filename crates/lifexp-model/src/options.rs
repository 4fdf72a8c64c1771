//! Configuration shared by the loader, the cleaning core and the saver.

use serde::{Deserialize, Serialize};

use crate::schema::{OUTPUT_COLUMNS, REGION, id_columns};

/// Options controlling a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Name given to the geography column.
    ///
    /// The loader renames the source geography column (`geo\time` in the TSV
    /// export, `country` in the JSON export) to this name, and every later
    /// stage reads it from here.
    pub region_column: String,

    /// Columns written by the saver, in order.
    pub output_columns: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            region_column: REGION.to_string(),
            output_columns: OUTPUT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region_column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        // Keep the default output selection pointing at the renamed column.
        for column in &mut self.output_columns {
            if *column == self.region_column {
                column.clone_from(&name);
            }
        }
        self.region_column = name;
        self
    }

    #[must_use]
    pub fn with_output_columns(mut self, columns: Vec<String>) -> Self {
        self.output_columns = columns;
        self
    }

    /// Identifier columns with the configured region column name.
    pub fn id_columns(&self) -> [&str; 4] {
        id_columns(&self.region_column)
    }
}
