//! Data model for the life expectancy cleaning pipeline.
//!
//! - **region**: the closed set of Eurostat geography codes
//! - **format**: input format selector for the loader
//! - **schema**: column names and the long-format record
//! - **options**: pipeline configuration shared by loader, core and saver

pub mod error;
pub mod format;
pub mod options;
pub mod region;
pub mod schema;

pub use error::{ModelError, Result};
pub use format::InputFormat;
pub use options::PipelineOptions;
pub use region::Region;
pub use schema::{AGE, LongRecord, OUTPUT_COLUMNS, REGION, SEX, UNIT, VALUE, YEAR, id_columns};
