//! Cleaning core for life expectancy tables.
//!
//! Turns the wide table produced by the loader into a long table with one row
//! per `(unit, sex, age, region, year)` observation:
//!
//! - **value**: extraction of the numeric part of a raw cell
//! - **reshape**: year column discovery, wide-to-long reshape and the fused
//!   reshape-and-clean pass
//! - **filter**: case-insensitive region selection
//! - **pipeline**: the composed `clean_data` entry point
//!
//! Cells without a number are dropped, never imputed. Row order follows the
//! input: outer loop over wide rows, inner loop over year columns left to right.

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reshape;
pub mod value;

pub use error::{Result, TransformError};
pub use filter::filter_region;
pub use pipeline::{CleanOutcome, clean_data, long_records};
pub use reshape::{CleanStats, RAW, melt, reshape_and_clean, year_columns, year_from_header};
pub use value::extract_value;
