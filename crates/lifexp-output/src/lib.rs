//! Output of cleaned life expectancy tables.
//!
//! Writes a long table as comma-separated text with a header row. The file
//! is rendered in memory and written in one step, so a failed run leaves no
//! partial output behind.

mod csv_writer;
mod error;

pub use csv_writer::{format_value, save_data, write_table};
pub use error::{OutputError, Result};
