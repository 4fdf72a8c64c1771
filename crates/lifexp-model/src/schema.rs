//! Column names of the wide and long tables.

use serde::{Deserialize, Serialize};

pub const UNIT: &str = "unit";
pub const SEX: &str = "sex";
pub const AGE: &str = "age";
pub const REGION: &str = "region";
pub const YEAR: &str = "year";
pub const VALUE: &str = "value";

/// Identifier columns shared by the wide and long tables, with the region
/// column under its configured name.
pub fn id_columns(region_column: &str) -> [&str; 4] {
    [UNIT, SEX, AGE, region_column]
}

/// Columns of the long table, in output order.
pub const OUTPUT_COLUMNS: [&str; 6] = [UNIT, SEX, AGE, REGION, YEAR, VALUE];

/// One observation of the long table.
///
/// `value` is always finite: cells without a number never become records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i64,
    pub value: f64,
}
