use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use crate::error::Result;

/// Sorted distinct values of the region column of a loaded table.
pub fn distinct_regions(df: &DataFrame, region_column: &str) -> Result<Vec<String>> {
    let column = df.column(region_column)?.str()?;
    let distinct: BTreeSet<String> = column
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    Ok(distinct.into_iter().collect())
}
