//! Region selection on the long table.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::{Result, TransformError};

/// Keeps rows whose region equals `target`, ignoring ASCII case.
///
/// Exact match only: no trimming, prefix or partial matching. Membership of
/// `target` in the region set is checked by the caller.
pub fn filter_region(df: &DataFrame, region_column: &str, target: &str) -> Result<DataFrame> {
    let regions = df
        .column(region_column)
        .map_err(|_| TransformError::MissingColumn {
            column: region_column.to_string(),
        })?
        .str()?;
    let keep: Vec<bool> = regions
        .into_iter()
        .map(|value| value.is_some_and(|region| region.eq_ignore_ascii_case(target)))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}
