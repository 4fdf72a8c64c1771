//! Wide DataFrame construction shared by the load strategies.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::error::Result;

/// Builds a wide table of `String` columns from column-major cell values.
pub(crate) fn build_wide_frame(headers: &[String], mut values: Vec<Vec<String>>) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let cells = values.get_mut(idx).map(std::mem::take).unwrap_or_default();
        columns.push(Series::new(header.as_str().into(), cells).into());
    }
    Ok(DataFrame::new(columns)?)
}

/// Push a row of values into the column-major value vectors.
pub(crate) fn push_row(values: &mut [Vec<String>], row: Vec<String>) {
    for (idx, value) in row.into_iter().enumerate() {
        values[idx].push(value);
    }
}
