//! Composed cleaning pipeline.

use std::time::Instant;

use polars::prelude::{DataFrame, DataType, StringChunked};
use tracing::{info, info_span};

use lifexp_model::{AGE, LongRecord, PipelineOptions, Region, SEX, UNIT, VALUE, YEAR};

use crate::error::{Result, TransformError};
use crate::filter::filter_region;
use crate::reshape::{CleanStats, reshape_and_clean};

/// Result of [`clean_data`].
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// Long table restricted to the target region.
    pub data: DataFrame,
    /// Counts from the reshape-and-clean pass, before filtering.
    pub stats: CleanStats,
}

impl CleanOutcome {
    /// Rows remaining after the region filter.
    pub fn rows(&self) -> usize {
        self.data.height()
    }
}

/// Reshapes, cleans and filters a wide table for one region.
///
/// The whole table is assembled in memory before returning. Identical input
/// and region always produce the same rows in the same order.
pub fn clean_data(df: &DataFrame, region: Region, options: &PipelineOptions) -> Result<CleanOutcome> {
    let span = info_span!("clean", region = %region);
    let _guard = span.enter();
    let start = Instant::now();

    let (long, stats) = reshape_and_clean(df, &options.region_column)?;
    info!(
        candidates = stats.candidates,
        kept = stats.kept,
        dropped = stats.dropped,
        "reshaped wide table"
    );

    let data = filter_region(&long, &options.region_column, region.code())?;
    info!(
        rows = data.height(),
        duration_ms = start.elapsed().as_millis(),
        "filtered region"
    );
    Ok(CleanOutcome { data, stats })
}

fn expect_dtype(df: &DataFrame, column: &str, expected: DataType) -> Result<()> {
    let actual = df
        .column(column)
        .map_err(|_| TransformError::MissingColumn {
            column: column.to_string(),
        })?
        .dtype();
    if *actual != expected {
        return Err(TransformError::ColumnType {
            column: column.to_string(),
            dtype: actual.to_string(),
            expected: if expected == DataType::Int64 { "i64" } else { "f64" },
        });
    }
    Ok(())
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })?;
    Ok(column.str()?)
}

/// Typed view of a cleaned long table.
pub fn long_records(df: &DataFrame, region_column: &str) -> Result<Vec<LongRecord>> {
    expect_dtype(df, YEAR, DataType::Int64)?;
    expect_dtype(df, VALUE, DataType::Float64)?;
    let units = text_column(df, UNIT)?;
    let sexes = text_column(df, SEX)?;
    let ages = text_column(df, AGE)?;
    let regions = text_column(df, region_column)?;
    let years = df.column(YEAR)?.i64()?;
    let values = df.column(VALUE)?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let (Some(year), Some(value)) = (years.get(idx), values.get(idx)) else {
            continue;
        };
        records.push(LongRecord {
            unit: units.get(idx).unwrap_or_default().to_string(),
            sex: sexes.get(idx).unwrap_or_default().to_string(),
            age: ages.get(idx).unwrap_or_default().to_string(),
            region: regions.get(idx).unwrap_or_default().to_string(),
            year,
            value,
        });
    }
    Ok(records)
}
