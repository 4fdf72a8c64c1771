//! Wide-to-long reshape.
//!
//! Year columns are whatever is left once the identifier columns are set
//! aside, so the set of years is discovered from the input schema. Every
//! year header must parse as an integer; a non-numeric header is a schema
//! defect and aborts the run.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series, StringChunked};
use tracing::debug;

use lifexp_model::{VALUE, YEAR, id_columns};

use crate::error::{Result, TransformError};
use crate::value::extract_value;

/// Column holding the uncleaned cell text in [`melt`] output.
pub const RAW: &str = "raw";

/// Row counts of a reshape-and-clean pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Long rows before cleaning: wide rows × year columns.
    pub candidates: usize,
    /// Rows with a numeric value.
    pub kept: usize,
    /// Rows dropped for lack of a numeric value.
    pub dropped: usize,
}

/// Parses a year column header.
pub fn year_from_header(header: &str) -> Result<i64> {
    header
        .trim()
        .parse::<i64>()
        .map_err(|_| TransformError::InvalidYearHeader {
            header: header.to_string(),
        })
}

/// Names of the year columns, in table order.
///
/// Fails with [`TransformError::MissingColumn`] when an identifier column is
/// absent.
pub fn year_columns(df: &DataFrame, region_column: &str) -> Result<Vec<String>> {
    let ids = id_columns(region_column);
    let names = df.get_column_names();
    for id in ids {
        if !names.iter().any(|name| name.as_str() == id) {
            return Err(TransformError::MissingColumn {
                column: id.to_string(),
            });
        }
    }
    Ok(names
        .iter()
        .filter(|name| !ids.contains(&name.as_str()))
        .map(|name| name.to_string())
        .collect())
}

/// Wide table with every column viewed as text and year headers parsed.
struct WideView {
    ids: Vec<Column>,
    years: Vec<(i64, Column)>,
    height: usize,
}

impl WideView {
    fn new(df: &DataFrame, region_column: &str) -> Result<Self> {
        let year_names = year_columns(df, region_column)?;
        let ids = id_columns(region_column)
            .iter()
            .map(|name| text_column(df, name))
            .collect::<Result<Vec<_>>>()?;
        let mut years = Vec::with_capacity(year_names.len());
        for name in &year_names {
            years.push((year_from_header(name)?, text_column(df, name)?));
        }
        debug!(
            years = ?year_names,
            rows = df.height(),
            "discovered year columns"
        );
        Ok(Self {
            ids,
            years,
            height: df.height(),
        })
    }

    fn id_chunks(&self) -> Result<Vec<&StringChunked>> {
        Ok(self
            .ids
            .iter()
            .map(Column::str)
            .collect::<polars::prelude::PolarsResult<Vec<_>>>()?)
    }

    fn year_chunks(&self) -> Result<Vec<(i64, &StringChunked)>> {
        let mut chunks = Vec::with_capacity(self.years.len());
        for (year, column) in &self.years {
            chunks.push((*year, column.str()?));
        }
        Ok(chunks)
    }
}

fn text_column(df: &DataFrame, name: &str) -> Result<Column> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::MissingColumn {
            column: name.to_string(),
        })?;
    if matches!(column.dtype(), DataType::String) {
        Ok(column.clone())
    } else {
        Ok(column.cast(&DataType::String)?)
    }
}

/// Column-major accumulator for long rows.
struct LongColumns<V> {
    ids: [Vec<String>; 4],
    years: Vec<i64>,
    values: Vec<V>,
}

impl<V> LongColumns<V>
where
    Series: NamedFrom<Vec<V>, [V]>,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: std::array::from_fn(|_| Vec::with_capacity(capacity)),
            years: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, ids: &[&StringChunked], row: usize, year: i64, value: V) {
        for (target, source) in self.ids.iter_mut().zip(ids) {
            target.push(source.get(row).unwrap_or_default().to_string());
        }
        self.years.push(year);
        self.values.push(value);
    }

    fn into_frame(self, region_column: &str, value_column: &str) -> Result<DataFrame> {
        let mut columns = key_columns(region_column, self.ids, self.years);
        columns.push(Series::new(value_column.into(), self.values).into());
        Ok(DataFrame::new(columns)?)
    }
}

fn key_columns(region_column: &str, ids: [Vec<String>; 4], years: Vec<i64>) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::with_capacity(6);
    for (name, values) in id_columns(region_column).iter().zip(ids) {
        columns.push(Series::new((*name).into(), values).into());
    }
    columns.push(Series::new(YEAR.into(), years).into());
    columns
}

/// Reshapes a wide table to long form without cleaning.
///
/// Produces exactly `rows × year columns` rows with the raw cell text in the
/// `raw` column.
pub fn melt(df: &DataFrame, region_column: &str) -> Result<DataFrame> {
    let view = WideView::new(df, region_column)?;
    let ids = view.id_chunks()?;
    let years = view.year_chunks()?;
    let mut long = LongColumns::<Option<String>>::with_capacity(view.height * years.len());
    for row in 0..view.height {
        for (year, cells) in &years {
            long.push(&ids, row, *year, cells.get(row).map(str::to_string));
        }
    }
    long.into_frame(region_column, RAW)
}

/// Reshapes a wide table to long form and keeps only cells with a number.
///
/// The resulting `value` column is `Float64` with no nulls; `year` is `Int64`.
pub fn reshape_and_clean(df: &DataFrame, region_column: &str) -> Result<(DataFrame, CleanStats)> {
    let view = WideView::new(df, region_column)?;
    let ids = view.id_chunks()?;
    let years = view.year_chunks()?;
    let mut stats = CleanStats::default();
    let mut long = LongColumns::<f64>::with_capacity(view.height * years.len());
    for row in 0..view.height {
        for (year, cells) in &years {
            stats.candidates += 1;
            let Some(value) = cells.get(row).and_then(extract_value) else {
                stats.dropped += 1;
                continue;
            };
            stats.kept += 1;
            long.push(&ids, row, *year, value);
        }
    }
    Ok((long.into_frame(region_column, VALUE)?, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_year_from_header() {
        assert_eq!(year_from_header("2019").unwrap(), 2019);
        assert_eq!(year_from_header(" 2019 ").unwrap(), 2019);
        assert!(matches!(
            year_from_header("geo\\time"),
            Err(TransformError::InvalidYearHeader { .. })
        ));
    }

    #[test]
    fn test_year_columns_in_table_order() {
        let df = wide(vec![
            ("2011", vec!["1"]),
            ("unit", vec!["YR"]),
            ("sex", vec!["F"]),
            ("age", vec!["Y1"]),
            ("region", vec!["PT"]),
            ("2010", vec!["2"]),
        ]);
        assert_eq!(year_columns(&df, "region").unwrap(), vec!["2011", "2010"]);
    }

    #[test]
    fn test_year_columns_requires_identifiers() {
        let df = wide(vec![("unit", vec!["YR"]), ("2010", vec!["1"])]);
        assert!(matches!(
            year_columns(&df, "region"),
            Err(TransformError::MissingColumn { column }) if column == "sex"
        ));
    }

    #[test]
    fn test_long_column_types() {
        let df = wide(vec![
            ("unit", vec!["YR"]),
            ("sex", vec!["F"]),
            ("age", vec!["Y1"]),
            ("country", vec!["PT"]),
            ("2010", vec!["80.5 e"]),
        ]);
        let raw = melt(&df, "country").unwrap();
        let dtypes: Vec<(String, DataType)> = raw
            .get_columns()
            .iter()
            .map(|column| (column.name().to_string(), column.dtype().clone()))
            .collect();
        assert_eq!(
            dtypes,
            vec![
                ("unit".to_string(), DataType::String),
                ("sex".to_string(), DataType::String),
                ("age".to_string(), DataType::String),
                ("country".to_string(), DataType::String),
                ("year".to_string(), DataType::Int64),
                ("raw".to_string(), DataType::String),
            ]
        );

        let (clean, _) = reshape_and_clean(&df, "country").unwrap();
        assert_eq!(clean.column("year").unwrap().dtype(), &DataType::Int64);
        assert_eq!(clean.column("value").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_non_string_year_column_is_cast() {
        let df = DataFrame::new(vec![
            Series::new("unit".into(), vec!["YR"]).into(),
            Series::new("sex".into(), vec!["F"]).into(),
            Series::new("age".into(), vec!["Y1"]).into(),
            Series::new("region".into(), vec!["PT"]).into(),
            Series::new("2010".into(), vec![Some(80.5f64)]).into(),
        ])
        .unwrap();
        let (long, stats) = reshape_and_clean(&df, "region").unwrap();
        assert_eq!(stats.kept, 1);
        assert_eq!(long.column("value").unwrap().f64().unwrap().get(0), Some(80.5));
    }
}
