//! JSON loader for per-observation exports.
//!
//! Each record describes one `(unit, sex, age, country, year)` observation.
//! Records are pivoted into the wide shape so the cleaning core sees the same
//! table whichever format the data arrived in.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use polars::prelude::DataFrame;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use lifexp_model::PipelineOptions;

use crate::builder::{build_wide_frame, push_row};
use crate::error::{IngestError, Result};
use crate::strategy::LoadStrategy;

/// Loader for JSON arrays of observation records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStrategy;

impl LoadStrategy for JsonStrategy {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, path: &Path, options: &PipelineOptions) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
        let records: Vec<ObservationRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| IngestError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        pivot_records(records, path, options)
    }
}

/// One observation as exported. Flag columns and other extras are ignored.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    unit: String,
    sex: String,
    age: String,
    #[serde(alias = "region")]
    country: String,
    year: Value,
    #[serde(default, alias = "value")]
    life_expectancy: Value,
}

/// Year as a column header. Strings are taken as-is so the core can reject
/// non-numeric years.
fn year_header(value: &Value, record: usize, path: &Path) -> Result<String> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.trim().to_string()),
        other => Err(IngestError::InvalidField {
            path: path.to_path_buf(),
            record,
            field: "year",
            value: other.to_string(),
        }),
    }
}

/// Raw cell text. Null becomes an empty cell, dropped later by cleaning.
fn raw_cell(value: &Value, record: usize, path: &Path) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(IngestError::InvalidField {
            path: path.to_path_buf(),
            record,
            field: "life_expectancy",
            value: other.to_string(),
        }),
    }
}

type SeriesKey = (String, String, String, String);

fn pivot_records(
    records: Vec<ObservationRecord>,
    path: &Path,
    options: &PipelineOptions,
) -> Result<DataFrame> {
    // Rows and years keep first-appearance order.
    let mut keys: Vec<SeriesKey> = Vec::new();
    let mut key_index: BTreeMap<SeriesKey, usize> = BTreeMap::new();
    let mut years: Vec<String> = Vec::new();
    let mut year_index: BTreeMap<String, usize> = BTreeMap::new();
    let mut cells: BTreeMap<(usize, usize), String> = BTreeMap::new();

    for (record_idx, record) in records.into_iter().enumerate() {
        let year = year_header(&record.year, record_idx, path)?;
        let cell = raw_cell(&record.life_expectancy, record_idx, path)?;
        let key = (record.unit, record.sex, record.age, record.country);

        let row = match key_index.get(&key) {
            Some(row) => *row,
            None => {
                key_index.insert(key.clone(), keys.len());
                keys.push(key.clone());
                keys.len() - 1
            }
        };
        let column = match year_index.get(&year) {
            Some(column) => *column,
            None => {
                year_index.insert(year.clone(), years.len());
                years.push(year.clone());
                years.len() - 1
            }
        };
        if cells.insert((row, column), cell).is_some() {
            return Err(IngestError::DuplicateObservation {
                path: path.to_path_buf(),
                key: format!("{},{},{},{}", key.0, key.1, key.2, key.3),
                year,
            });
        }
    }
    debug!(
        path = %path.display(),
        series = keys.len(),
        years = years.len(),
        "pivoted json records"
    );

    let mut headers: Vec<String> = options
        .id_columns()
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    headers.extend(years.iter().cloned());

    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(keys.len()); headers.len()];
    for (row_idx, (unit, sex, age, country)) in keys.into_iter().enumerate() {
        let mut row = vec![unit, sex, age, country];
        for column in 0..years.len() {
            row.push(cells.remove(&(row_idx, column)).unwrap_or_default());
        }
        push_row(&mut values, row);
    }
    build_wide_frame(&headers, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: Value, value: Value) -> ObservationRecord {
        ObservationRecord {
            unit: "YR".to_string(),
            sex: "F".to_string(),
            age: "Y65".to_string(),
            country: country.to_string(),
            year,
            life_expectancy: value,
        }
    }

    #[test]
    fn test_pivot_keeps_first_appearance_order() {
        let records = vec![
            record("PT", Value::from(2021), Value::from(22.1)),
            record("FR", Value::from(2021), Value::from(23.4)),
            record("PT", Value::from(2020), Value::from(21.9)),
        ];
        let df = pivot_records(records, Path::new("t.json"), &PipelineOptions::default()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["unit", "sex", "age", "region", "2021", "2020"]);
        let regions = df.column("region").unwrap().str().unwrap();
        assert_eq!(regions.get(0), Some("PT"));
        assert_eq!(regions.get(1), Some("FR"));
        let y2020 = df.column("2020").unwrap().str().unwrap();
        assert_eq!(y2020.get(0), Some("21.9"));
        // FR has no 2020 record.
        assert_eq!(y2020.get(1), Some(""));
    }

    #[test]
    fn test_pivot_rejects_duplicates() {
        let records = vec![
            record("PT", Value::from(2021), Value::from(22.1)),
            record("PT", Value::from("2021"), Value::from(22.3)),
        ];
        let err =
            pivot_records(records, Path::new("t.json"), &PipelineOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateObservation { .. }));
    }

    #[test]
    fn test_raw_cell_variants() {
        let path = Path::new("t.json");
        assert_eq!(raw_cell(&Value::Null, 0, path).unwrap(), "");
        assert_eq!(raw_cell(&Value::from(80.1), 0, path).unwrap(), "80.1");
        assert_eq!(raw_cell(&Value::from("80.1 e"), 0, path).unwrap(), "80.1 e");
        assert!(raw_cell(&Value::Bool(true), 0, path).is_err());
    }

    #[test]
    fn test_year_header_variants() {
        let path = Path::new("t.json");
        assert_eq!(year_header(&Value::from(2019), 0, path).unwrap(), "2019");
        assert_eq!(year_header(&Value::from(" 2019 "), 0, path).unwrap(), "2019");
        assert!(year_header(&Value::Null, 0, path).is_err());
    }
}
