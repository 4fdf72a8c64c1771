use std::io::Write;
use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame, DataType};
use tracing::info;

use lifexp_model::PipelineOptions;

use crate::error::{OutputError, Result};

/// Formats a float with its shortest round-trip text, keeping one decimal
/// place for whole numbers.
///
/// # Examples
///
/// ```
/// use lifexp_output::format_value;
///
/// assert_eq!(format_value(80.1), "80.1");
/// assert_eq!(format_value(81.0), "81.0");
/// ```
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

fn is_writable(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String) || dtype.is_integer() || dtype.is_float()
}

fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_value(f64::from(v)),
        AnyValue::Float64(v) => format_value(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn select_columns<'a, S: AsRef<str>>(df: &'a DataFrame, names: &[S]) -> Result<Vec<&'a Column>> {
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let column = df.column(name).map_err(|_| OutputError::UnknownColumn {
            column: name.to_string(),
        })?;
        if !is_writable(column.dtype()) {
            return Err(OutputError::UnsupportedDtype {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }
        columns.push(column);
    }
    Ok(columns)
}

/// Writes `columns` of `df` as CSV to `writer`, header first.
///
/// Returns the number of data rows written.
pub fn write_table<W: Write, S: AsRef<str>>(df: &DataFrame, writer: W, columns: &[S]) -> Result<usize> {
    let selected = select_columns(df, columns)?;
    let mut wtr = csv::Writer::from_writer(writer);
    let header: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
    wtr.write_record(&header)?;
    let mut record: Vec<String> = Vec::with_capacity(selected.len());
    for idx in 0..df.height() {
        record.clear();
        for column in &selected {
            record.push(cell_text(column.get(idx)?));
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(df.height())
}

/// Saves a cleaned table to `path` with the columns selected in `options`.
///
/// Parent directories are created when missing.
pub fn save_data(df: &DataFrame, path: &Path, options: &PipelineOptions) -> Result<usize> {
    let mut buffer: Vec<u8> = Vec::new();
    let rows = write_table(df, &mut buffer, &options.output_columns)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, &buffer).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows, bytes = buffer.len(), "saved long table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(80.1), "80.1");
        assert_eq!(format_value(81.0), "81.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(74.35), "74.35");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(AnyValue::Null), "");
        assert_eq!(cell_text(AnyValue::Int64(2010)), "2010");
        assert_eq!(cell_text(AnyValue::Float64(81.0)), "81.0");
        assert_eq!(cell_text(AnyValue::String("PT")), "PT");
    }
}
