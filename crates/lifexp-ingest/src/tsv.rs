//! Delimited text loader for the Eurostat bulk download.
//!
//! The export uses tabs between year columns but commas inside the first
//! (composite) column, e.g. `unit,sex,age,geo\time\t2019 \t2018 `. The same
//! extract saved as a plain CSV quotes that column instead. Either way the
//! first field of every record is expanded on commas into the identifiers.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use polars::prelude::DataFrame;
use tracing::debug;

use lifexp_model::PipelineOptions;

use crate::builder::{build_wide_frame, push_row};
use crate::error::{IngestError, Result};
use crate::strategy::LoadStrategy;

/// Separator inside the composite identifier column.
const COMPOSITE_SEPARATOR: char = ',';

/// Loader for tab or comma separated files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvStrategy;

impl LoadStrategy for TsvStrategy {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn load(&self, path: &Path, options: &PipelineOptions) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
        let mut reader = BufReader::new(file);
        let mut first_line = String::new();
        reader
            .read_line(&mut first_line)
            .and_then(|_| reader.seek(SeekFrom::Start(0)))
            .map_err(|source| IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let delimiter = sniff_delimiter(&first_line);
        debug!(path = %path.display(), delimiter = %char::from(delimiter).escape_default(), "reading delimited file");
        read_wide(reader, delimiter, path, options)
    }
}

/// Tab when the header line has one, comma otherwise.
pub(crate) fn sniff_delimiter(header_line: &str) -> u8 {
    if header_line.contains('\t') { b'\t' } else { b',' }
}

/// Fields of a record with the leading composite field expanded.
fn expand_record(record: &StringRecord) -> Vec<String> {
    let mut fields = record.iter();
    let mut row: Vec<String> = fields
        .next()
        .map(|first| {
            first
                .split(COMPOSITE_SEPARATOR)
                .map(|part| part.trim().to_string())
                .collect()
        })
        .unwrap_or_default();
    row.extend(fields.map(str::to_string));
    row
}

/// Normalizes header cells and renames the geography column.
fn normalize_headers(raw: &[String], region_column: &str) -> Vec<String> {
    raw.iter()
        .map(|cell| {
            let header = cell.trim().trim_matches('\u{feff}');
            if header.contains("geo") {
                region_column.to_string()
            } else {
                header.to_string()
            }
        })
        .collect()
}

fn require_columns(headers: &[String], path: &Path, options: &PipelineOptions) -> Result<()> {
    for required in options.id_columns() {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Reads delimited records into a wide table.
pub(crate) fn read_wide<R: Read>(
    source: R,
    delimiter: u8,
    path: &Path,
    options: &PipelineOptions,
) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(source);
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut headers: Option<Vec<String>> = None;
    let mut values: Vec<Vec<String>> = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = expand_record(&record);
        let Some(expected) = headers.as_ref().map(Vec::len) else {
            let parsed = normalize_headers(&row, &options.region_column);
            require_columns(&parsed, path, options)?;
            debug!(path = %path.display(), headers = ?parsed, "parsed header");
            values = vec![Vec::new(); parsed.len()];
            headers = Some(parsed);
            continue;
        };
        if row.len() != expected {
            let line = record.position().map_or(0, |pos| pos.line());
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line: usize::try_from(line).unwrap_or(usize::MAX),
                expected,
                found: row.len(),
            });
        }
        push_row(&mut values, row);
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    build_wide_frame(&headers, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, delimiter: u8) -> Result<DataFrame> {
        read_wide(
            text.as_bytes(),
            delimiter,
            Path::new("memory.tsv"),
            &PipelineOptions::default(),
        )
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("unit,sex,age,geo\\time\t2019 \t2018 \n"), b'\t');
        assert_eq!(sniff_delimiter("\"unit,sex,age,geo\\time\",2019\n"), b',');
    }

    #[test]
    fn test_tab_export_expands_composite_column() {
        let df = read("unit,sex,age,geo\\time\t2019 \t2018 \nYR,F,Y_LT1,PT\t80.1 e\t: \n", b'\t').unwrap();
        assert_eq!(names(&df), vec!["unit", "sex", "age", "region", "2019", "2018"]);
        let y2019 = df.column("2019").unwrap().str().unwrap();
        assert_eq!(y2019.get(0), Some("80.1 e"));
        let y2018 = df.column("2018").unwrap().str().unwrap();
        assert_eq!(y2018.get(0), Some(":"));
    }

    #[test]
    fn test_quoted_csv_expands_composite_column() {
        let df = read("\"unit,sex,age,geo\\time\",2010\n\"YR,F,Y_LT1,PT\",80.1 e\n", b',').unwrap();
        assert_eq!(names(&df), vec!["unit", "sex", "age", "region", "2010"]);
        let region = df.column("region").unwrap().str().unwrap();
        assert_eq!(region.get(0), Some("PT"));
    }

    #[test]
    fn test_plain_csv_keeps_fields() {
        let df = read("unit,sex,age,geo\\time,2010\nYR,F,Y_LT1,PT,80.1\n", b',').unwrap();
        assert_eq!(names(&df), vec!["unit", "sex", "age", "region", "2010"]);
    }

    #[test]
    fn test_empty_cells_are_kept() {
        let df = read("unit,sex,age,geo\\time\t2011\t2010\nYR,F,Y1,PT\t\t1\n", b'\t').unwrap();
        let y2011 = df.column("2011").unwrap().str().unwrap();
        assert_eq!(y2011.get(0), Some(""));
    }

    #[test]
    fn test_blank_text_is_empty_file() {
        assert!(matches!(read("\n\n", b'\t'), Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_normalize_headers_renames_geo() {
        let raw: Vec<String> = ["\u{feff}unit", "sex", "age", "geo\\time", "2019 "]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let headers = normalize_headers(&raw, "region");
        assert_eq!(headers, vec!["unit", "sex", "age", "region", "2019"]);
    }
}
