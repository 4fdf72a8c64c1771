//! Tests for saving cleaned tables.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use lifexp_model::PipelineOptions;
use lifexp_output::{OutputError, save_data, write_table};

fn long_table() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("unit".into(), vec!["YR", "YR"]).into(),
        Series::new("sex".into(), vec!["F", "M"]).into(),
        Series::new("age".into(), vec!["Y_LT1", "Y65"]).into(),
        Series::new("region".into(), vec!["PT", "PT"]).into(),
        Series::new("year".into(), vec![2010i64, 2019]).into(),
        Series::new("value".into(), vec![80.1f64, 18.0]).into(),
    ];
    DataFrame::new(columns).unwrap()
}

fn render(df: &DataFrame, columns: &[&str]) -> String {
    let mut buffer: Vec<u8> = Vec::new();
    write_table(df, &mut buffer, columns).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn writes_header_and_rows_in_order() {
    let text = render(
        &long_table(),
        &["unit", "sex", "age", "region", "year", "value"],
    );
    insta::assert_snapshot!(text, @r"
    unit,sex,age,region,year,value
    YR,F,Y_LT1,PT,2010,80.1
    YR,M,Y65,PT,2019,18.0
    ");
}

#[test]
fn writes_selected_columns_only() {
    let text = render(&long_table(), &["region", "year", "value"]);
    insta::assert_snapshot!(text, @r"
    region,year,value
    PT,2010,80.1
    PT,2019,18.0
    ");
}

#[test]
fn empty_table_writes_header_only() {
    let empty = long_table().head(Some(0));
    let text = render(&empty, &["unit", "sex", "age", "region", "year", "value"]);
    assert_eq!(text, "unit,sex,age,region,year,value\n");
}

#[test]
fn unknown_column_is_rejected() {
    let mut buffer: Vec<u8> = Vec::new();
    let err = write_table(&long_table(), &mut buffer, &["unit", "flag"]).unwrap_err();
    assert!(matches!(err, OutputError::UnknownColumn { column } if column == "flag"));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pt_life_expectancy.csv");
    let rows = save_data(&long_table(), &path, &PipelineOptions::default()).unwrap();
    assert_eq!(rows, 2);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("unit,sex,age,region,year,value\n"));
}

#[test]
fn failed_save_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let options = PipelineOptions::new().with_output_columns(vec!["missing".to_string()]);
    assert!(save_data(&long_table(), &path, &options).is_err());
    assert!(!path.exists());
}

#[test]
fn saving_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    save_data(&long_table(), &first, &PipelineOptions::default()).unwrap();
    save_data(&long_table(), &second, &PipelineOptions::default()).unwrap();
    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}
