//! Life expectancy data ingestion.
//!
//! Loads a raw Eurostat extract into a wide Polars `DataFrame`: the identifier
//! columns `unit`, `sex`, `age` and the region column, followed by one `String`
//! column per year holding the raw, uncleaned cell text.
//!
//! Two on-disk formats are supported, each behind the [`LoadStrategy`] trait:
//!
//! - **TSV** ([`TsvStrategy`]): the Eurostat bulk download, whose first header
//!   cell is the composite `unit,sex,age,geo\time`
//! - **JSON** ([`JsonStrategy`]): an array of per-observation records pivoted
//!   into the same wide shape
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lifexp_ingest::load;
//! use lifexp_model::{InputFormat, PipelineOptions};
//!
//! let wide = load(Path::new("data/eu_life_expectancy_raw.tsv"), InputFormat::Tsv, &PipelineOptions::default())?;
//! ```

mod builder;
mod error;
mod json;
mod regions;
mod strategy;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use json::JsonStrategy;
pub use strategy::{LoadStrategy, load, strategy_for};
pub use tsv::TsvStrategy;

// === Inspection ===
pub use regions::distinct_regions;
