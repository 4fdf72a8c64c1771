//! Format-specific loading behind a common interface.

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::info;

use lifexp_model::{InputFormat, PipelineOptions};

use crate::error::Result;
use crate::json::JsonStrategy;
use crate::tsv::TsvStrategy;

/// Loads a raw dataset into the wide table shape.
///
/// Implementations must produce `String` columns `unit`, `sex`, `age` and
/// `options.region_column`, followed by one column per year in source order.
pub trait LoadStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn load(&self, path: &Path, options: &PipelineOptions) -> Result<DataFrame>;
}

/// Returns the strategy for an input format.
pub fn strategy_for(format: InputFormat) -> Box<dyn LoadStrategy> {
    match format {
        InputFormat::Tsv => Box::new(TsvStrategy),
        InputFormat::Json => Box::new(JsonStrategy),
    }
}

/// Loads `path` with the strategy matching `format`.
pub fn load(path: &Path, format: InputFormat, options: &PipelineOptions) -> Result<DataFrame> {
    let strategy = strategy_for(format);
    let start = Instant::now();
    let df = strategy.load(path, options)?;
    info!(
        path = %path.display(),
        strategy = strategy.name(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "loaded wide table"
    );
    Ok(df)
}
