//! Load, clean and save orchestration shared by the binary and its tests.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use lifexp_ingest::{distinct_regions, load};
use lifexp_model::{InputFormat, PipelineOptions, Region};
use lifexp_output::save_data;
use lifexp_transform::{CleanStats, clean_data};

/// A fully validated clean run.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Destination file; `None` skips the save stage.
    pub output: Option<PathBuf>,
    pub region: Region,
    pub format: InputFormat,
    pub options: PipelineOptions,
}

/// What a clean run produced.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub region: Region,
    pub format: InputFormat,
    pub stats: CleanStats,
    /// Rows of the requested region.
    pub rows: usize,
    /// The cleaned table, kept for callers that inspect it.
    pub data: DataFrame,
}

/// Picks the input format from an explicit name, else from the input extension.
///
/// # Errors
///
/// Returns an error when the name or extension is not a supported format.
pub fn resolve_format(explicit: Option<&str>, input: &Path) -> Result<InputFormat> {
    let format = match explicit {
        Some(name) => name.parse::<InputFormat>()?,
        None => InputFormat::from_path(input)
            .with_context(|| format!("cannot infer input format of {}", input.display()))?,
    };
    Ok(format)
}

/// Picks the target region; Portugal when none is given.
///
/// # Errors
///
/// Returns an error when the code is not a known region.
pub fn resolve_region(explicit: Option<&str>) -> Result<Region> {
    match explicit {
        Some(code) => Ok(code.parse::<Region>()?),
        None => Ok(Region::default()),
    }
}

/// Runs load, clean and (unless no output is set) save.
///
/// # Errors
///
/// Returns the first stage error; nothing is written when any stage fails.
pub fn run_clean(request: &CleanRequest) -> Result<CleanResult> {
    let span = info_span!(
        "pipeline",
        input = %request.input.display(),
        region = %request.region,
        format = %request.format
    );
    let _guard = span.enter();
    let start = Instant::now();

    let raw = load(&request.input, request.format, &request.options)
        .with_context(|| format!("load {}", request.input.display()))?;
    let outcome = clean_data(&raw, request.region, &request.options).context("clean data")?;
    if let Some(path) = &request.output {
        save_data(&outcome.data, path, &request.options)
            .with_context(|| format!("save {}", path.display()))?;
    }

    info!(
        rows = outcome.rows(),
        dropped = outcome.stats.dropped,
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(CleanResult {
        input: request.input.clone(),
        output: request.output.clone(),
        region: request.region,
        format: request.format,
        stats: outcome.stats,
        rows: outcome.rows(),
        data: outcome.data,
    })
}

/// Distinct region values present in a raw file.
///
/// # Errors
///
/// Returns an error when the file cannot be loaded.
pub fn dataset_regions(path: &Path, format: InputFormat) -> Result<Vec<String>> {
    let options = PipelineOptions::default();
    let raw = load(path, format, &options).with_context(|| format!("load {}", path.display()))?;
    Ok(distinct_regions(&raw, &options.region_column)?)
}
