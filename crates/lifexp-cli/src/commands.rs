use anyhow::Result;
use tracing::debug;

use lifexp_cli::pipeline::{
    CleanRequest, CleanResult, dataset_regions, resolve_format, resolve_region, run_clean,
};
use lifexp_model::{PipelineOptions, Region};

use crate::cli::{CleanArgs, RegionsArgs};
use crate::summary::{print_country_table, print_dataset_regions};

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanResult> {
    // Region and format are checked before any file is opened.
    let region = resolve_region(args.region.as_deref())?;
    let format = resolve_format(args.format.as_deref(), &args.input)?;

    let mut options = PipelineOptions::default().with_region_column(args.region_column.as_str());
    if let Some(columns) = &args.columns {
        let columns = columns
            .iter()
            .map(|column| column.trim().to_string())
            .filter(|column| !column.is_empty())
            .collect();
        options = options.with_output_columns(columns);
    }
    debug!(?options, %region, %format, dry_run = args.dry_run, "resolved clean request");

    let request = CleanRequest {
        input: args.input.clone(),
        output: if args.dry_run {
            None
        } else {
            args.output.clone()
        },
        region,
        format,
        options,
    };
    run_clean(&request)
}

pub fn run_regions_command(args: &RegionsArgs) -> Result<()> {
    match &args.input {
        Some(path) => {
            let format = resolve_format(args.format.as_deref(), path)?;
            let regions = dataset_regions(path, format)?;
            print_dataset_regions(&regions);
        }
        None => print_country_table(&Region::list_all_countries()),
    }
    Ok(())
}
