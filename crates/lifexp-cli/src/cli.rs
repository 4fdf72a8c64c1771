//! CLI argument definitions for the life expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifexp",
    version,
    about = "Clean Eurostat life expectancy data for a single region",
    long_about = "Reshape the Eurostat life expectancy extract from one column per year\n\
                  to one row per observation, drop cells without a numeric value and\n\
                  keep the rows of a single region.\n\n\
                  Reads the TSV bulk download or a JSON array of records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw extract and save the rows of one region.
    Clean(CleanArgs),

    /// List supported countries, or the regions present in a dataset.
    Regions(RegionsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw life expectancy file (TSV bulk download or JSON records).
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Destination CSV file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        required_unless_present = "dry_run"
    )]
    pub output: Option<PathBuf>,

    /// Region code to keep (case-insensitive, default: PT).
    ///
    /// Required when --format is given.
    #[arg(short = 'c', long = "region", visible_alias = "country", value_name = "CODE")]
    pub region: Option<String>,

    /// Input format: tsv, csv or json (default: inferred from the extension).
    #[arg(short = 'f', long = "format", value_name = "FORMAT", requires = "region")]
    pub format: Option<String>,

    /// Name of the region column in the output.
    #[arg(long = "region-column", value_name = "NAME", default_value = "region")]
    pub region_column: String,

    /// Comma-separated output columns (default: all).
    #[arg(long = "columns", value_name = "COLUMNS", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Run the pipeline and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// List the distinct regions found in this file instead of the supported countries.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Input format: tsv, csv or json (default: inferred from the extension).
    #[arg(short = 'f', long = "format", value_name = "FORMAT", requires = "input")]
    pub format: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
