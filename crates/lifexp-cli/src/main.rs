//! Life expectancy cleaner CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use lifexp_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_clean_command, run_regions_command};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Clean(args) => run_clean_command(args).map(|result| print_summary(&result)),
        Command::Regions(args) => run_regions_command(args),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags; `--log-level` beats `-v`/`-q`, which beat `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifexp_cli::pipeline::resolve_region;
    use lifexp_model::Region;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("lifexp").chain(args.iter().copied()))
    }

    fn clean_args(parsed: Cli) -> cli::CleanArgs {
        match parsed.command {
            Command::Clean(args) => args,
            Command::Regions(_) => panic!("expected the clean command"),
        }
    }

    #[test]
    fn explicit_format_requires_region() {
        let error = parse(&["clean", "-i", "x.tsv", "-o", "o.csv", "--format", "tsv"])
            .err()
            .expect("missing region must be rejected");
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let args = clean_args(
            parse(&["clean", "-i", "x.tsv", "-o", "o.csv", "--format", "tsv", "--region", "fr"])
                .unwrap(),
        );
        assert_eq!(resolve_region(args.region.as_deref()).unwrap(), Region::Fr);
    }

    #[test]
    fn region_defaults_to_portugal_without_format() {
        let args = clean_args(parse(&["clean", "-i", "x.tsv", "-o", "o.csv"]).unwrap());
        assert!(args.format.is_none());
        assert_eq!(resolve_region(args.region.as_deref()).unwrap(), Region::Pt);
    }

    #[test]
    fn output_required_unless_dry_run() {
        let error = parse(&["clean", "-i", "x.tsv"])
            .err()
            .expect("missing output must be rejected");
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let args = clean_args(parse(&["clean", "-i", "x.tsv", "--dry-run"]).unwrap());
        assert!(args.dry_run);
        assert!(args.output.is_none());
    }

    #[test]
    fn columns_split_on_commas() {
        let args = clean_args(
            parse(&["clean", "-i", "x.tsv", "-o", "o.csv", "--columns", "region,year,value"])
                .unwrap(),
        );
        assert_eq!(
            args.columns,
            Some(vec![
                "region".to_string(),
                "year".to_string(),
                "value".to_string()
            ])
        );
    }

    #[test]
    fn log_level_disables_env_filter() {
        let cli = parse(&["--log-level", "debug", "clean", "-i", "x.tsv", "--dry-run"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(!config.with_timestamps);
    }

    #[test]
    fn timestamp_and_target_flags_reach_log_config() {
        let cli = parse(&["clean", "-i", "x.tsv", "--dry-run", "--log-timestamps", "--log-target"])
            .unwrap();
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(config.use_env_filter);
    }
}
