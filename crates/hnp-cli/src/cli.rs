//! CLI argument definitions for the HNP atlas.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hnp-atlas",
    version,
    about = "HNP Atlas - Query World Bank health and population indicators by country and year",
    long_about = "Build a series index from the World Bank Health, Nutrition, and Population\n\
                  bundle and resolve per-country snapshots with carry-forward semantics:\n\
                  a country missing data in the requested year shows its most recent\n\
                  earlier reading."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one (indicator, year) snapshot and print it.
    Resolve(ResolveArgs),

    /// List the years with data for one indicator.
    Years(YearsArgs),

    /// List every indicator in the data set.
    Indicators(IndicatorsArgs),
}

/// Arguments shared by every data-loading command.
#[derive(Args)]
pub struct DataArgs {
    /// Path to the data directory holding the HNP bundle
    /// (HNP_StatsCountry.csv, HNP_StatsSeries.csv, HNP_StatsData.csv,
    /// country_data.csv, countries.json).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// First year of the supported range.
    #[arg(long = "start-year", default_value_t = 1960)]
    pub start_year: i32,

    /// Last year of the supported range.
    #[arg(long = "end-year", default_value_t = 2017)]
    pub end_year: i32,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Indicator (series) code to resolve, e.g. SP.POP.TOTL.
    #[arg(long = "indicator", value_name = "CODE")]
    pub indicator: String,

    /// Year to resolve the snapshot for.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: i32,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct YearsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Indicator (series) code to list years for.
    #[arg(long = "indicator", value_name = "CODE")]
    pub indicator: String,
}

#[derive(Args)]
pub struct IndicatorsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable table.
    Table,
    /// Snapshot JSON for the rendering layer.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
