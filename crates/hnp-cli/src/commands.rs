//! Command implementations: load, index, resolve, print.

use anyhow::{Context, Result};

use hnp_cli::pipeline::{build_context, year_range};
use hnp_model::IndicatorCode;
use hnp_series::{SeriesError, resolve};

use crate::cli::{IndicatorsArgs, OutputFormatArg, ResolveArgs, YearsArgs};
use crate::summary::{print_indicator_table, print_snapshot_table, print_years};

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let range = year_range(args.data.start_year, args.data.end_year)?;
    let context = build_context(&args.data.data_dir, range)?;
    let indicator = IndicatorCode::new(&args.indicator).context("parse indicator code")?;

    let snapshot = resolve(&context.index, &indicator, args.year)?;
    match args.format {
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?;
            println!("{json}");
        }
        OutputFormatArg::Table => {
            let name = context
                .index
                .entry(&indicator)
                .map(|entry| entry.name().to_string())
                .unwrap_or_default();
            print_snapshot_table(&snapshot, &context.sources.countries, &name);
        }
    }
    Ok(())
}

pub fn run_years(args: &YearsArgs) -> Result<()> {
    let range = year_range(args.data.start_year, args.data.end_year)?;
    let context = build_context(&args.data.data_dir, range)?;
    let indicator = IndicatorCode::new(&args.indicator).context("parse indicator code")?;

    let entry = context
        .index
        .entry(&indicator)
        .ok_or_else(|| SeriesError::UnknownIndicator(indicator.clone()))?;
    print_years(&indicator, entry.name(), entry.years_with_data());
    Ok(())
}

pub fn run_indicators(args: &IndicatorsArgs) -> Result<()> {
    let range = year_range(args.data.start_year, args.data.end_year)?;
    let context = build_context(&args.data.data_dir, range)?;
    print_indicator_table(&context.index);
    Ok(())
}
