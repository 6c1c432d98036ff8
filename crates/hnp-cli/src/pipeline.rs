//! Load-and-index pipeline shared by the CLI commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use hnp_ingest::{DataSources, LoadedSources, MapLink, ObservationLayout, link_map_countries, load_all};
use hnp_model::YearRange;
use hnp_series::SeriesIndex;

/// Everything a command needs after initialization: the loaded sources,
/// the immutable series index, and the map-geometry link table.
#[derive(Debug)]
pub struct AtlasContext {
    pub sources: LoadedSources,
    pub index: SeriesIndex,
    pub map_link: MapLink,
}

/// Load the source set and build the series index.
///
/// Initialization is all-or-nothing: a single failed source aborts with
/// an error naming it, and no index is built from partial inputs.
pub fn build_context(data_dir: &Path, range: YearRange) -> Result<AtlasContext> {
    let load_span = info_span!("load", data_dir = %data_dir.display());
    let load_start = Instant::now();
    let sources = load_span
        .in_scope(|| load_all(&DataSources::from_dir(data_dir), &ObservationLayout::default()))
        .with_context(|| format!("load data sources from {}", data_dir.display()))?;

    let map_link = link_map_countries(&sources.countries, &sources.map_countries);
    if !map_link.misses.is_empty() {
        warn!(
            misses = map_link.misses.len(),
            "map-feed names without a matching country"
        );
    }

    let index_span = info_span!("index");
    let index = index_span
        .in_scope(|| SeriesIndex::build(&sources.indicators, &sources.observations, range));

    info!(
        indicators = index.len(),
        countries = sources.countries.len(),
        elapsed_ms = load_start.elapsed().as_millis() as u64,
        "atlas context ready"
    );
    Ok(AtlasContext {
        sources,
        index,
        map_link,
    })
}

/// Parse the CLI's year bounds into a validated range.
pub fn year_range(start_year: i32, end_year: i32) -> Result<YearRange> {
    YearRange::new(start_year, end_year)
        .with_context(|| format!("invalid year range {start_year}..={end_year}"))
}
