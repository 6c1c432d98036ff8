//! The source set behind one all-or-nothing load barrier.
//!
//! The atlas needs all five inputs before the series index can be built.
//! If any single source fails to load, the whole initialization fails: a
//! partial index would silently produce misleading carry-forward results.

use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::info;

use hnp_model::{
    CountryIdentity, CountryTable, IdentityTable, IndicatorDefinition, MapCountryRow,
    ObservationRow,
};

use crate::csv_ingest::{
    read_country_metadata, read_indicator_definitions, read_map_countries, read_observations,
};
use crate::error::{IngestError, Result};
use crate::normalize::ObservationLayout;

/// Paths of the five inputs.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub country_metadata: PathBuf,
    pub series_definitions: PathBuf,
    pub observations: PathBuf,
    pub map_countries: PathBuf,
    pub country_identities: PathBuf,
}

impl DataSources {
    /// Conventional layout under one data directory, matching the upstream
    /// HNP bundle's file names.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            country_metadata: dir.join("HNP_StatsCountry.csv"),
            series_definitions: dir.join("HNP_StatsSeries.csv"),
            observations: dir.join("HNP_StatsData.csv"),
            map_countries: dir.join("country_data.csv"),
            country_identities: dir.join("countries.json"),
        }
    }
}

/// Everything the index builder needs, loaded and normalized.
#[derive(Debug)]
pub struct LoadedSources {
    pub countries: CountryTable,
    pub indicators: Vec<IndicatorDefinition>,
    pub observations: Vec<ObservationRow>,
    pub map_countries: Vec<MapCountryRow>,
    pub identities: IdentityTable,
}

/// Read the country-identity JSON feed.
pub fn read_country_identities(path: &Path) -> Result<IdentityTable> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let records: Vec<CountryIdentity> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(IdentityTable::from_records(records))
}

/// Load every source or fail. No partial-data fallback.
pub fn load_all(sources: &DataSources, layout: &ObservationLayout) -> Result<LoadedSources> {
    let countries = read_country_metadata(&sources.country_metadata)?;
    let indicators = read_indicator_definitions(&sources.series_definitions)?;
    let identities = read_country_identities(&sources.country_identities)?;
    let map_countries = read_map_countries(&sources.map_countries)?;

    let valid_countries = countries.valid_codes();
    let observations = read_observations(&sources.observations, layout, &valid_countries)?;

    info!(
        countries = countries.len(),
        indicators = indicators.len(),
        observations = observations.len(),
        map_countries = map_countries.len(),
        identities = identities.len(),
        "all sources loaded"
    );
    Ok(LoadedSources {
        countries,
        indicators,
        observations,
        map_countries,
        identities,
    })
}
