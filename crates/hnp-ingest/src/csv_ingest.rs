//! CSV file readers over the row normalizers.
//!
//! File-level failures (missing file, broken CSV structure) propagate and
//! abort the load; malformed rows are logged, counted, and dropped.

use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use hnp_model::{CountryCode, CountryTable, IndicatorDefinition, MapCountryRow, ObservationRow};

use crate::error::{IngestError, Result};
use crate::normalize::{
    CountryColumns, MapCountryColumns, ObservationLayout, SeriesColumns, normalize_country_row,
    normalize_map_country_row, normalize_observation_row, normalize_series_row,
};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            source: e,
        })
}

fn read_headers(path: &Path, reader: &mut csv::Reader<std::fs::File>) -> Result<Vec<String>> {
    let headers = reader.headers().map_err(|e| IngestError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(headers.iter().map(normalize_header).collect())
}

fn read_row(path: &Path, record: std::result::Result<csv::StringRecord, csv::Error>) -> Result<Vec<String>> {
    let record = record.map_err(|e| IngestError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(record.iter().map(|cell| cell.trim().to_string()).collect())
}

/// Read the country-metadata file into a [`CountryTable`]. Aggregate rows
/// (empty region) are skipped.
pub fn read_country_metadata(path: &Path) -> Result<CountryTable> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(path, &mut reader)?;
    let cols = CountryColumns::resolve(&headers)?;

    let mut table = CountryTable::new();
    let mut skipped = 0usize;
    let mut malformed = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let row = read_row(path, record)?;
        match normalize_country_row(&cols, idx as u64 + 1, &row) {
            Ok(Some(country)) => table.insert(country),
            Ok(None) => skipped += 1,
            Err(err) if err.is_malformed_row() => {
                warn!(source = %path.display(), %err, "dropping malformed country row");
                malformed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        source = %path.display(),
        kept = table.len(),
        skipped,
        malformed,
        "country metadata loaded"
    );
    Ok(table)
}

/// Read the series-definition file.
pub fn read_indicator_definitions(path: &Path) -> Result<Vec<IndicatorDefinition>> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(path, &mut reader)?;
    let cols = SeriesColumns::resolve(&headers)?;

    let mut definitions = Vec::new();
    let mut malformed = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let row = read_row(path, record)?;
        match normalize_series_row(&cols, idx as u64 + 1, &row) {
            Ok(Some(definition)) => definitions.push(definition),
            Ok(None) => {}
            Err(err) if err.is_malformed_row() => {
                warn!(source = %path.display(), %err, "dropping malformed series row");
                malformed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        source = %path.display(),
        kept = definitions.len(),
        malformed,
        "indicator definitions loaded"
    );
    Ok(definitions)
}

/// Read the observation file, keeping only rows for valid country codes.
pub fn read_observations(
    path: &Path,
    layout: &ObservationLayout,
    valid_countries: &BTreeSet<CountryCode>,
) -> Result<Vec<ObservationRow>> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(path, &mut reader)?;
    let year_columns = layout.year_columns(&headers);
    if year_columns.is_empty() {
        warn!(
            source = %path.display(),
            identity_columns = layout.identity_columns,
            "no year columns found past the identity block; header layout may have drifted"
        );
    }

    let mut observations = Vec::new();
    let mut skipped = 0usize;
    let mut malformed = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let row = read_row(path, record)?;
        match normalize_observation_row(layout, &year_columns, valid_countries, idx as u64 + 1, &row)
        {
            Ok(Some(observation)) => observations.push(observation),
            Ok(None) => skipped += 1,
            Err(err) if err.is_malformed_row() => {
                warn!(source = %path.display(), %err, "dropping malformed observation row");
                malformed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        source = %path.display(),
        kept = observations.len(),
        skipped,
        malformed,
        years = year_columns.len(),
        "observations loaded"
    );
    Ok(observations)
}

/// Read the auxiliary map-country file.
pub fn read_map_countries(path: &Path) -> Result<Vec<MapCountryRow>> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(path, &mut reader)?;
    let cols = MapCountryColumns::resolve(&headers)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut malformed = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let row = read_row(path, record)?;
        match normalize_map_country_row(&cols, idx as u64 + 1, &row) {
            Ok(Some(map_row)) => rows.push(map_row),
            Ok(None) => skipped += 1,
            Err(err) if err.is_malformed_row() => {
                warn!(source = %path.display(), %err, "dropping malformed map-country row");
                malformed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        source = %path.display(),
        kept = rows.len(),
        skipped,
        malformed,
        "map countries loaded"
    );
    Ok(rows)
}
