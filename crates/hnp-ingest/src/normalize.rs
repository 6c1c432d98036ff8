//! Row normalizers: raw CSV rows into typed records.
//!
//! Pure transformations over a header-resolved row. Each normalizer
//! returns `Ok(Some(record))`, `Ok(None)` when the row is structurally
//! excluded from its table (aggregate entities), or
//! `Err(IngestError::MalformedRow)` when a required field fails the
//! strict parse. Callers drop malformed rows and continue.

use std::collections::BTreeSet;
use std::fmt::Display;

use hnp_model::{
    CountryCode, CountryMetadata, IndicatorCode, IndicatorDefinition, MapCountryRow,
    ObservationRow, Year,
};

use crate::error::{IngestError, Result};

/// Positional layout of the observation file.
///
/// The first `identity_columns` columns are identity/metadata; every later
/// column is keyed by the year in its header cell. Configurable so format
/// drift shows up as a load failure instead of silently corrupting the
/// year key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationLayout {
    pub identity_columns: usize,
    pub country_code_column: usize,
    pub indicator_code_column: usize,
}

impl Default for ObservationLayout {
    fn default() -> Self {
        // World Bank bulk layout: Country Name, Country Code,
        // Indicator Name, Indicator Code, 1960, 1961, ...
        Self {
            identity_columns: 4,
            country_code_column: 1,
            indicator_code_column: 3,
        }
    }
}

impl ObservationLayout {
    /// Resolve the year columns once per file from the header row.
    ///
    /// Header cells past the identity block that do not parse as years are
    /// ignored (the bulk files end with an empty trailing column).
    pub fn year_columns(&self, headers: &[String]) -> Vec<(usize, Year)> {
        headers
            .iter()
            .enumerate()
            .skip(self.identity_columns)
            .filter_map(|(idx, cell)| cell.trim().parse::<Year>().ok().map(|year| (idx, year)))
            .collect()
    }
}

/// Named columns of the country-metadata file, resolved once per file.
#[derive(Debug, Clone, Copy)]
pub struct CountryColumns {
    pub code: usize,
    pub short_name: usize,
    pub long_name: usize,
    pub region: usize,
}

impl CountryColumns {
    pub fn resolve(headers: &[String]) -> Result<Self> {
        Ok(Self {
            code: column_index(headers, "Country Code")?,
            short_name: column_index(headers, "Short Name")?,
            long_name: column_index(headers, "Long Name")?,
            region: column_index(headers, "Region")?,
        })
    }
}

/// Named columns of the series-definition file.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColumns {
    pub code: usize,
    pub name: usize,
    pub short_definition: usize,
}

impl SeriesColumns {
    pub fn resolve(headers: &[String]) -> Result<Self> {
        Ok(Self {
            code: column_index(headers, "Series Code")?,
            name: column_index(headers, "Indicator Name")?,
            short_definition: column_index(headers, "Short definition")?,
        })
    }
}

/// Named columns of the map-country file.
#[derive(Debug, Clone, Copy)]
pub struct MapCountryColumns {
    pub name: usize,
    pub map_id: usize,
    pub population: usize,
    pub median_age: usize,
    pub fertility_rate: usize,
    pub land_area: usize,
}

impl MapCountryColumns {
    pub fn resolve(headers: &[String]) -> Result<Self> {
        Ok(Self {
            name: column_index(headers, "country")?,
            map_id: column_index(headers, "id")?,
            population: column_index(headers, "population")?,
            median_age: column_index(headers, "medianAge")?,
            fertility_rate: column_index(headers, "fertilityRate")?,
            land_area: column_index(headers, "landArea")?,
        })
    }
}

pub fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
        })
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn malformed(record: u64, message: impl Display) -> IngestError {
    IngestError::MalformedRow {
        record,
        message: message.to_string(),
    }
}

fn parse_number(record: u64, name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| malformed(record, format!("non-numeric {name}: {raw:?}")))
}

/// Country rows with an empty region are aggregate entities (income
/// groups, regions, the world), not countries: skipped, not an error.
pub fn normalize_country_row(
    cols: &CountryColumns,
    record: u64,
    row: &[String],
) -> Result<Option<CountryMetadata>> {
    let region = field(row, cols.region).trim();
    if region.is_empty() {
        return Ok(None);
    }
    let code = CountryCode::new(field(row, cols.code)).map_err(|e| malformed(record, e))?;
    Ok(Some(CountryMetadata {
        code,
        short_name: field(row, cols.short_name).trim().to_string(),
        long_name: field(row, cols.long_name).trim().to_string(),
        region: region.to_string(),
    }))
}

pub fn normalize_series_row(
    cols: &SeriesColumns,
    record: u64,
    row: &[String],
) -> Result<Option<IndicatorDefinition>> {
    let code = IndicatorCode::new(field(row, cols.code)).map_err(|e| malformed(record, e))?;
    Ok(Some(IndicatorDefinition {
        code,
        name: field(row, cols.name).trim().to_string(),
        short_definition: field(row, cols.short_definition).trim().to_string(),
    }))
}

/// Observation rows for codes outside the valid-country set are aggregates
/// and skipped. Only non-empty year cells are kept: an empty cell is "no
/// observation", never zero. Non-empty cells must parse as numbers.
pub fn normalize_observation_row(
    layout: &ObservationLayout,
    year_columns: &[(usize, Year)],
    valid_countries: &BTreeSet<CountryCode>,
    record: u64,
    row: &[String],
) -> Result<Option<ObservationRow>> {
    let Ok(country) = CountryCode::new(field(row, layout.country_code_column)) else {
        // Not shaped like a country code, so it cannot be in the valid set.
        return Ok(None);
    };
    if !valid_countries.contains(&country) {
        return Ok(None);
    }
    let indicator = IndicatorCode::new(field(row, layout.indicator_code_column))
        .map_err(|e| malformed(record, e))?;

    let mut observation = ObservationRow::new(country, indicator);
    for &(idx, year) in year_columns {
        let cell = field(row, idx).trim();
        if cell.is_empty() {
            continue;
        }
        let value = parse_number(record, &format!("value for year {year}"), cell)?;
        observation.values_by_year.insert(year, value);
    }
    Ok(Some(observation))
}

pub fn normalize_map_country_row(
    cols: &MapCountryColumns,
    record: u64,
    row: &[String],
) -> Result<Option<MapCountryRow>> {
    let name = field(row, cols.name).trim();
    if name.is_empty() {
        return Ok(None);
    }
    let population = parse_number(record, "population", field(row, cols.population))?;
    let median_age = parse_number(record, "median age", field(row, cols.median_age))?;
    let fertility_rate = parse_number(record, "fertility rate", field(row, cols.fertility_rate))?;
    let land_area = parse_number(record, "land area", field(row, cols.land_area))?;
    if land_area <= 0.0 {
        return Err(malformed(record, format!("non-positive land area: {land_area}")));
    }
    Ok(Some(MapCountryRow {
        name: name.to_string(),
        map_id: field(row, cols.map_id).trim().to_string(),
        population,
        median_age,
        fertility_rate,
        population_density: population / land_area,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    fn headers(cells: &[&str]) -> Vec<String> {
        row(cells)
    }

    #[test]
    fn country_row_without_region_is_skipped() {
        let cols = CountryColumns {
            code: 0,
            short_name: 1,
            long_name: 2,
            region: 3,
        };
        let skipped =
            normalize_country_row(&cols, 1, &row(&["WLD", "World", "World", ""])).unwrap();
        assert!(skipped.is_none());

        let kept = normalize_country_row(
            &cols,
            2,
            &row(&["USA", "United States", "United States of America", "North America"]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(kept.code.as_str(), "USA");
        assert_eq!(kept.region, "North America");
    }

    #[test]
    fn year_columns_follow_the_identity_offset() {
        let layout = ObservationLayout::default();
        let header = headers(&["Country Name", "Country Code", "Indicator Name", "Indicator Code", "1960", "1961", ""]);
        let years = layout.year_columns(&header);
        assert_eq!(years, vec![(4, 1960), (5, 1961)]);

        // A narrower identity block shifts where years start.
        let narrow = ObservationLayout {
            identity_columns: 2,
            country_code_column: 0,
            indicator_code_column: 1,
        };
        let header = headers(&["Country Code", "Indicator Code", "1990", "1991"]);
        assert_eq!(narrow.year_columns(&header), vec![(2, 1990), (3, 1991)]);
    }

    #[test]
    fn observation_empty_cells_stay_absent() {
        let layout = ObservationLayout::default();
        let header = headers(&["Country Name", "Country Code", "Indicator Name", "Indicator Code", "1990", "1991", "1992"]);
        let years = layout.year_columns(&header);
        let valid: BTreeSet<_> = [CountryCode::new("USA").unwrap()].into();

        let obs = normalize_observation_row(
            &layout,
            &years,
            &valid,
            1,
            &row(&["United States", "USA", "Population, total", "SP.POP.TOTL", "250", "", "252"]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(obs.values_by_year.get(&1990), Some(&250.0));
        assert!(!obs.values_by_year.contains_key(&1991));
        assert_eq!(obs.values_by_year.get(&1992), Some(&252.0));
    }

    #[test]
    fn observation_for_aggregate_code_is_skipped() {
        let layout = ObservationLayout::default();
        let header = headers(&["Country Name", "Country Code", "Indicator Name", "Indicator Code", "1990"]);
        let years = layout.year_columns(&header);
        let valid: BTreeSet<_> = [CountryCode::new("USA").unwrap()].into();

        let skipped = normalize_observation_row(
            &layout,
            &years,
            &valid,
            1,
            &row(&["World", "WLD", "Population, total", "SP.POP.TOTL", "5000"]),
        )
        .unwrap();
        assert!(skipped.is_none());
    }

    #[test]
    fn observation_with_non_numeric_cell_is_malformed() {
        let layout = ObservationLayout::default();
        let header = headers(&["Country Name", "Country Code", "Indicator Name", "Indicator Code", "1990"]);
        let years = layout.year_columns(&header);
        let valid: BTreeSet<_> = [CountryCode::new("USA").unwrap()].into();

        let err = normalize_observation_row(
            &layout,
            &years,
            &valid,
            7,
            &row(&["United States", "USA", "Population, total", "SP.POP.TOTL", "n/a"]),
        )
        .unwrap_err();
        assert!(err.is_malformed_row());
    }

    #[test]
    fn map_country_density_is_derived() {
        let cols = MapCountryColumns {
            name: 0,
            map_id: 1,
            population: 2,
            median_age: 3,
            fertility_rate: 4,
            land_area: 5,
        };
        let kept = normalize_map_country_row(
            &cols,
            1,
            &row(&["France", "250", "67000000", "41.4", "1.9", "547557"]),
        )
        .unwrap()
        .unwrap();
        assert!((kept.population_density - 67_000_000.0 / 547_557.0).abs() < 1e-9);

        let err = normalize_map_country_row(
            &cols,
            2,
            &row(&["Nowhere", "999", "1000", "30", "2.0", "0"]),
        )
        .unwrap_err();
        assert!(err.is_malformed_row());
    }
}
