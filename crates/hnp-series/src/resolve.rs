//! Carry-forward year resolution.
//!
//! A country missing data in the requested year keeps showing its most
//! recent earlier reading, not a gap: the resolver overlays every data
//! year at or before the requested year, so the last year visited wins
//! per country.

use std::collections::BTreeMap;

use hnp_model::{CountryCode, IndicatorCode, Year};

use crate::error::{Result, SeriesError};
use crate::index::SeriesIndex;

/// One country's resolved reading: the value and the year it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedValue {
    pub value: f64,
    /// Year the value was recorded; at most the requested year.
    pub as_of_year: Year,
}

/// The per-country value set for one (indicator, year) query.
///
/// Ephemeral: recomputed on every query, replaced rather than mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedSnapshot {
    pub indicator: IndicatorCode,
    pub requested_year: Year,
    pub per_country: BTreeMap<CountryCode, ResolvedValue>,
    /// Running (min, max) over every value written during the overlay
    /// walk. `None` iff `per_country` is empty.
    pub value_extent: Option<(f64, f64)>,
}

/// Resolve the most-recent-known value per country as of `requested_year`.
///
/// A single ascending pass over the indicator's data years up to the
/// requested year; no per-query rescan of the full arena. A requested
/// year below every data year yields an empty snapshot, not an error.
pub fn resolve(
    index: &SeriesIndex,
    indicator: &IndicatorCode,
    requested_year: Year,
) -> Result<ResolvedSnapshot> {
    let entry = index
        .entry(indicator)
        .ok_or_else(|| SeriesError::UnknownIndicator(indicator.clone()))?;
    if entry.years_with_data().is_empty() {
        return Err(SeriesError::NoDataAvailable(indicator.clone()));
    }

    let mut per_country: BTreeMap<CountryCode, ResolvedValue> = BTreeMap::new();
    let mut value_extent: Option<(f64, f64)> = None;
    for (year, values) in entry.observations_through(index.range(), requested_year) {
        for (country, &value) in values {
            per_country.insert(
                country.clone(),
                ResolvedValue {
                    value,
                    as_of_year: year,
                },
            );
            value_extent = Some(match value_extent {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
    }

    Ok(ResolvedSnapshot {
        indicator: indicator.clone(),
        requested_year,
        per_country,
        value_extent,
    })
}
