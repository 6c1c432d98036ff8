//! Snapshot projection for rendering consumers.
//!
//! The keyed mapping is the snapshot's native shape (per-country fill
//! lookup during map rendering); the ordered list serves tabular and
//! bar-chart consumers.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use hnp_model::{CountryCode, CountryMetadata, CountryTable, Year};

use crate::resolve::{ResolvedSnapshot, ResolvedValue};

/// Row of the ordered projection, carrying the country metadata the
/// rendering layer needs for labels and tooltips.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedCountry<'a> {
    pub code: CountryCode,
    /// Metadata when the country is known to the country table.
    pub info: Option<&'a CountryMetadata>,
    pub value: f64,
    pub as_of_year: Year,
}

/// The snapshot keyed by country code.
pub fn as_mapping(snapshot: &ResolvedSnapshot) -> &BTreeMap<CountryCode, ResolvedValue> {
    &snapshot.per_country
}

/// The snapshot as a list sorted ascending by value.
///
/// The sort is stable, so countries with equal values keep their
/// country-code iteration order. An empty snapshot yields an empty list.
pub fn as_ordered_list<'a>(
    snapshot: &ResolvedSnapshot,
    countries: &'a CountryTable,
) -> Vec<RankedCountry<'a>> {
    let mut list: Vec<RankedCountry<'a>> = snapshot
        .per_country
        .iter()
        .map(|(code, resolved)| RankedCountry {
            code: code.clone(),
            info: countries.get(code),
            value: resolved.value,
            as_of_year: resolved.as_of_year,
        })
        .collect();
    list.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    list
}
