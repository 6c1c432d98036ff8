use std::collections::BTreeMap;

use crate::{CountryCode, IndicatorCode, Year};

/// One source row: every reported value for one (country, indicator) pair.
///
/// Years without a reported value are absent from `values_by_year`,
/// never present with a null or zero placeholder.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObservationRow {
    pub country: CountryCode,
    pub indicator: IndicatorCode,
    pub values_by_year: BTreeMap<Year, f64>,
}

impl ObservationRow {
    pub fn new(country: CountryCode, indicator: IndicatorCode) -> Self {
        Self {
            country,
            indicator,
            values_by_year: BTreeMap::new(),
        }
    }
}
