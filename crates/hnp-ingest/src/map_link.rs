//! Linking map-feed rows to countries.
//!
//! The map feed carries country names, not codes. Resolve each name
//! through the country table's short-name lookup and collect the names
//! that fail to match; misses are reported to the caller, never fatal.

use std::collections::BTreeMap;

use tracing::debug;

use hnp_model::{CountryCode, CountryTable, MapCountryRow};

/// Result of resolving map-feed names against the country table.
#[derive(Debug, Default, Clone)]
pub struct MapLink {
    /// Country code -> the map feed's id for that country's geometry.
    pub map_id_by_code: BTreeMap<CountryCode, String>,
    /// Map-feed names with no matching country short name.
    pub misses: Vec<String>,
}

pub fn link_map_countries(countries: &CountryTable, rows: &[MapCountryRow]) -> MapLink {
    let mut link = MapLink::default();
    for row in rows {
        match countries.code_for_short_name(&row.name) {
            Some(code) => {
                link.map_id_by_code.insert(code.clone(), row.map_id.clone());
            }
            None => link.misses.push(row.name.clone()),
        }
    }
    debug!(
        linked = link.map_id_by_code.len(),
        misses = link.misses.len(),
        "map countries linked"
    );
    link
}
