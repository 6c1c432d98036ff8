use std::collections::{BTreeMap, BTreeSet};

use crate::CountryCode;

/// One country from the country-metadata feed. Rows without a region are
/// aggregates (income groups, regions, the world) and never reach this type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountryMetadata {
    pub code: CountryCode,
    pub short_name: String,
    pub long_name: String,
    pub region: String,
}

/// Countries keyed by alpha-3 code, with a secondary short-name lookup
/// used to link map-feed rows that carry names instead of codes.
#[derive(Debug, Default, Clone)]
pub struct CountryTable {
    by_code: BTreeMap<CountryCode, CountryMetadata>,
    code_by_short_name: BTreeMap<String, CountryCode>,
}

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_countries(countries: impl IntoIterator<Item = CountryMetadata>) -> Self {
        let mut table = Self::new();
        for country in countries {
            table.insert(country);
        }
        table
    }

    pub fn insert(&mut self, country: CountryMetadata) {
        self.code_by_short_name
            .insert(country.short_name.clone(), country.code.clone());
        self.by_code.insert(country.code.clone(), country);
    }

    pub fn get(&self, code: &CountryCode) -> Option<&CountryMetadata> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.by_code.contains_key(code)
    }

    /// Lookup by the feed's short name (e.g. "United States" -> USA).
    pub fn code_for_short_name(&self, short_name: &str) -> Option<&CountryCode> {
        self.code_by_short_name.get(short_name)
    }

    /// The set of codes that count as real countries. Observation rows for
    /// codes outside this set are aggregate entities and are dropped.
    pub fn valid_codes(&self) -> BTreeSet<CountryCode> {
        self.by_code.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryMetadata> {
        self.by_code.values()
    }
}
