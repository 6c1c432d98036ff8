//! Geographic identity records: alternate country-code representations.
//!
//! The world-map topology keys countries by numeric code and the country
//! JSON feed by alpha-2, while the statistical feeds use alpha-3. This
//! table maps the alternates to the common alpha-3 key. Built once at
//! load time and read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};

/// One country from the identity feed, carrying every code representation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CountryIdentity {
    /// ISO 3166-1 alpha-2 (e.g. "US").
    pub cca2: String,
    /// ISO 3166-1 alpha-3 (e.g. "USA").
    pub cca3: String,
    /// ISO 3166-1 numeric, zero-padded string as the feed ships it (e.g.
    /// "840"). Empty for entities without an assigned numeric code.
    #[serde(default)]
    pub ccn3: String,
    /// Geographic subregion (e.g. "Northern America"). May be empty.
    #[serde(default)]
    pub subregion: String,
}

/// Read-only lookup from alpha-2 and numeric codes to identity records.
#[derive(Debug, Default, Clone)]
pub struct IdentityTable {
    by_alpha2: BTreeMap<String, CountryIdentity>,
    by_numeric: BTreeMap<String, CountryIdentity>,
    subregions: BTreeSet<String>,
}

impl IdentityTable {
    pub fn from_records(records: impl IntoIterator<Item = CountryIdentity>) -> Self {
        let mut table = Self::default();
        for record in records {
            if !record.subregion.is_empty() {
                table.subregions.insert(record.subregion.clone());
            }
            if !record.cca2.is_empty() {
                table
                    .by_alpha2
                    .insert(record.cca2.clone(), record.clone());
            }
            if !record.ccn3.is_empty() {
                table.by_numeric.insert(record.ccn3.clone(), record);
            }
        }
        table
    }

    pub fn by_alpha2(&self, code: &str) -> Option<&CountryIdentity> {
        self.by_alpha2.get(code)
    }

    pub fn by_numeric(&self, code: &str) -> Option<&CountryIdentity> {
        self.by_numeric.get(code)
    }

    /// Alpha-3 key for a numeric map-topology id, the common join used to
    /// attach resolved values to map geometry.
    pub fn alpha3_for_numeric(&self, code: &str) -> Option<&str> {
        self.by_numeric.get(code).map(|i| i.cca3.as_str())
    }

    pub fn subregions(&self) -> impl Iterator<Item = &str> {
        self.subregions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_numeric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_numeric.is_empty()
    }
}
