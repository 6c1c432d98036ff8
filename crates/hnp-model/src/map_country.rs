/// Auxiliary per-country figures from the map data feed, keyed by country
/// name rather than code; linking to [`crate::CountryTable`] happens at
/// ingest time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapCountryRow {
    pub name: String,
    /// The map feed's own id for the country, used to tag geometry.
    pub map_id: String,
    pub population: f64,
    pub median_age: f64,
    pub fertility_rate: f64,
    /// Derived at ingest: population / land area.
    pub population_density: f64,
}
