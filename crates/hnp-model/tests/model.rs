//! Tests for hnp-model types.

use std::collections::BTreeMap;

use hnp_model::{
    CountryCode, CountryIdentity, CountryMetadata, CountryTable, IdentityTable, IndicatorCode,
    IndicatorDefinition, ObservationRow, YearRange,
};

fn country(code: &str, short_name: &str, region: &str) -> CountryMetadata {
    CountryMetadata {
        code: CountryCode::new(code).unwrap(),
        short_name: short_name.to_string(),
        long_name: short_name.to_string(),
        region: region.to_string(),
    }
}

#[test]
fn observation_row_serializes() {
    let mut row = ObservationRow::new(
        CountryCode::new("FRA").unwrap(),
        IndicatorCode::new("SP.POP.TOTL").unwrap(),
    );
    row.values_by_year.insert(1995, 58.0);

    let json = serde_json::to_string(&row).expect("serialize row");
    let round: ObservationRow = serde_json::from_str(&json).expect("deserialize row");
    assert_eq!(round, row);
    assert_eq!(round.values_by_year.get(&1995), Some(&58.0));
}

#[test]
fn identity_record_parses_feed_shape() {
    // The identity feed ships more fields than we keep; unknown keys are ignored.
    let json = r#"{"cca2":"FR","cca3":"FRA","ccn3":"250","subregion":"Western Europe","area":551695.0}"#;
    let record: CountryIdentity = serde_json::from_str(json).expect("deserialize identity");
    assert_eq!(record.cca3, "FRA");

    let table = IdentityTable::from_records([record]);
    assert_eq!(table.alpha3_for_numeric("250"), Some("FRA"));
    assert_eq!(table.by_alpha2("FR").map(|i| i.cca3.as_str()), Some("FRA"));
}

#[test]
fn identity_record_defaults_missing_subregion() {
    let json = r#"{"cca2":"AQ","cca3":"ATA","ccn3":"010"}"#;
    let record: CountryIdentity = serde_json::from_str(json).expect("deserialize identity");
    assert!(record.subregion.is_empty());
}

#[test]
fn country_table_round_trips_lookups() {
    let table = CountryTable::from_countries([
        country("USA", "United States", "North America"),
        country("FRA", "France", "Europe & Central Asia"),
    ]);
    assert_eq!(table.len(), 2);

    let fra = CountryCode::new("FRA").unwrap();
    assert_eq!(table.get(&fra).map(|c| c.region.as_str()), Some("Europe & Central Asia"));
    assert_eq!(table.code_for_short_name("France"), Some(&fra));
}

#[test]
fn indicator_definition_serializes() {
    let def = IndicatorDefinition {
        code: IndicatorCode::new("SP.POP.TOTL").unwrap(),
        name: "Population, total".to_string(),
        short_definition: String::new(),
    };
    let json = serde_json::to_string(&def).expect("serialize definition");
    let round: IndicatorDefinition = serde_json::from_str(&json).expect("deserialize definition");
    assert_eq!(round, def);
}

#[test]
fn year_range_iterates_in_order() {
    let range = YearRange::new(1990, 1993).unwrap();
    let years: Vec<_> = range.years().collect();
    assert_eq!(years, vec![1990, 1991, 1992, 1993]);
}

#[test]
fn values_by_year_keeps_sparse_years_absent() {
    let mut values = BTreeMap::new();
    values.insert(1990, 250.0);
    values.insert(2000, 280.0);
    let row = ObservationRow {
        country: CountryCode::new("USA").unwrap(),
        indicator: IndicatorCode::new("SP.POP.TOTL").unwrap(),
        values_by_year: values,
    };
    assert!(!row.values_by_year.contains_key(&1995));
    assert_eq!(row.values_by_year.len(), 2);
}
