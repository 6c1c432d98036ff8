//! Property tests for resolution and projection.

use std::collections::BTreeMap;

use proptest::prelude::*;

use hnp_model::{CountryCode, IndicatorCode, IndicatorDefinition, ObservationRow, Year, YearRange};
use hnp_series::{SeriesError, SeriesIndex, as_ordered_list, resolve};

fn pop() -> IndicatorCode {
    IndicatorCode::new("POP").unwrap()
}

/// Synthetic alpha-3 code for the n-th generated country.
fn country_code(n: usize) -> CountryCode {
    let second = b'A' + (n / 26) as u8;
    let third = b'A' + (n % 26) as u8;
    CountryCode::new(format!("Z{}{}", second as char, third as char)).unwrap()
}

fn build_index(per_country: &[BTreeMap<Year, f64>]) -> SeriesIndex {
    let definitions = vec![IndicatorDefinition {
        code: pop(),
        name: "Population".to_string(),
        short_definition: String::new(),
    }];
    let rows: Vec<ObservationRow> = per_country
        .iter()
        .enumerate()
        .map(|(n, values)| ObservationRow {
            country: country_code(n),
            indicator: pop(),
            values_by_year: values.clone(),
        })
        .collect();
    SeriesIndex::build(&definitions, &rows, YearRange::new(1960, 2010).unwrap())
}

fn values_strategy() -> impl Strategy<Value = Vec<BTreeMap<Year, f64>>> {
    prop::collection::vec(
        prop::collection::btree_map(1960..2000i32, -1e6..1e6f64, 0..10),
        1..5,
    )
}

proptest! {
    #[test]
    fn as_of_year_is_monotonic_in_the_requested_year(values in prop::collection::btree_map(1960..2000i32, -1e6..1e6f64, 1..20)) {
        let index = build_index(std::slice::from_ref(&values));
        let code = country_code(0);
        let mut last: Option<Year> = None;
        for year in 1960..=2010 {
            let snapshot = resolve(&index, &pop(), year).unwrap();
            match snapshot.per_country.get(&code) {
                Some(resolved) => {
                    prop_assert!(resolved.as_of_year <= year);
                    if let Some(previous) = last {
                        prop_assert!(resolved.as_of_year >= previous);
                    }
                    last = Some(resolved.as_of_year);
                }
                // Once a country has resolved, it stays resolved at
                // every later year.
                None => prop_assert!(last.is_none()),
            }
        }
    }

    #[test]
    fn extent_bounds_every_resolved_value(values in values_strategy(), year in 1960..=2010i32) {
        let total: usize = values.iter().map(BTreeMap::len).sum();
        let index = build_index(&values);

        let result = resolve(&index, &pop(), year);
        if total == 0 {
            prop_assert_eq!(result.unwrap_err(), SeriesError::NoDataAvailable(pop()));
            return Ok(());
        }

        let snapshot = result.unwrap();
        match snapshot.value_extent {
            Some((lo, hi)) => {
                prop_assert!(lo <= hi);
                prop_assert!(!snapshot.per_country.is_empty());
                for resolved in snapshot.per_country.values() {
                    prop_assert!(lo <= resolved.value && resolved.value <= hi);
                }
            }
            None => prop_assert!(snapshot.per_country.is_empty()),
        }
    }

    #[test]
    fn ordered_list_is_always_ascending(values in values_strategy(), year in 1960..=2010i32) {
        let total: usize = values.iter().map(BTreeMap::len).sum();
        prop_assume!(total > 0);
        let index = build_index(&values);
        let countries = hnp_model::CountryTable::new();

        let snapshot = resolve(&index, &pop(), year).unwrap();
        let list = as_ordered_list(&snapshot, &countries);
        prop_assert_eq!(list.len(), snapshot.per_country.len());
        for pair in list.windows(2) {
            prop_assert!(pair[0].value <= pair[1].value);
        }
    }
}
