//! The series index: indicator -> year -> country -> value.
//!
//! Built once after all observation rows are loaded, immutable afterwards.
//! Each indicator owns a dense per-year arena indexed by `year - start`,
//! so year slots exist for the whole configured range even when empty and
//! "does this indicator exist" queries never fail.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use hnp_model::{CountryCode, IndicatorCode, IndicatorDefinition, ObservationRow, Year, YearRange};

/// Per-indicator slice of the index.
#[derive(Debug, Clone)]
pub struct SeriesEntry {
    name: String,
    /// Slot `year - range.start` holds that year's country -> value map.
    by_year: Vec<BTreeMap<CountryCode, f64>>,
    /// Ascending years with at least one observation. Compacted once at
    /// build time; a year is listed iff its slot is non-empty.
    years_with_data: Vec<Year>,
}

impl SeriesEntry {
    /// Human-readable indicator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn years_with_data(&self) -> &[Year] {
        &self.years_with_data
    }

    pub(crate) fn values_at_offset(&self, offset: usize) -> &BTreeMap<CountryCode, f64> {
        &self.by_year[offset]
    }

    /// Data years at or before `requested_year`, ascending, each with its
    /// country -> value map.
    pub(crate) fn observations_through(
        &self,
        range: YearRange,
        requested_year: Year,
    ) -> impl Iterator<Item = (Year, &BTreeMap<CountryCode, f64>)> {
        self.years_with_data
            .iter()
            .copied()
            .take_while(move |&year| year <= requested_year)
            .filter_map(move |year| {
                range
                    .offset_of(year)
                    .map(|offset| (year, self.values_at_offset(offset)))
            })
    }
}

/// The queryable index over every indicator.
#[derive(Debug, Clone)]
pub struct SeriesIndex {
    range: YearRange,
    entries: BTreeMap<IndicatorCode, SeriesEntry>,
}

impl SeriesIndex {
    /// Build the index from normalized definitions and observation rows.
    ///
    /// Observations for indicators absent from the definitions, or for
    /// years outside `range`, are counted and skipped with a warning. A
    /// duplicate country/indicator/year triple with a different value is
    /// a data-integrity signal: logged, and the later value wins.
    pub fn build(
        definitions: &[IndicatorDefinition],
        rows: &[ObservationRow],
        range: YearRange,
    ) -> Self {
        let mut entries: BTreeMap<IndicatorCode, SeriesEntry> = definitions
            .iter()
            .map(|definition| {
                (
                    definition.code.clone(),
                    SeriesEntry {
                        name: definition.name.clone(),
                        by_year: vec![BTreeMap::new(); range.len()],
                        years_with_data: Vec::new(),
                    },
                )
            })
            .collect();

        let mut unknown_indicators = 0usize;
        let mut out_of_range = 0usize;
        let mut duplicates = 0usize;
        for row in rows {
            let Some(entry) = entries.get_mut(&row.indicator) else {
                warn!(
                    indicator = %row.indicator,
                    country = %row.country,
                    "observation row for undefined indicator; skipping"
                );
                unknown_indicators += 1;
                continue;
            };
            for (&year, &value) in &row.values_by_year {
                let Some(offset) = range.offset_of(year) else {
                    warn!(
                        indicator = %row.indicator,
                        country = %row.country,
                        year,
                        "observation outside the configured year range; skipping"
                    );
                    out_of_range += 1;
                    continue;
                };
                let previous = entry.by_year[offset].insert(row.country.clone(), value);
                if let Some(previous) = previous
                    && previous != value
                {
                    warn!(
                        indicator = %row.indicator,
                        country = %row.country,
                        year,
                        previous,
                        value,
                        "duplicate observation with a different value; keeping the later one"
                    );
                    duplicates += 1;
                }
            }
        }

        // Final one-time compaction. The resolver relies on this list and
        // never rescans the arena per query.
        for entry in entries.values_mut() {
            entry.years_with_data = (0..range.len())
                .filter(|&offset| !entry.by_year[offset].is_empty())
                .filter_map(|offset| range.year_at(offset))
                .collect();
        }

        debug!(
            indicators = entries.len(),
            unknown_indicators,
            out_of_range,
            duplicates,
            "series index built"
        );
        Self { range, entries }
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn contains(&self, indicator: &IndicatorCode) -> bool {
        self.entries.contains_key(indicator)
    }

    pub fn entry(&self, indicator: &IndicatorCode) -> Option<&SeriesEntry> {
        self.entries.get(indicator)
    }

    /// Valid years for one indicator: the year-selector feed.
    pub fn years_with_data(&self, indicator: &IndicatorCode) -> Option<&[Year]> {
        self.entries
            .get(indicator)
            .map(SeriesEntry::years_with_data)
    }

    /// All indicators in code order.
    pub fn indicators(&self) -> impl Iterator<Item = (&IndicatorCode, &SeriesEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(code: &str, name: &str) -> IndicatorDefinition {
        IndicatorDefinition {
            code: IndicatorCode::new(code).unwrap(),
            name: name.to_string(),
            short_definition: String::new(),
        }
    }

    fn observation(country: &str, indicator: &str, values: &[(Year, f64)]) -> ObservationRow {
        let mut row = ObservationRow::new(
            CountryCode::new(country).unwrap(),
            IndicatorCode::new(indicator).unwrap(),
        );
        row.values_by_year.extend(values.iter().copied());
        row
    }

    #[test]
    fn years_with_data_matches_non_empty_slots() {
        let range = YearRange::new(1990, 2000).unwrap();
        let index = SeriesIndex::build(
            &[definition("POP", "Population")],
            &[
                observation("USA", "POP", &[(1990, 250.0), (2000, 280.0)]),
                observation("FRA", "POP", &[(1995, 58.0)]),
            ],
            range,
        );
        let pop = IndicatorCode::new("POP").unwrap();
        assert_eq!(index.years_with_data(&pop), Some(&[1990, 1995, 2000][..]));
    }

    #[test]
    fn empty_indicator_still_exists() {
        let range = YearRange::new(1990, 2000).unwrap();
        let index = SeriesIndex::build(&[definition("POP", "Population")], &[], range);
        let pop = IndicatorCode::new("POP").unwrap();
        assert!(index.contains(&pop));
        assert_eq!(index.years_with_data(&pop), Some(&[][..]));
    }

    #[test]
    fn later_duplicate_wins() {
        let range = YearRange::new(1990, 2000).unwrap();
        let index = SeriesIndex::build(
            &[definition("POP", "Population")],
            &[
                observation("USA", "POP", &[(1990, 250.0)]),
                observation("USA", "POP", &[(1990, 251.0)]),
            ],
            range,
        );
        let pop = IndicatorCode::new("POP").unwrap();
        let usa = CountryCode::new("USA").unwrap();
        let entry = index.entry(&pop).unwrap();
        let offset = range.offset_of(1990).unwrap();
        assert_eq!(entry.values_at_offset(offset).get(&usa), Some(&251.0));
    }

    #[test]
    fn out_of_range_years_are_skipped() {
        let range = YearRange::new(1990, 2000).unwrap();
        let index = SeriesIndex::build(
            &[definition("POP", "Population")],
            &[observation("USA", "POP", &[(1980, 200.0), (1990, 250.0)])],
            range,
        );
        let pop = IndicatorCode::new("POP").unwrap();
        assert_eq!(index.years_with_data(&pop), Some(&[1990][..]));
    }

    #[test]
    fn undefined_indicator_rows_are_skipped() {
        let range = YearRange::new(1990, 2000).unwrap();
        let index = SeriesIndex::build(
            &[definition("POP", "Population")],
            &[observation("USA", "FERT", &[(1990, 1.8)])],
            range,
        );
        assert_eq!(index.len(), 1);
        assert!(!index.contains(&IndicatorCode::new("FERT").unwrap()));
    }
}
