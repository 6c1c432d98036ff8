//! Human-readable table output for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use hnp_model::{CountryTable, IndicatorCode, Year};
use hnp_series::{ResolvedSnapshot, SeriesIndex, as_ordered_list};

pub fn print_snapshot_table(
    snapshot: &ResolvedSnapshot,
    countries: &CountryTable,
    indicator_name: &str,
) {
    println!("Indicator: {} ({})", indicator_name, snapshot.indicator);
    println!("Requested year: {}", snapshot.requested_year);

    let list = as_ordered_list(snapshot, countries);
    if list.is_empty() {
        println!("No data at or before {}", snapshot.requested_year);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Name"),
        header_cell("Region"),
        header_cell("Value"),
        header_cell("As of"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in &list {
        table.add_row(vec![
            Cell::new(entry.code.as_str()),
            Cell::new(entry.info.map(|info| info.short_name.as_str()).unwrap_or("-")),
            Cell::new(entry.info.map(|info| info.region.as_str()).unwrap_or("-")),
            Cell::new(entry.value),
            Cell::new(entry.as_of_year),
        ]);
    }
    println!("{table}");

    if let Some((lo, hi)) = snapshot.value_extent {
        println!("Extent: [{lo}, {hi}]");
    }
}

pub fn print_years(indicator: &IndicatorCode, indicator_name: &str, years: &[Year]) {
    println!("Indicator: {indicator_name} ({indicator})");
    if years.is_empty() {
        println!("No years with data");
        return;
    }
    let formatted: Vec<String> = years.iter().map(|year| year.to_string()).collect();
    println!("{}", formatted.join(" "));
}

pub fn print_indicator_table(index: &SeriesIndex) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Years with data"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (code, entry) in index.indicators() {
        table.add_row(vec![
            Cell::new(code.as_str()),
            Cell::new(entry.name()),
            Cell::new(entry.years_with_data().len()),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
