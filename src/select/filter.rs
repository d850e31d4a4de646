//! Row filters
//!
//! Projections of the table down to the rows a view needs. Every function is
//! total: no match is an empty result, never an error. Results borrow from
//! the table and keep its row order.

use crate::table::{IndicatorRow, IndicatorTable};
use std::collections::HashSet;

/// All rows for one country, in table order
pub fn rows_for_country<'a>(table: &'a IndicatorTable, country: &str) -> Vec<&'a IndicatorRow> {
    table
        .rows()
        .iter()
        .filter(|r| r.country == country)
        .collect()
}

/// All rows whose country is in `countries`, in table order
///
/// The order of `countries` does not matter and repeated names are harmless.
pub fn rows_for_countries<'a, S: AsRef<str>>(
    table: &'a IndicatorTable,
    countries: &[S],
) -> Vec<&'a IndicatorRow> {
    let wanted: HashSet<&str> = countries.iter().map(|c| c.as_ref()).collect();

    table
        .rows()
        .iter()
        .filter(|r| wanted.contains(r.country.as_str()))
        .collect()
}

/// All rows observed in `year`, across every country
pub fn rows_for_year(table: &IndicatorTable, year: i32) -> Vec<&IndicatorRow> {
    table.rows().iter().filter(|r| r.year == year).collect()
}
