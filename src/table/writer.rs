//! CSV output of indicator rows
//!
//! Writes rows back in the source schema, so a filtered view can be saved
//! and reloaded. Missing values are written as empty cells.

use super::types::{FxMeasure, Indicator, IndicatorRow};
use std::io::Write;

/// Header for the given FX measure, in source column order
pub fn header(fx_measure: FxMeasure) -> Vec<&'static str> {
    let mut columns = vec!["Year", "Country"];
    columns.extend(Indicator::all().iter().map(|i| i.column_for(fx_measure)));
    columns
}

/// Write a header and one record per row
pub fn write_rows<'a, W, I>(writer: W, rows: I, fx_measure: FxMeasure) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a IndicatorRow>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(header(fx_measure))?;

    for row in rows {
        let mut record = vec![row.year.to_string(), row.country.clone()];
        record.extend(
            Indicator::all()
                .iter()
                .map(|&i| row.value(i).map(|v| v.to_string()).unwrap_or_default()),
        );
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Render rows to a CSV string
pub fn rows_to_string<'a, I>(rows: I, fx_measure: FxMeasure) -> csv::Result<String>
where
    I: IntoIterator<Item = &'a IndicatorRow>,
{
    let mut buf = Vec::new();
    write_rows(&mut buf, rows, fx_measure)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::IndicatorTable;

    #[test]
    fn test_header_follows_fx_measure() {
        assert_eq!(header(FxMeasure::DepreciationYoY)[9], "FX_Dep_YoY");
        assert_eq!(header(FxMeasure::Rate)[9], "FX_Rate");
        assert_eq!(header(FxMeasure::Rate).len(), 12);
    }

    #[test]
    fn test_written_rows_reload() {
        let rows = vec![
            IndicatorRow::new("Chile", 2022)
                .with(Indicator::Inflation, 11.6)
                .with(Indicator::CurrentAccount, -9.0),
            IndicatorRow::new("Peru", 2022).with(Indicator::GdpGrowth, 2.7),
        ];

        let text = rows_to_string(&rows, FxMeasure::Rate).unwrap();
        assert!(text.starts_with("Year,Country,GDP_Growth"));
        assert!(text.contains("2022,Peru,2.7,,"));

        let table = IndicatorTable::from_reader(text.as_bytes()).unwrap();
        assert_eq!(table.fx_measure(), FxMeasure::Rate);
        assert_eq!(table.rows(), rows.as_slice());
    }
}
