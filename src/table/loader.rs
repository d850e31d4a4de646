//! CSV loading for the indicator table
//!
//! The header is resolved against the fixed schema before any row is read,
//! so a file with a missing column fails fast instead of feeding `None`
//! into every classification.

use super::dataset::IndicatorTable;
use super::error::{TableError, TableResult};
use super::types::{FxMeasure, Indicator, IndicatorRow};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const COUNTRY_COLUMN: &str = "Country";
const YEAR_COLUMN: &str = "Year";

/// Cell spellings treated as a missing value
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none"];

/// Column positions resolved from a header row
#[derive(Debug, Clone)]
struct Schema {
    country: usize,
    year: usize,
    indicators: Vec<(Indicator, usize)>,
    fx_measure: FxMeasure,
}

impl Schema {
    fn resolve(headers: &csv::StringRecord) -> TableResult<Self> {
        let mut missing = Vec::new();

        let country = require(headers, COUNTRY_COLUMN, &mut missing);
        let year = require(headers, YEAR_COLUMN, &mut missing);

        let mut indicators = Vec::with_capacity(Indicator::all().len());
        let mut fx_measure = FxMeasure::DepreciationYoY;

        for &indicator in Indicator::all() {
            if indicator == Indicator::Fx {
                if let Some(idx) = position(headers, FxMeasure::DepreciationYoY.column()) {
                    indicators.push((indicator, idx));
                } else if let Some(idx) = position(headers, FxMeasure::Rate.column()) {
                    fx_measure = FxMeasure::Rate;
                    indicators.push((indicator, idx));
                } else {
                    missing.push(FxMeasure::DepreciationYoY.column().to_string());
                }
                continue;
            }

            if let Some(idx) = require(headers, indicator.column(), &mut missing) {
                indicators.push((indicator, idx));
            }
        }

        match (country, year) {
            (Some(country), Some(year)) if missing.is_empty() => Ok(Self {
                country,
                year,
                indicators,
                fx_measure,
            }),
            _ => Err(TableError::SchemaMismatch { missing }),
        }
    }
}

fn position(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn require(headers: &csv::StringRecord, name: &str, missing: &mut Vec<String>) -> Option<usize> {
    let pos = position(headers, name);
    if pos.is_none() {
        missing.push(name.to_string());
    }
    pos
}

impl IndicatorTable {
    /// Load the table from a CSV file
    pub fn load(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(file, Some(path))?;

        let (first, last) = table.year_span().unwrap_or((0, 0));
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            countries = table.countries().len(),
            first_year = first,
            last_year = last,
            "Loaded indicator table"
        );

        Ok(table)
    }

    /// Load the table from any CSV reader (useful for testing)
    pub fn from_reader<R: Read>(reader: R) -> TableResult<Self> {
        Self::parse(reader, None)
    }

    fn parse<R: Read>(reader: R, source: Option<&Path>) -> TableResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let schema = Schema::resolve(&headers)?;
        tracing::debug!(fx = schema.fx_measure.column(), "Resolved table schema");

        let mut rows = Vec::new();
        let mut seen: HashSet<(String, i32)> = HashSet::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let row = parse_row(&record, &schema, line)?;

            if !seen.insert((row.country.clone(), row.year)) {
                return Err(TableError::DuplicateObservation {
                    country: row.country,
                    year: row.year,
                    line,
                });
            }

            rows.push(row);
        }

        Ok(IndicatorTable::from_validated(
            rows,
            schema.fx_measure,
            source.map(Path::to_path_buf),
        ))
    }
}

fn parse_row(record: &csv::StringRecord, schema: &Schema, line: u64) -> TableResult<IndicatorRow> {
    let invalid = |column: &str, value: &str| TableError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
    };

    let country = record.get(schema.country).unwrap_or_default();
    if country.is_empty() {
        return Err(invalid(COUNTRY_COLUMN, country));
    }

    let year_raw = record.get(schema.year).unwrap_or_default();
    let year = parse_year(year_raw).ok_or_else(|| invalid(YEAR_COLUMN, year_raw))?;

    let mut row = IndicatorRow::new(country, year);

    for &(indicator, idx) in &schema.indicators {
        let raw = record.get(idx).unwrap_or_default();
        let column = indicator.column_for(schema.fx_measure);
        *row.slot_mut(indicator) = parse_cell(raw).map_err(|_| invalid(column, raw))?;
    }

    Ok(row)
}

/// Parse a numeric cell; `Ok(None)` for a missing-value marker
fn parse_cell(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if MISSING_MARKERS.iter().any(|m| raw.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(()),
    }
}

/// Parse a year, accepting the `2020.0` form written by dataframe exports
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const HEADER: &str = "Year,Country,GDP_Growth,Inflation,Unemployment,Policy_Rate,Debt_GDP,Fiscal_Balance,Current_Account,FX_Dep_YoY,TenY_Yield,Equity_YoY";

    fn csv_with(body: &str) -> String {
        format!("{}\n{}", HEADER, body)
    }

    #[test]
    fn test_load_simple_table() {
        let data = csv_with(
            "2021,Brazil,4.8,8.3,13.2,9.25,88.9,-4.4,-2.8,7.4,10.8,-11.9
2022,Brazil,2.9,9.3,9.3,13.75,85.9,-4.6,-2.8,-4.9,12.7,4.7
2022,Japan,1.0,2.5,2.6,-0.1,260.1,-6.2,2.1,19.7,0.4,-9.4",
        );

        let table = IndicatorTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.fx_measure(), FxMeasure::DepreciationYoY);
        assert_eq!(table.countries(), vec!["Brazil", "Japan"]);

        let row = &table.rows()[1];
        assert_eq!(row.country, "Brazil");
        assert_eq!(row.year, 2022);
        assert_eq!(row.value(Indicator::PolicyRate), Some(13.75));
        assert_eq!(row.value(Indicator::Fx), Some(-4.9));
        assert_eq!(row.value(Indicator::EquityYoY), Some(4.7));
    }

    #[test]
    fn test_missing_cells_stay_missing() {
        let data = csv_with(
            "2020,Turkey,1.9,12.3,13.1,,,-3.4,NaN,23.8,NA,null
2021,Turkey, 11.4 ,19.6,12.0,14.0,41.8,-2.8,-0.9,43.3,19.5,none",
        );

        let table = IndicatorTable::from_reader(data.as_bytes()).unwrap();
        let first = &table.rows()[0];

        assert_eq!(first.value(Indicator::PolicyRate), None);
        assert_eq!(first.value(Indicator::DebtGdp), None);
        assert_eq!(first.value(Indicator::CurrentAccount), None);
        assert_eq!(first.value(Indicator::TenYearYield), None);
        assert_eq!(first.value(Indicator::EquityYoY), None);
        assert_eq!(first.value(Indicator::FiscalBalance), Some(-3.4));

        let second = &table.rows()[1];
        assert_eq!(second.value(Indicator::GdpGrowth), Some(11.4));
    }

    #[test]
    fn test_schema_mismatch_lists_missing_columns() {
        let data = "Year,Country,GDP_Growth,Unemployment,Policy_Rate,Debt_GDP,Fiscal_Balance,Current_Account,TenY_Yield,Equity_YoY
2022,Chile,2.4,7.9,11.25,38.0,1.1,-9.0,5.3,19.1";

        let err = IndicatorTable::from_reader(data.as_bytes()).unwrap_err();
        match err {
            TableError::SchemaMismatch { missing } => {
                assert_eq!(missing, vec!["Inflation", "FX_Dep_YoY"]);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_fx_rate_variant() {
        let data = "Country,Year,GDP_Growth,Inflation,Unemployment,Policy_Rate,Debt_GDP,Fiscal_Balance,Current_Account,FX_Rate,TenY_Yield,Equity_YoY,Notes
India,2022,7.0,6.7,7.3,6.25,81.0,-9.6,-2.0,78.6,7.3,4.3,ignored";

        let table = IndicatorTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.fx_measure(), FxMeasure::Rate);
        assert_eq!(table.rows()[0].value(Indicator::Fx), Some(78.6));
    }

    #[test]
    fn test_duplicate_observation_is_rejected() {
        let data = csv_with(
            "2022,Chile,2.4,11.6,7.9,11.25,38.0,1.1,-9.0,12.0,5.3,19.1
2022,Chile,2.4,11.6,7.9,11.25,38.0,1.1,-9.0,12.0,5.3,19.1",
        );

        let err = IndicatorTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TableError::DuplicateObservation { year: 2022, line: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_numeric_cell() {
        let data = csv_with("2022,Chile,2.4,high,7.9,11.25,38.0,1.1,-9.0,12.0,5.3,19.1");

        let err = IndicatorTable::from_reader(data.as_bytes()).unwrap_err();
        match err {
            TableError::InvalidValue { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Inflation");
                assert_eq!(value, "high");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_year_forms() {
        assert_eq!(parse_year("2020"), Some(2020));
        assert_eq!(parse_year("2020.0"), Some(2020));
        assert_eq!(parse_year("2020.5"), None);
        assert_eq!(parse_year("twenty"), None);
    }

    #[test]
    fn test_blank_country_is_invalid() {
        let data = csv_with("2022,,2.4,11.6,7.9,11.25,38.0,1.1,-9.0,12.0,5.3,19.1");
        let err = IndicatorTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::InvalidValue { ref column, .. } if column == "Country"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("macro_clean.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "2023,Poland,0.2,11.4,2.8,5.75,49.6,-5.1,1.6,-2.6,5.9,36.5").unwrap();
        drop(file);

        let table = IndicatorTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = IndicatorTable::load(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
