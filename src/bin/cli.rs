//! Macrodash CLI
//!
//! Command-line interface for the indicator table:
//! - Browse countries and country panels
//! - Compare countries on one indicator
//! - Heatmap slices and regime diagnostics
//! - Check API status

use anyhow::Context;
use clap::{Parser, Subcommand};
use macrodash::config::{generate_default_config, Config};
use macrodash::regime::{regime_table, render_summary, DiagnosticRecord};
use macrodash::select::{
    compare, default_selection, heatmap, rows_for_country, CountrySeries, HeatmapCell,
    DEFAULT_COMPARE_COUNT,
};
use macrodash::table::{writer, FxMeasure, Indicator, IndicatorRow, IndicatorTable};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "macrodash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Country macro dashboard")]
#[command(long_about = "Macrodash reads a cleaned table of country macro indicators.\nBrowse countries, compare indicators, and classify macro regimes.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Indicator table CSV (default: from config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// API server URL
    #[arg(long, default_value = "http://127.0.0.1:8501", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List countries in the table
    Countries,

    /// Show every observation for one country
    Country {
        /// Country name (exact match)
        name: String,
    },

    /// Compare countries on one indicator
    Compare {
        /// Indicator column (e.g. GDP_Growth, Inflation)
        indicator: String,
        /// Countries (comma-separated or multiple args; default: first four)
        countries: Vec<String>,
    },

    /// Show one indicator across countries for a year
    Heatmap {
        /// Indicator column
        indicator: String,
        /// Year (default: latest)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Classify macro regimes for a year
    Regimes {
        /// Year (default: latest)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Print the markdown diagnostic summary for a year
    Summary {
        /// Year (default: latest)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show API server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Countries => {
            let table = load_table(cli.data.as_deref())?;
            let countries = table.countries();

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&countries)?),
                _ => {
                    if countries.is_empty() {
                        println!("No countries in {}", describe_source(&table));
                        return Ok(());
                    }
                    for country in &countries {
                        println!("{}", country);
                    }
                    if cli.format != "csv" {
                        println!();
                        println!("{} countries", countries.len());
                        if let Some((first, last)) = table.year_span() {
                            println!("Years: {} - {}", first, last);
                        }
                    }
                }
            }
        }

        Commands::Country { name } => {
            let table = load_table(cli.data.as_deref())?;
            let rows = rows_for_country(&table, &name);

            if rows.is_empty() && cli.format == "table" {
                println!("No observations for {}", name);
                return Ok(());
            }

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
                "csv" => writer::write_rows(std::io::stdout(), rows, table.fx_measure())?,
                _ => print_rows(&rows, table.fx_measure()),
            }
        }

        Commands::Compare {
            indicator,
            countries,
        } => {
            let table = load_table(cli.data.as_deref())?;
            let indicator = parse_indicator(&indicator)?;
            if !indicator.is_comparable() {
                eprintln!("{} is not available in the comparison view", indicator);
                std::process::exit(1);
            }

            // Flatten countries (support comma-separated)
            let mut selection: Vec<String> = countries
                .iter()
                .flat_map(|c| c.split(',').map(|s| s.trim().to_string()))
                .filter(|c| !c.is_empty())
                .collect();
            if selection.is_empty() {
                selection = default_selection(&table, DEFAULT_COMPARE_COUNT);
            }

            let series = compare(&table, indicator, &selection);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&series)?),
                "csv" => print_series_csv(&series)?,
                _ => {
                    println!("{}", indicator.title_for(table.fx_measure()));
                    println!();
                    print_series_table(&series);
                }
            }
        }

        Commands::Heatmap { indicator, year } => {
            let table = load_table(cli.data.as_deref())?;
            let indicator = parse_indicator(&indicator)?;
            if !indicator.in_heatmap() {
                eprintln!("{} is not available in the heatmap view", indicator);
                std::process::exit(1);
            }
            let year = resolve_year(&table, year)?;
            let cells = heatmap(&table, indicator, year);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&cells)?),
                "csv" => print_cells_csv(&cells)?,
                _ => {
                    println!("{} ({})", indicator.title_for(table.fx_measure()), year);
                    println!();
                    print_cells(&cells);
                }
            }
        }

        Commands::Regimes { year } => {
            let table = load_table(cli.data.as_deref())?;
            let year = resolve_year(&table, year)?;
            let records = regime_table(&table, year);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&records)?),
                "csv" => print_records_csv(&records)?,
                _ => {
                    if records.is_empty() {
                        println!("No observations for {}", year);
                        return Ok(());
                    }
                    print_records(&records);
                }
            }
        }

        Commands::Summary { year } => {
            let table = load_table(cli.data.as_deref())?;
            let year = resolve_year(&table, year)?;
            let records = regime_table(&table, year);

            if records.is_empty() {
                println!("No observations for {}", year);
            } else {
                println!("{}", render_summary(&records));
            }
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Macrodash v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );

                    println!();
                    println!("Table:");
                    if let Some(status) = health["table"].as_str() {
                        println!("  Status: {}", status);
                    }
                    if let Some(source) = health["source"].as_str() {
                        println!("  Source: {}", source);
                    }
                    if let Some(rows) = health["rows"].as_u64() {
                        println!("  Rows: {}", rows);
                    }
                    if let Some(countries) = health["countries"].as_u64() {
                        println!("  Countries: {}", countries);
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Macrodash API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Macrodash API server is running:");
                    eprintln!("  cargo run --bin macrodash");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)?;
                println!("Config written to {:?}", path);
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

fn load_table(data: Option<&Path>) -> anyhow::Result<IndicatorTable> {
    let path = match data {
        Some(path) => path.to_path_buf(),
        None => Config::load_default().data.path,
    };

    IndicatorTable::load(&path)
        .with_context(|| format!("cannot load indicator table {}", path.display()))
}

fn parse_indicator(raw: &str) -> anyhow::Result<Indicator> {
    raw.parse::<Indicator>().map_err(|e| {
        let known: Vec<&str> = Indicator::all().iter().map(|i| i.column()).collect();
        anyhow::anyhow!("{} (expected one of: {})", e, known.join(", "))
    })
}

/// Requested year, else the latest year; an empty table has neither
fn resolve_year(table: &IndicatorTable, year: Option<i32>) -> anyhow::Result<i32> {
    year.or_else(|| table.latest_year())
        .with_context(|| match table.source() {
            Some(path) => format!("indicator table {} is empty", path.display()),
            None => "indicator table is empty".to_string(),
        })
}

fn describe_source(table: &IndicatorTable) -> String {
    table
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "table".to_string())
}

fn format_value(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_rows(rows: &[&IndicatorRow], fx_measure: FxMeasure) {
    print!("{:<6}", "Year");
    for indicator in Indicator::all() {
        print!(" {:>14}", indicator.column_for(fx_measure));
    }
    println!();
    println!("{}", "-".repeat(6 + 15 * Indicator::all().len()));

    for row in rows {
        print!("{:<6}", row.year);
        for indicator in Indicator::all() {
            print!(" {:>14}", format_value(row.value(*indicator)));
        }
        println!();
    }
}

fn print_series_table(series: &[CountrySeries]) {
    let years: std::collections::BTreeSet<i32> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.year))
        .collect();

    print!("{:<6}", "Year");
    for s in series {
        print!(" {:>14}", s.country);
    }
    println!();
    println!("{}", "-".repeat(6 + 15 * series.len()));

    for year in years {
        print!("{:<6}", year);
        for s in series {
            let value = s.points.iter().find(|p| p.year == year).and_then(|p| p.value);
            print!(" {:>14}", format_value(value));
        }
        println!();
    }
}

fn print_series_csv(series: &[CountrySeries]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(["Country", "Year", "Value"])?;
    for s in series {
        for p in &s.points {
            wtr.write_record([
                s.country.clone(),
                p.year.to_string(),
                p.value.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn print_cells(cells: &[HeatmapCell]) {
    println!("{:<20} {:>10}", "Country", "Value");
    println!("{}", "-".repeat(31));
    for cell in cells {
        println!("{:<20} {:>10}", cell.country, format_value(cell.value));
    }
}

fn print_cells_csv(cells: &[HeatmapCell]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(["Country", "Value"])?;
    for cell in cells {
        wtr.write_record([
            cell.country.clone(),
            cell.value.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_records(records: &[DiagnosticRecord]) {
    println!(
        "{:<20} {:<10} {:<10} {:<10} {:<10}",
        "Country", "Inflation", "Monetary", "Fiscal", "External"
    );
    println!("{}", "-".repeat(64));

    for record in records {
        println!(
            "{:<20} {:<10} {:<10} {:<10} {:<10}",
            record.country,
            record.inflation_regime.name(),
            record.monetary_stance.name(),
            record.fiscal_position.name(),
            record.external_position.name()
        );
    }

    let incomplete = records.iter().filter(|r| !r.is_complete()).count();
    if incomplete > 0 {
        println!();
        println!("{} row(s) with missing inputs", incomplete);
    }
}

fn print_records_csv(records: &[DiagnosticRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record([
        "Country",
        "Year",
        "Inflation_Regime",
        "Monetary_Stance",
        "Fiscal_Position",
        "External_Position",
    ])?;
    for r in records {
        wtr.write_record([
            r.country.as_str(),
            r.year.to_string().as_str(),
            r.inflation_regime.name(),
            r.monetary_stance.name(),
            r.fiscal_position.name(),
            r.external_position.name(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
