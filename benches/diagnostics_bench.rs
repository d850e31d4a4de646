//! Benchmarks for table loading, filtering, and regime diagnostics
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use macrodash::regime::build_diagnostics;
use macrodash::select::{compare, heatmap, rows_for_country};
use macrodash::table::{writer, FxMeasure, Indicator, IndicatorRow, IndicatorTable};

const FIRST_YEAR: i32 = 1990;

fn create_test_rows(countries: usize, years: usize) -> Vec<IndicatorRow> {
    let mut rows = Vec::with_capacity(countries * years);
    for c in 0..countries {
        for y in 0..years {
            let step = (c * years + y) as f64;
            let mut row = IndicatorRow::new(format!("Country {:03}", c), FIRST_YEAR + y as i32)
                .with(Indicator::GdpGrowth, (step % 9.0) - 2.0)
                .with(Indicator::Inflation, step % 25.0)
                .with(Indicator::PolicyRate, (step * 0.7) % 20.0)
                .with(Indicator::FiscalBalance, (step % 13.0) - 8.0)
                .with(Indicator::CurrentAccount, (step % 11.0) - 5.0);
            // Leave some gaps so the Unknown path is exercised
            if y % 7 != 0 {
                row = row.with(Indicator::Fx, step % 30.0);
            }
            rows.push(row);
        }
    }
    rows
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for countries in [10, 100] {
        let rows = create_test_rows(countries, 30);
        let csv = writer::rows_to_string(&rows, FxMeasure::DepreciationYoY).unwrap();

        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_function(format!("from_reader_{}", rows.len()), |b| {
            b.iter(|| IndicatorTable::from_reader(black_box(csv.as_bytes())).unwrap())
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let table =
        IndicatorTable::from_rows(create_test_rows(100, 30), FxMeasure::DepreciationYoY).unwrap();
    let selection: Vec<String> = table.countries().into_iter().take(4).collect();

    group.bench_function("rows_for_country", |b| {
        b.iter(|| rows_for_country(black_box(&table), black_box("Country 050")))
    });

    group.bench_function("compare_4", |b| {
        b.iter(|| compare(black_box(&table), Indicator::Inflation, black_box(&selection)))
    });

    group.bench_function("heatmap", |b| {
        b.iter(|| heatmap(black_box(&table), Indicator::GdpGrowth, FIRST_YEAR + 15))
    });

    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnostics");

    for countries in [10, 100] {
        let rows = create_test_rows(countries, 30);

        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_function(format!("build_{}", rows.len()), |b| {
            b.iter(|| build_diagnostics(black_box(&rows)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_select, bench_diagnostics);
criterion_main!(benches);
