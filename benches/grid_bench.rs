//! Criterion benchmarks for grid construction and rendering

use chrono::{Days, NaiveDate};
use contribgraph::graph::{build_grid, GraphView, DEFAULT_WINDOW_WEEKS};
use contribgraph::types::ActivityRecord;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::path::PathBuf;

/// A full year of activity ending at `today`
fn dense_record(today: NaiveDate) -> ActivityRecord {
    (0..365u64)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)).map(|d| (d, offset % 40)))
        .collect()
}

fn bench_build_grid(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let record = dense_record(today);

    let mut group = c.benchmark_group("grid");
    for weeks in [1, DEFAULT_WINDOW_WEEKS, 520] {
        group.throughput(Throughput::Elements(weeks as u64 * 7));
        group.bench_with_input(BenchmarkId::new("build_grid", weeks), &weeks, |b, &weeks| {
            b.iter(|| build_grid(black_box(today), black_box(weeks), &record));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let record = dense_record(today);
    let mut view = GraphView::build(today, DEFAULT_WINDOW_WEEKS, &record).unwrap();
    view.toggle_cell(today);

    let mut group = c.benchmark_group("view");
    group.bench_function("render", |b| {
        b.iter(|| black_box(&view).render());
    });
    group.finish();
}

fn bench_parse_fixture(c: &mut Criterion) {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("calendar-sample.json");

    let bytes = match std::fs::read(&fixture) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Skipping parse_fixture: {}", e);
            return;
        }
    };

    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("from_json_slice", |b| {
        b.iter(|| {
            let mut copy = bytes.clone();
            let _ = ActivityRecord::from_json_slice(black_box(&mut copy));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build_grid, bench_render, bench_parse_fixture);
criterion_main!(benches);
