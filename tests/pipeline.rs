//! End-to-end: file source -> grid -> classified view

use chrono::NaiveDate;
use contribgraph::graph::{Bucket, GraphView};
use contribgraph::services::{load_or_empty, ActivitySource, FileSource};
use std::path::PathBuf;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture_source() -> FileSource {
    FileSource::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("calendar-sample.json"),
    )
}

#[test]
fn test_fixture_loads() {
    let record = fixture_source().load().unwrap();
    assert_eq!(record.len(), 9);
    assert_eq!(record.get(date(2024, 1, 8)), 75);
}

#[test]
fn test_single_week_window() {
    let record = load_or_empty(&fixture_source());
    let graph = GraphView::build(date(2024, 1, 7), 1, &record)
        .unwrap()
        .render();

    assert_eq!(graph.weeks.len(), 1);
    let cells: Vec<_> = graph.cells().collect();
    assert_eq!(cells.first().unwrap().date, date(2024, 1, 1));
    assert_eq!(cells.last().unwrap().date, date(2024, 1, 7));

    let buckets: Vec<Bucket> = cells.iter().map(|c| c.bucket).collect();
    assert_eq!(
        buckets,
        vec![
            Bucket::None,
            Bucket::Low,
            Bucket::Medium,
            Bucket::Low,
            Bucket::High,
            Bucket::High,
            Bucket::Saturated,
        ]
    );

    // 2023-12-31 and 2024-01-08 fall outside the window
    assert_eq!(graph.total, 1 + 12 + 9 + 20 + 29 + 30);
    assert_eq!(graph.active_days, 6);
}

#[test]
fn test_tooltips_through_pipeline() {
    let record = load_or_empty(&fixture_source());
    let view = GraphView::build(date(2024, 1, 7), 1, &record).unwrap();

    assert_eq!(
        view.cell(date(2024, 1, 1)).unwrap().tooltip_text(),
        "No contributions"
    );
    assert_eq!(
        view.cell(date(2024, 1, 3)).unwrap().tooltip_text(),
        "12 contributions\nWednesday, January 3, 2024"
    );
    assert_eq!(
        view.cell(date(2024, 1, 6)).unwrap().tooltip_text(),
        "29 contributions\nSaturday, January 6, 2024"
    );
    assert_eq!(
        view.cell(date(2024, 1, 7)).unwrap().tooltip_text(),
        "30+ contributions\nSunday, January 7, 2024"
    );
}

#[test]
fn test_default_window_shape() {
    let record = load_or_empty(&fixture_source());
    let view = GraphView::build(date(2024, 3, 15), 50, &record).unwrap();
    let graph = view.render();

    assert_eq!(graph.weeks.len(), 50);
    assert!(graph.weeks.iter().all(|w| w.len() == 7));
    assert_eq!(graph.cells().last().unwrap().date, date(2024, 3, 15));
    assert_eq!(graph.month_labels.len(), 12);
    assert_eq!(graph.weekday_labels.len(), 7);
}

#[test]
fn test_missing_file_renders_empty_grid() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("nope.json"));
    let record = load_or_empty(&source);
    assert!(record.is_empty());

    let graph = GraphView::build(date(2024, 1, 7), 2, &record)
        .unwrap()
        .render();
    assert_eq!(graph.cells().count(), 14);
    assert!(graph.cells().all(|c| c.bucket == Bucket::None));
}

#[test]
fn test_selection_resets_on_rebuild() {
    let record = load_or_empty(&fixture_source());
    let mut view = GraphView::build(date(2024, 1, 7), 1, &record).unwrap();

    view.toggle_cell(date(2024, 1, 3));
    assert!(view.render().cells().any(|c| c.selected));

    view.rebuild(date(2024, 1, 8), 1, &record).unwrap();
    assert!(view.render().cells().all(|c| !c.selected));
    assert_eq!(view.cell(date(2024, 1, 8)).unwrap().bucket, Bucket::Saturated);
}
