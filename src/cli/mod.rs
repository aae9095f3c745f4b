use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::GraphConfig;
use crate::graph::{Bucket, GraphView, RenderedGraph, DEFAULT_WINDOW_WEEKS};
use crate::logging::{self, LogTarget};
use crate::services::{load_or_empty, ActivitySource, FileSource, HttpSource, DEFAULT_FEED_URL};
use crate::types::parse_date;

/// Contribution heatmap for the terminal
#[derive(Parser)]
#[command(name = "contribgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Number of trailing weeks to show
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_WEEKS, allow_hyphen_values = true)]
    weeks: i64,

    /// Evaluation date (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Feed URL returning a JSON object of date -> count
    #[arg(long, global = true, conflicts_with = "file")]
    url: Option<String>,

    /// Local JSON file instead of the feed
    #[arg(long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the contribution grid
    Grid {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tooltip of a single day
    Tooltip {
        /// Day to describe (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
}

impl GraphArgs {
    fn config(&self) -> GraphConfig {
        GraphConfig {
            today: self.today,
            window_weeks: self.weeks,
        }
    }

    fn source(&self) -> Arc<dyn ActivitySource> {
        match (&self.file, &self.url) {
            (Some(path), _) => Arc::new(FileSource::new(path)),
            (None, Some(url)) => Arc::new(HttpSource::new(url.as_str())),
            (None, None) => Arc::new(HttpSource::new(DEFAULT_FEED_URL)),
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = self.graph.config();
        let source = self.graph.source();

        match self.command {
            None | Some(Commands::Tui) => {
                logging::init(LogTarget::FileOnly);
                crate::tui::run(config, source)
            }
            Some(Commands::Grid { json }) => {
                logging::init(LogTarget::Stderr);
                let view = load_view(&config, source.as_ref())?;
                let graph = view.render();
                if json {
                    println!("{}", serde_json::to_string_pretty(&graph)?);
                } else {
                    print!("{}", render_text(&graph));
                }
                Ok(())
            }
            Some(Commands::Tooltip { date }) => {
                logging::init(LogTarget::Stderr);
                let view = load_view(&config, source.as_ref())?;
                let cell = view.cell(date).with_context(|| {
                    format!(
                        "{} is outside the grid ({} to {})",
                        date,
                        view.grid().start(),
                        view.grid().today()
                    )
                })?;
                println!("{}", cell.tooltip_text());
                Ok(())
            }
        }
    }
}

fn load_view(config: &GraphConfig, source: &dyn ActivitySource) -> anyhow::Result<GraphView> {
    let record = load_or_empty(source);
    let view = GraphView::build(config.evaluation_date(), config.window_weeks, &record)?;
    Ok(view)
}

fn bucket_glyph(bucket: Bucket) -> char {
    match bucket {
        Bucket::None => '·',
        Bucket::Low => '░',
        Bucket::Medium => '▒',
        Bucket::High => '▓',
        Bucket::Saturated => '█',
    }
}

/// Plain-text grid: one line per week, oldest first
fn render_text(graph: &RenderedGraph) -> String {
    let mut out = String::new();
    for week in &graph.weeks {
        let Some(first) = week.first() else {
            continue;
        };
        let cells: String = week
            .iter()
            .map(|cell| bucket_glyph(cell.bucket))
            .flat_map(|c| [c, ' '])
            .collect();
        let _ = writeln!(out, "{}  {}", first.date, cells.trim_end());
    }
    let _ = writeln!(
        out,
        "{} contributions in the last {} weeks, {} active days",
        graph.total,
        graph.weeks.len(),
        graph.active_days
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["contribgraph"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.graph.weeks, 50);
        assert!(cli.graph.today.is_none());
    }

    #[test]
    fn test_cli_parse_grid() {
        let cli = Cli::try_parse_from(["contribgraph", "grid"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Grid { json: false })));
    }

    #[test]
    fn test_cli_parse_grid_json() {
        let cli = Cli::try_parse_from(["contribgraph", "grid", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Grid { json: true })));
    }

    #[test]
    fn test_cli_parse_tooltip() {
        let cli = Cli::try_parse_from(["contribgraph", "tooltip", "2024-01-03"]).unwrap();
        match cli.command {
            Some(Commands::Tooltip { date: d }) => assert_eq!(d, date(2024, 1, 3)),
            _ => panic!("expected tooltip command"),
        }
    }

    #[test]
    fn test_cli_parse_tooltip_bad_date() {
        assert!(Cli::try_parse_from(["contribgraph", "tooltip", "Jan 3"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_args() {
        let cli = Cli::try_parse_from([
            "contribgraph",
            "grid",
            "--weeks",
            "4",
            "--today",
            "2024-01-07",
            "--file",
            "calendar.json",
        ])
        .unwrap();
        assert_eq!(cli.graph.weeks, 4);
        assert_eq!(cli.graph.today, Some(date(2024, 1, 7)));
        assert_eq!(cli.graph.file, Some(PathBuf::from("calendar.json")));
    }

    #[test]
    fn test_cli_parse_negative_weeks() {
        // Accepted by the parser, rejected by the grid builder
        let cli = Cli::try_parse_from(["contribgraph", "--weeks", "-1"]).unwrap();
        assert_eq!(cli.graph.weeks, -1);
    }

    #[test]
    fn test_cli_url_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "contribgraph",
            "--url",
            "http://localhost/feed.json",
            "--file",
            "calendar.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_default_source_is_feed() {
        let cli = Cli::try_parse_from(["contribgraph"]).unwrap();
        assert_eq!(cli.graph.source().name(), DEFAULT_FEED_URL);
    }

    #[test]
    fn test_cli_invalid_window_is_error() {
        let config = GraphConfig {
            today: Some(date(2024, 1, 7)),
            window_weeks: 0,
        };
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));
        assert!(load_view(&config, &source).is_err());
    }

    // ========== render_text tests ==========

    #[test]
    fn test_render_text() {
        let mut record = ActivityRecord::new();
        record.insert(date(2024, 1, 3), 12).unwrap();
        record.insert(date(2024, 1, 7), 5).unwrap();
        let graph = GraphView::build(date(2024, 1, 7), 1, &record)
            .unwrap()
            .render();

        let text = render_text(&graph);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "2024-01-01  · · ▒ · · · ░");
        assert_eq!(lines[1], "17 contributions in the last 1 weeks, 2 active days");
    }
}
