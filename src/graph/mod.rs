//! Contribution graph engine: grid layout, classification and view state

pub mod classify;
pub mod grid;
pub mod view;

pub use classify::{classify, format_long_date, Bucket, Classification, Tooltip};
pub use grid::{build_grid, Grid, GridDay, Week, DAYS_PER_WEEK, DEFAULT_WINDOW_WEEKS};
pub use view::{DayCell, GraphView, RenderedGraph, MONTH_LABELS, WEEKDAY_LABELS};
