//! Graph view: classified grid plus per-cell selection state

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::classify::{Bucket, Classification, Tooltip};
use super::grid::{build_grid, Grid, GridDay};
use crate::types::{ActivityRecord, Result};

/// Month axis labels. Decorative only: not aligned to the grid's dates.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday axis labels. Decorative only: not aligned to the grid's dates.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A fully classified cell ready for layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u64,
    pub bucket: Bucket,
    pub color: &'static str,
    pub tooltip: Tooltip,
    pub selected: bool,
}

impl DayCell {
    fn new(day: &GridDay, selected: bool) -> Self {
        let class = Classification::of(day.count);
        Self {
            date: day.date,
            count: day.count,
            bucket: class.bucket,
            color: class.color(),
            tooltip: class.tooltip(day.date),
            selected,
        }
    }

    pub fn tooltip_text(&self) -> String {
        self.tooltip.to_string()
    }
}

/// Renderable graph: week rows plus static axis labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedGraph {
    pub today: NaiveDate,
    pub weeks: Vec<Vec<DayCell>>,
    pub month_labels: [&'static str; 12],
    pub weekday_labels: [&'static str; 7],
    pub total: u64,
    pub active_days: usize,
}

impl RenderedGraph {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(|week| week.iter())
    }
}

/// Owns the current grid and the selection flags keyed by date.
///
/// Selection is cleared whenever the grid is replaced.
#[derive(Debug, Clone)]
pub struct GraphView {
    grid: Grid,
    selected: HashMap<NaiveDate, bool>,
}

impl GraphView {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            selected: HashMap::new(),
        }
    }

    /// Build the grid and wrap it in a fresh view
    pub fn build(today: NaiveDate, window_weeks: i64, activity: &ActivityRecord) -> Result<Self> {
        Ok(Self::new(build_grid(today, window_weeks, activity)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the grid. All selection flags reset to false.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.selected.clear();
    }

    /// Recompute the grid from scratch. On error the current grid and
    /// selection are left untouched.
    pub fn rebuild(
        &mut self,
        today: NaiveDate,
        window_weeks: i64,
        activity: &ActivityRecord,
    ) -> Result<()> {
        let grid = build_grid(today, window_weeks, activity)?;
        tracing::debug!(
            today = %today,
            window_weeks,
            records = activity.len(),
            "rebuilt contribution grid"
        );
        self.set_grid(grid);
        Ok(())
    }

    /// Flip the selection flag of `date`. Dates outside the grid are ignored.
    pub fn toggle_cell(&mut self, date: NaiveDate) {
        if !self.grid.contains(date) {
            return;
        }
        let flag = self.selected.entry(date).or_insert(false);
        *flag = !*flag;
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected.get(&date).copied().unwrap_or(false)
    }

    /// Selected dates in ascending order
    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .selected
            .iter()
            .filter(|(_, &flag)| flag)
            .map(|(&date, _)| date)
            .collect();
        dates.sort_unstable();
        dates
    }

    /// Classified cell for a single date
    pub fn cell(&self, date: NaiveDate) -> Option<DayCell> {
        self.grid
            .get(date)
            .map(|day| DayCell::new(day, self.is_selected(date)))
    }

    /// Classify every cell and attach selection state
    pub fn render(&self) -> RenderedGraph {
        let weeks = self
            .grid
            .weeks()
            .iter()
            .map(|week| {
                week.iter()
                    .map(|day| DayCell::new(day, self.is_selected(day.date)))
                    .collect()
            })
            .collect();

        RenderedGraph {
            today: self.grid.today(),
            weeks,
            month_labels: MONTH_LABELS,
            weekday_labels: WEEKDAY_LABELS,
            total: self.grid.total(),
            active_days: self.grid.active_days(),
        }
    }
}
