//! Trailing-window calendar grid
//!
//! Lays a sparse [`ActivityRecord`] out as whole weeks ending at `today`.
//! Weeks are 7-day chunks counted back from `today`, so every week is
//! complete, no future date is ever emitted, and `today` is always the last
//! cell of the last week.

use chrono::{Days, Duration, NaiveDate};
use serde::Serialize;

use crate::types::{ActivityRecord, GraphError, Result};

/// Cells per week column
pub const DAYS_PER_WEEK: usize = 7;

/// Trailing window used when none is configured
pub const DEFAULT_WINDOW_WEEKS: i64 = 50;

/// A single calendar day in the grid, before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    pub count: u64,
}

/// Seven consecutive days, oldest first
pub type Week = [GridDay; DAYS_PER_WEEK];

/// Whole weeks of days in ascending date order, ending at `today`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    weeks: Vec<Week>,
    today: NaiveDate,
}

impl Grid {
    /// Weeks, oldest first
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Evaluation date (last cell of the grid)
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// First date covered by the grid
    pub fn start(&self) -> NaiveDate {
        // build_grid never produces an empty grid
        self.weeks
            .first()
            .map(|week| week[0].date)
            .unwrap_or(self.today)
    }

    /// All days in ascending order
    pub fn days(&self) -> impl Iterator<Item = &GridDay> + '_ {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// Total number of cells (always a multiple of 7)
    pub fn len_days(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.today
    }

    /// Look up a day by date in O(1)
    pub fn get(&self, date: NaiveDate) -> Option<&GridDay> {
        if !self.contains(date) {
            return None;
        }
        let offset = (date - self.start()).num_days() as usize;
        self.weeks
            .get(offset / DAYS_PER_WEEK)
            .map(|week| &week[offset % DAYS_PER_WEEK])
    }

    /// Sum of counts inside the window
    pub fn total(&self) -> u64 {
        self.days()
            .fold(0u64, |acc, day| acc.saturating_add(day.count))
    }

    /// Number of days inside the window with a non-zero count
    pub fn active_days(&self) -> usize {
        self.days().filter(|day| day.count > 0).count()
    }
}

/// Build `window_weeks` complete weeks ending at `today` (inclusive).
///
/// The window covers the `7 * window_weeks` days after the nominal start
/// `today - 7 * window_weeks`. Dates missing from `activity` get a count of 0.
pub fn build_grid(today: NaiveDate, window_weeks: i64, activity: &ActivityRecord) -> Result<Grid> {
    if window_weeks < 1 {
        return Err(GraphError::InvalidWindow(window_weeks));
    }

    let total_days = window_weeks
        .checked_mul(DAYS_PER_WEEK as i64)
        .ok_or(GraphError::InvalidWindow(window_weeks))?;

    // Window reaching past the earliest representable date
    let grid_start = today
        .checked_sub_days(Days::new((total_days - 1) as u64))
        .ok_or(GraphError::InvalidWindow(window_weeks))?;

    let weeks: Vec<Week> = (0..window_weeks)
        .map(|week_idx| {
            std::array::from_fn(|day_idx| {
                let date = grid_start
                    + Duration::weeks(week_idx)
                    + Duration::days(day_idx as i64);
                GridDay {
                    date,
                    count: activity.get(date),
                }
            })
        })
        .collect();

    Ok(Grid { weeks, today })
}
