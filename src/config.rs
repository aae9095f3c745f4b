//! Graph parameters shared by the CLI and the TUI

use chrono::{Local, NaiveDate};

use crate::graph::DEFAULT_WINDOW_WEEKS;

/// Evaluation date and trailing window length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Fixed evaluation date; `None` means the local date at each rebuild
    pub today: Option<NaiveDate>,
    pub window_weeks: i64,
}

impl GraphConfig {
    /// Date the grid ends on
    pub fn evaluation_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            today: None,
            window_weeks: DEFAULT_WINDOW_WEEKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.today, None);
        assert_eq!(config.window_weeks, 50);
    }

    #[test]
    fn test_fixed_evaluation_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let config = GraphConfig {
            today: Some(today),
            ..GraphConfig::default()
        };
        assert_eq!(config.evaluation_date(), today);
    }
}
