//! Count → intensity bucket, color token and tooltip

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::types::{GraphError, Result};

/// Counts at or above this value are reported as "30+"
pub const SATURATION_THRESHOLD: u64 = 30;

/// Intensity bucket derived from a day's count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// 0
    None,
    /// 1-9
    Low,
    /// 10-19
    Medium,
    /// 20-29
    High,
    /// 30 and above
    Saturated,
}

impl Bucket {
    /// Map a count to its bucket (inclusive upper bounds 0, 9, 19, 29)
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Self::None,
            1..=9 => Self::Low,
            10..=19 => Self::Medium,
            20..=29 => Self::High,
            _ => Self::Saturated,
        }
    }

    /// All buckets in ascending severity
    pub fn all() -> &'static [Bucket] {
        &[
            Bucket::None,
            Bucket::Low,
            Bucket::Medium,
            Bucket::High,
            Bucket::Saturated,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Saturated => "saturated",
        }
    }

    /// Display color token (hex)
    pub fn color(self) -> &'static str {
        match self {
            Self::None => "#EDEDED",
            Self::Low => "#ACD5F2",
            Self::Medium => "#7FA8C9",
            Self::High => "#527BA0",
            Self::Saturated => "#254E77",
        }
    }

    /// Color token as RGB components
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::None => (0xED, 0xED, 0xED),
            Self::Low => (0xAC, 0xD5, 0xF2),
            Self::Medium => (0x7F, 0xA8, 0xC9),
            Self::High => (0x52, 0x7B, 0xA0),
            Self::Saturated => (0x25, 0x4E, 0x77),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tooltip for a single cell. Empty days carry no date line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub date: Option<String>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{}\n{}", self.title, date),
            None => f.write_str(&self.title),
        }
    }
}

/// Classified count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub count: u64,
    pub bucket: Bucket,
}

impl Classification {
    /// Classify a count already known to be non-negative
    pub fn of(count: u64) -> Self {
        Self {
            count,
            bucket: Bucket::from_count(count),
        }
    }

    pub fn color(&self) -> &'static str {
        self.bucket.color()
    }

    /// Tooltip title: exact count below saturation, a floor above it
    pub fn title(&self) -> String {
        match self.bucket {
            Bucket::None => "No contributions".to_string(),
            Bucket::Saturated => format!("{}+ contributions", SATURATION_THRESHOLD),
            _ => format!("{} contributions", self.count),
        }
    }

    pub fn tooltip(&self, date: NaiveDate) -> Tooltip {
        let date = match self.bucket {
            Bucket::None => None,
            _ => Some(format_long_date(date)),
        };
        Tooltip {
            title: self.title(),
            date,
        }
    }
}

/// Classify a raw count. Negative counts fail with `InvalidCount`.
pub fn classify(count: i64) -> Result<Classification> {
    let count = u64::try_from(count).map_err(|_| GraphError::InvalidCount(count))?;
    Ok(Classification::of(count))
}

/// Full weekday/month/day/year, e.g. "Tuesday, March 4, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
