//! Activity record: sparse mapping from calendar day to contribution count

use chrono::NaiveDate;
use std::collections::HashMap;

use super::{GraphError, Result};

/// ISO calendar date format used for record keys (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sparse date → count mapping. Dates absent from the record count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRecord {
    counts: HashMap<NaiveDate, u64>,
}

impl ActivityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a count for `date`, replacing any previous value.
    /// Negative counts are rejected with `InvalidCount`.
    pub fn insert(&mut self, date: NaiveDate, count: i64) -> Result<()> {
        let count = u64::try_from(count).map_err(|_| GraphError::InvalidCount(count))?;
        self.counts.insert(date, count);
        Ok(())
    }

    /// Count for `date` (0 when absent)
    pub fn get(&self, date: NaiveDate) -> u64 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.counts.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all recorded counts
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.counts.iter().map(|(&date, &count)| (date, count))
    }

    /// Build a record from raw `"YYYY-MM-DD" -> count` pairs
    pub fn from_raw<I, K>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut record = Self::new();
        for (key, count) in raw {
            let date = parse_date(key.as_ref())?;
            record.insert(date, count)?;
        }
        Ok(record)
    }

    /// Parse a JSON object body (SIMD accelerated; the buffer is used as scratch space)
    pub fn from_json_slice(bytes: &mut [u8]) -> Result<Self> {
        let raw: HashMap<String, i64> = simd_json::serde::from_slice(bytes)
            .map_err(|e| GraphError::Parse(format!("invalid activity JSON: {}", e)))?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut bytes = json.as_bytes().to_vec();
        Self::from_json_slice(&mut bytes)
    }
}

impl FromIterator<(NaiveDate, u64)> for ActivityRecord {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date key
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| GraphError::Parse(format!("invalid date '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_date_is_zero() {
        let record = ActivityRecord::new();
        assert_eq!(record.get(date(2024, 1, 7)), 0);
        assert!(!record.contains(date(2024, 1, 7)));
        assert!(record.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut record = ActivityRecord::new();
        record.insert(date(2024, 1, 7), 5).unwrap();
        record.insert(date(2024, 1, 7), 8).unwrap();
        assert_eq!(record.get(date(2024, 1, 7)), 8);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_insert_negative_rejected() {
        let mut record = ActivityRecord::new();
        let err = record.insert(date(2024, 1, 7), -1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCount(-1)));
        assert!(record.is_empty());
    }

    #[test]
    fn test_total_sums_counts() {
        let record: ActivityRecord = [(date(2024, 1, 1), 3), (date(2024, 1, 2), 4)]
            .into_iter()
            .collect();
        assert_eq!(record.total(), 7);
    }

    #[test]
    fn test_from_json_str() {
        let record =
            ActivityRecord::from_json_str(r#"{"2024-01-07": 5, "2024-01-03": 12}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get(date(2024, 1, 3)), 12);
        assert_eq!(record.get(date(2024, 1, 7)), 5);
    }

    #[test]
    fn test_from_json_empty_object() {
        let record = ActivityRecord::from_json_str("{}").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_from_json_bad_date_key() {
        let err = ActivityRecord::from_json_str(r#"{"yesterday": 5}"#).unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn test_from_json_negative_count() {
        let err = ActivityRecord::from_json_str(r#"{"2024-01-07": -2}"#).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCount(-2)));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        assert!(ActivityRecord::from_json_str(r#"[1, 2, 3]"#).is_err());
        assert!(ActivityRecord::from_json_str(r#"{"2024-01-07": "five"}"#).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-04").unwrap(), date(2025, 3, 4));
        assert!(parse_date("2025-13-01").is_err());
    }
}
