//! Activity sources: where the raw date → count mapping comes from
//!
//! The graph itself never sees a failed fetch. [`load_or_empty`] logs the
//! failure and hands back an empty record, which renders as an all-zero grid.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::{ActivityRecord, GraphError, Result};

/// Default activity feed
pub const DEFAULT_FEED_URL: &str = "https://dpg.gg/test/calendar.json";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("contribgraph/", env!("CARGO_PKG_VERSION"));

/// Trait for anything that can produce an activity record
pub trait ActivitySource: Send + Sync {
    /// Short human-readable name (URL or path)
    fn name(&self) -> &str;

    /// Load the full record
    fn load(&self) -> Result<ActivityRecord>;
}

/// Feed body: `{"YYYY-MM-DD": count, ...}`
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct FeedBody(HashMap<String, i64>);

/// Fetches the record as JSON over HTTP
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

impl ActivitySource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn load(&self) -> Result<ActivityRecord> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GraphError::DataUnavailable(format!("HTTP client error: {}", e)))?;

        let response = client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| GraphError::DataUnavailable(format!("HTTP request failed: {}", e)))?;

        let body: FeedBody = response
            .json()
            .map_err(|e| GraphError::Parse(format!("invalid activity JSON: {}", e)))?;

        ActivityRecord::from_raw(body.0)
    }
}

/// Reads the record from a local JSON file
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivitySource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<ActivityRecord> {
        let mut bytes = fs::read(&self.path)?;
        ActivityRecord::from_json_slice(&mut bytes)
    }
}

/// Load from `source`, degrading to an empty record on any failure
pub fn load_or_empty(source: &dyn ActivitySource) -> ActivityRecord {
    match source.load() {
        Ok(record) => {
            tracing::info!(
                source = source.name(),
                days = record.len(),
                "loaded activity record"
            );
            record
        }
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                error = %e,
                "activity data unavailable, rendering empty graph"
            );
            ActivityRecord::new()
        }
    }
}
