use thiserror::Error;

/// contribgraph error types
#[derive(Error, Debug)]
pub enum GraphError {
    /// Trailing window must cover at least one week
    #[error("invalid window: {0} weeks (must be at least 1)")]
    InvalidWindow(i64),

    /// Activity counts are never negative
    #[error("invalid count: {0} (must be non-negative)")]
    InvalidCount(i64),

    /// Activity feed could not be retrieved
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Failed to parse an activity record
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for contribgraph
pub type Result<T> = std::result::Result<T, GraphError>;
