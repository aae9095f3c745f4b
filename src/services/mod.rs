//! Services for retrieving activity data

pub mod source;

pub use source::{load_or_empty, ActivitySource, FileSource, HttpSource, DEFAULT_FEED_URL};
