//! Type definitions for contribgraph

mod activity;
mod error;

pub use activity::*;
pub use error::*;
