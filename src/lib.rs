//! Contribution heatmap engine with a terminal front-end

pub mod cli;
pub mod config;
pub mod graph;
pub mod logging;
pub mod services;
pub mod tui;
pub mod types;
