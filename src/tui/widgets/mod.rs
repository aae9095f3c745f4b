//! TUI widgets

pub mod heatmap;
pub mod help;
pub mod legend;
pub mod overview;
pub mod spinner;
