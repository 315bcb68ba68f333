//! Persistence and presentation of analysis results.
//!
//! The analyzers compute; this module writes. Three tab-separated file
//! artifacts carry the curves, the terminal formatter renders the fixed
//! summary block and any warnings, and the JSON formatter serializes the
//! full report for machine consumption.

mod files;
mod json;
mod terminal;

pub use files::{write_block_curve, write_correlation_curve, write_histogram};
pub use json::{to_json, to_json_pretty};
pub use terminal::{format_summary, format_warnings};
