//! Output writers for heat reports and flow maps.

pub mod json;
pub mod schema;

// Re-export main functions
pub use json::{read_report, report_to_string, write_json, write_report};
pub use schema::{to_report, HeatReport};
