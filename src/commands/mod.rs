//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod heat;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use aggregate::{execute_aggregate, largest_row, validate_aggregate_args};
pub use heat::{execute_heat, format_heat_table, validate_args};
pub use models::{AggregateArgs, HeatArgs};
pub use utils::{display_version, validate_report_file};
