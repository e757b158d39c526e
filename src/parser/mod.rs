//! Input parsing.
//!
//! This module handles:
//! - Converting untyped flow documents into typed rows
//! - Reading region names from GeoJSON

pub mod geojson;
pub mod rows;
pub mod schema;

// Re-export main types
pub use geojson::{parse_region_names, read_region_names};
pub use rows::{parse_flow_table, parse_flow_table_with, parse_row, read_flow_table};
pub use schema::{FlowTable, TransitionRow};
