//! Aggregation of transition rows into directional flow maps.
//!
//! This module transforms parsed rows into:
//! - Outflow map (origin -> destination -> quantity)
//! - Inflow map (destination -> origin -> quantity)
//! - Flow summary statistics

pub mod flows;
pub mod stats;

// Re-export main types and functions
pub use flows::{aggregate, aggregate_with, FlowMaps, InflowMap, OutflowMap, RegionQuantities};
pub use stats::{summarize_flows, FlowLink, FlowSummary};
