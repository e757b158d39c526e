//! Build directional adjacency maps from a flow table.
//!
//! `outflow[origin][destination]` and `inflow[destination][origin]` hold the
//! same accumulated quantities, indexed from opposite ends.

use crate::parser::TransitionRow;
use crate::utils::config::HeatConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Region name -> accumulated quantity
pub type RegionQuantities = BTreeMap<String, f64>;

/// Origin -> (destination -> quantity)
pub type OutflowMap = BTreeMap<String, RegionQuantities>;

/// Destination -> (origin -> quantity)
pub type InflowMap = BTreeMap<String, RegionQuantities>;

/// Both adjacency maps of one flow table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMaps {
    pub outflow: OutflowMap,
    pub inflow: InflowMap,
}

impl FlowMaps {
    /// Destinations reached from `origin`
    pub fn outflow_of(&self, origin: &str) -> Option<&RegionQuantities> {
        self.outflow.get(origin)
    }

    /// Origins feeding into `destination`
    pub fn inflow_of(&self, destination: &str) -> Option<&RegionQuantities> {
        self.inflow.get(destination)
    }

    /// True when no row produced any entry
    pub fn is_empty(&self) -> bool {
        self.outflow.is_empty() && self.inflow.is_empty()
    }
}

/// Aggregate rows with the default configuration
///
/// **Public** - main entry point for aggregation
pub fn aggregate(rows: &[TransitionRow]) -> FlowMaps {
    aggregate_with(rows, &HeatConfig::default())
}

/// Aggregate rows into outflow and inflow maps
///
/// Every row's origin gets an outflow entry, even when the row carries no
/// flows. Those empty entries are only removed when
/// `config.prune_empty_origins` is set.
pub fn aggregate_with(rows: &[TransitionRow], config: &HeatConfig) -> FlowMaps {
    debug!("Aggregating {} transition rows", rows.len());

    let mut maps = FlowMaps::default();

    for row in rows {
        let destinations = maps.outflow.entry(row.source.clone()).or_default();

        for (destination, qty) in &row.flows {
            // Rows built by the parser only carry positive flows, but rows
            // can also be constructed by hand.
            if *qty <= 0.0 {
                continue;
            }

            accumulate(destinations.entry(destination.clone()).or_insert(0.0), *qty);

            accumulate(
                maps.inflow
                    .entry(destination.clone())
                    .or_default()
                    .entry(row.source.clone())
                    .or_insert(0.0),
                *qty,
            );
        }
    }

    if config.prune_empty_origins {
        let before = maps.outflow.len();
        maps.outflow.retain(|_, destinations| !destinations.is_empty());
        debug!("Pruned {} origins without destinations", before - maps.outflow.len());
    }

    debug!(
        "Aggregated {} origins and {} destinations",
        maps.outflow.len(),
        maps.inflow.len()
    );

    maps
}

/// Add `qty` to a running total, saturating at `f64::MAX`
fn accumulate(total: &mut f64, qty: f64) {
    *total = (*total + qty).min(f64::MAX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(source: &str, flows: &[(&str, f64)]) -> TransitionRow {
        TransitionRow::new(
            source,
            flows.iter().map(|(d, q)| (d.to_string(), *q)).collect(),
        )
    }

    #[test]
    fn test_accumulates_across_rows() {
        let maps = aggregate(&[row("A", &[("B", 5.0), ("C", 2.0)]), row("A", &[("B", 3.0)])]);

        let a = maps.outflow_of("A").unwrap();
        assert_eq!(a.get("B"), Some(&8.0));
        assert_eq!(a.get("C"), Some(&2.0));
        assert_eq!(maps.inflow_of("B").unwrap().get("A"), Some(&8.0));
        assert_eq!(maps.inflow_of("C").unwrap().get("A"), Some(&2.0));
    }

    #[test]
    fn test_hand_built_non_positive_flows_ignored() {
        let maps = aggregate(&[row("A", &[("B", 0.0), ("C", -1.0), ("D", 1.0)])]);
        assert_eq!(maps.outflow_of("A").unwrap().len(), 1);
        assert!(maps.inflow_of("B").is_none());
    }

    #[test]
    fn test_empty_origin_kept_by_default() {
        let maps = aggregate(&[row("Idle", &[])]);
        assert!(maps.outflow_of("Idle").unwrap().is_empty());
        assert!(maps.inflow.is_empty());
    }

    #[test]
    fn test_empty_origin_pruned_when_configured() {
        let config = HeatConfig {
            prune_empty_origins: true,
            ..HeatConfig::default()
        };
        let maps = aggregate_with(&[row("Idle", &[]), row("A", &[("B", 4.0)])], &config);
        assert!(maps.outflow_of("Idle").is_none());
        assert!(maps.outflow_of("A").is_some());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let maps = aggregate(&[row("A", &[("B", 1e308)]), row("A", &[("B", 1e308)])]);
        assert_eq!(maps.outflow["A"]["B"], f64::MAX);
        assert_eq!(maps.inflow["B"]["A"], f64::MAX);
    }

    #[test]
    fn test_empty_table() {
        assert!(aggregate(&[]).is_empty());
    }
}
