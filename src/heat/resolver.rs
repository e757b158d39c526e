//! Resolve the heat around a selected region.
//!
//! Given a selection and both flow maps, every related region gets a
//! log-scaled magnitude, a label and a color on the green -> red gradient.
//! The flow maps are only read, so they can be reused for any number of
//! selections.

use super::color::{HslaColor, MagnitudeRange};
use super::label::{combined_label, inflow_label, outflow_label};
use crate::aggregator::{FlowMaps, InflowMap, OutflowMap, RegionQuantities};
use crate::utils::config::HeatConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Heat of one related region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatEntry {
    /// Display label, e.g. `To 8 From 5`
    pub label: String,

    /// log2 of the shown quantity (or of both quantities summed)
    pub magnitude: f64,

    /// Normalized position in [0, 1]; `None` when all magnitudes are equal
    pub intensity: Option<f64>,

    /// Fill color
    pub color: HslaColor,
}

/// Related region -> heat
pub type HeatResult = BTreeMap<String, HeatEntry>;

/// Which flow maps hold an entry for the selected region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatMode {
    OutflowOnly,
    InflowOnly,
    Both,
    Unrelated,
}

/// Resolve heat with the default configuration
///
/// **Public** - main entry point for heat resolution
pub fn resolve_heat(selected: Option<&str>, outflow: &OutflowMap, inflow: &InflowMap) -> HeatResult {
    let config = HeatConfig::default();
    resolve_sides(
        selected,
        selected.and_then(|r| outflow.get(r)),
        selected.and_then(|r| inflow.get(r)),
        &config,
    )
}

/// Resolve heat for `selected` using `config` thresholds and colors
///
/// No selection, or a region absent from both maps, gives an empty result.
pub fn resolve_heat_with(selected: Option<&str>, maps: &FlowMaps, config: &HeatConfig) -> HeatResult {
    resolve_sides(
        selected,
        selected.and_then(|r| maps.outflow_of(r)),
        selected.and_then(|r| maps.inflow_of(r)),
        config,
    )
}

/// Classify which maps know about `region`
pub fn heat_mode(region: &str, maps: &FlowMaps) -> HeatMode {
    match (maps.outflow_of(region), maps.inflow_of(region)) {
        (Some(_), None) => HeatMode::OutflowOnly,
        (None, Some(_)) => HeatMode::InflowOnly,
        (Some(_), Some(_)) => HeatMode::Both,
        (None, None) => HeatMode::Unrelated,
    }
}

/// **Private** - shared body of the two entry points
fn resolve_sides(
    selected: Option<&str>,
    outgoing: Option<&RegionQuantities>,
    incoming: Option<&RegionQuantities>,
    config: &HeatConfig,
) -> HeatResult {
    let Some(region) = selected else {
        debug!("No region selected, heat is empty");
        return HeatResult::new();
    };

    if outgoing.is_none() && incoming.is_none() {
        debug!("Region {} has no recorded flows", region);
        return HeatResult::new();
    }

    let weighted = merge_sides(outgoing, incoming, config);

    debug!("Region {} relates to {} regions above the noise floor", region, weighted.len());
    colorize(weighted, config)
}

/// Combine both directions per related region
///
/// A side only counts when its quantity is above the noise floor; a side
/// below it is dropped entirely, neither weighted nor labelled.
fn merge_sides(
    outgoing: Option<&RegionQuantities>,
    incoming: Option<&RegionQuantities>,
    config: &HeatConfig,
) -> Vec<(String, f64, String)> {
    let significant = |side: Option<&RegionQuantities>, name: &str| {
        side.and_then(|q| q.get(name))
            .copied()
            .filter(|qty| *qty > config.noise_floor)
    };

    let related: BTreeSet<&String> = outgoing
        .into_iter()
        .chain(incoming)
        .flat_map(|side| side.keys())
        .filter(|name| !config.is_reserved(name))
        .collect();

    related
        .into_iter()
        .filter_map(|name| {
            let (magnitude, label) = match (significant(outgoing, name), significant(incoming, name)) {
                (Some(out), Some(inc)) => ((out + inc).min(f64::MAX).log2(), combined_label(out, inc)),
                (Some(out), None) => (out.log2(), outflow_label(out)),
                (None, Some(inc)) => (inc.log2(), inflow_label(inc)),
                (None, None) => return None,
            };
            Some((name.clone(), magnitude, label))
        })
        .collect()
}

/// Normalize magnitudes and assign colors
fn colorize(weighted: Vec<(String, f64, String)>, config: &HeatConfig) -> HeatResult {
    let Some(range) = MagnitudeRange::measure(weighted.iter().map(|(_, m, _)| *m)) else {
        return HeatResult::new();
    };

    weighted
        .into_iter()
        .map(|(name, magnitude, label)| {
            let intensity = range.normalize(magnitude);
            let color = match intensity {
                Some(p) => HslaColor::from_intensity(p, &config.color),
                None => HslaColor::neutral(&config.color),
            };
            (
                name,
                HeatEntry {
                    label,
                    magnitude,
                    intensity,
                    color,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::TransitionRow;
    use pretty_assertions::assert_eq;

    fn row(source: &str, flows: &[(&str, f64)]) -> TransitionRow {
        TransitionRow::new(
            source,
            flows.iter().map(|(d, q)| (d.to_string(), *q)).collect(),
        )
    }

    fn resolve(selected: &str, maps: &FlowMaps) -> HeatResult {
        resolve_heat(Some(selected), &maps.outflow, &maps.inflow)
    }

    #[test]
    fn test_outflow_only() {
        let maps = aggregate(&[row("A", &[("B", 5.0), ("C", 2.0)]), row("A", &[("B", 3.0)])]);
        assert_eq!(heat_mode("A", &maps), HeatMode::OutflowOnly);

        let heat = resolve("A", &maps);
        assert_eq!(heat.len(), 1);
        let b = &heat["B"];
        assert_eq!(b.label, "To 8");
        assert_eq!(b.magnitude, 3.0);
        assert_eq!(b.color.to_css(), "hsla(60, 100%, 50%, 0.3)");
    }

    #[test]
    fn test_inflow_only() {
        let maps = aggregate(&[row("X", &[("A", 16.0)]), row("Y", &[("A", 4.0)]), row("Z", &[("A", 1.0)])]);
        assert_eq!(heat_mode("A", &maps), HeatMode::InflowOnly);

        let heat = resolve("A", &maps);
        assert_eq!(heat.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
        assert_eq!(heat["X"].label, "From 16");
        assert_eq!(heat["X"].color.hue, 0.0);
        assert_eq!(heat["Y"].label, "From 4");
        assert_eq!(heat["Y"].color.hue, 120.0);
    }

    #[test]
    fn test_both_directions_combined() {
        let maps = aggregate(&[
            row("A", &[("B", 10.0), ("C", 10.0), ("D", 2.0), ("E", 1.0), ("F", 6.0)]),
            row("B", &[("A", 6.0)]),
            row("C", &[("A", 2.0)]),
            row("D", &[("A", 12.0)]),
            row("E", &[("A", 2.0)]),
            row("G", &[("A", 8.0)]),
        ]);
        assert_eq!(heat_mode("A", &maps), HeatMode::Both);

        let heat = resolve("A", &maps);
        assert_eq!(heat["B"].label, "To 10 From 6");
        assert_eq!(heat["B"].magnitude, 16f64.log2());
        assert_eq!(heat["C"].label, "To 10");
        assert_eq!(heat["C"].magnitude, 10f64.log2());
        assert_eq!(heat["D"].label, "From 12");
        assert_eq!(heat["D"].magnitude, 12f64.log2());
        assert!(!heat.contains_key("E"));
        assert_eq!(heat["F"].label, "To 6");
        assert_eq!(heat["G"].label, "From 8");
    }

    #[test]
    fn test_corridor_never_emitted() {
        let maps = aggregate(&[
            row("A", &[("Corridor", 50.0), ("B", 4.0)]),
            row("Corridor", &[("A", 40.0)]),
        ]);
        let heat = resolve("A", &maps);
        assert!(!heat.contains_key("Corridor"));
        assert_eq!(heat.len(), 1);
        assert_eq!(maps.outflow["A"]["Corridor"], 50.0);
    }

    #[test]
    fn test_no_selection_or_unknown_region() {
        let maps = aggregate(&[row("A", &[("B", 5.0)])]);
        assert!(resolve_heat(None, &maps.outflow, &maps.inflow).is_empty());
        assert!(resolve("Nowhere", &maps).is_empty());
        assert_eq!(heat_mode("Nowhere", &maps), HeatMode::Unrelated);
    }

    #[test]
    fn test_everything_below_noise_floor() {
        let maps = aggregate(&[row("A", &[("B", 3.0), ("C", 1.0)])]);
        assert!(resolve("A", &maps).is_empty());
    }

    #[test]
    fn test_maps_untouched_across_selections() {
        let maps = aggregate(&[
            row("A", &[("Corridor", 9.0), ("B", 10.0)]),
            row("B", &[("A", 2.0)]),
        ]);
        let before = maps.clone();

        let first = resolve("A", &maps);
        let _ = resolve("B", &maps);
        let second = resolve("A", &maps);

        assert_eq!(first, second);
        assert_eq!(maps, before);
    }

    #[test]
    fn test_huge_combined_quantities_stay_finite() {
        let maps = aggregate(&[
            row("A", &[("B", f64::MAX), ("C", 5.0)]),
            row("B", &[("A", f64::MAX)]),
        ]);
        let heat = resolve("A", &maps);

        assert_eq!(heat["B"].magnitude, f64::MAX.log2());
        assert_eq!(heat["B"].color.hue, 0.0);
        assert_eq!(heat["C"].color.hue, 120.0);
    }

    #[test]
    fn test_configured_noise_floor() {
        let maps = aggregate(&[row("A", &[("B", 5.0), ("C", 20.0)])]);
        let config = HeatConfig {
            noise_floor: 10.0,
            ..HeatConfig::default()
        };
        let heat = resolve_heat_with(Some("A"), &maps, &config);
        assert_eq!(heat.keys().collect::<Vec<_>>(), vec!["C"]);
    }
}
