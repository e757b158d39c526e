//! Join resolved heat with the region catalogue.
//!
//! Every known region gets a fill. Regions without heat get the transparent
//! default and no label.

use super::resolver::HeatResult;
use crate::utils::config::TRANSPARENT_FILL;
use serde::{Deserialize, Serialize};

/// Fill and label for one map region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionOverlay {
    pub name: String,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Overlay of one region catalogue (one map)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueOverlay {
    /// Where the catalogue came from, e.g. its file path
    pub catalogue: String,
    pub regions: Vec<RegionOverlay>,
}

/// Build the overlay of a named catalogue
pub fn build_catalogue_overlay(
    catalogue: impl Into<String>,
    regions: &[String],
    heat: &HeatResult,
) -> CatalogueOverlay {
    CatalogueOverlay {
        catalogue: catalogue.into(),
        regions: build_overlay(regions, heat),
    }
}

/// Build one overlay per region, in catalogue order
pub fn build_overlay(regions: &[String], heat: &HeatResult) -> Vec<RegionOverlay> {
    regions
        .iter()
        .map(|name| match heat.get(name) {
            Some(entry) => RegionOverlay {
                name: name.clone(),
                fill: entry.color.to_css(),
                label: Some(entry.label.clone()),
            },
            None => RegionOverlay {
                name: name.clone(),
                fill: TRANSPARENT_FILL.to_string(),
                label: None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::heat::resolve_heat;
    use crate::parser::TransitionRow;

    #[test]
    fn test_overlay_defaults_to_transparent() {
        let maps = aggregate(&[TransitionRow::new("A", vec![("B".to_string(), 8.0)])]);
        let heat = resolve_heat(Some("A"), &maps.outflow, &maps.inflow);

        let regions = vec!["A".to_string(), "B".to_string(), "Corridor".to_string()];
        let overlay = build_overlay(&regions, &heat);

        assert_eq!(overlay.len(), 3);
        assert_eq!(overlay[0].fill, "#ffffff00");
        assert!(overlay[0].label.is_none());
        assert_eq!(overlay[1].fill, "hsla(60, 100%, 50%, 0.3)");
        assert_eq!(overlay[1].label.as_deref(), Some("To 8"));
        assert_eq!(overlay[2].fill, "#ffffff00");
    }

    #[test]
    fn test_catalogues_share_one_heat() {
        let maps = aggregate(&[TransitionRow::new(
            "A",
            vec![("B".to_string(), 8.0), ("C".to_string(), 64.0)],
        )]);
        let heat = resolve_heat(Some("A"), &maps.outflow, &maps.inflow);

        let floor = build_catalogue_overlay("floor1", &["B".to_string()], &heat);
        let upper = build_catalogue_overlay("floor2", &["C".to_string(), "D".to_string()], &heat);

        assert_eq!(floor.catalogue, "floor1");
        assert_eq!(floor.regions[0].fill, "hsla(120, 100%, 50%, 0.3)");
        assert_eq!(upper.regions[0].fill, "hsla(0, 100%, 50%, 0.3)");
        assert_eq!(upper.regions[1].fill, "#ffffff00");
    }
}
