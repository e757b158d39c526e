//! Output JSON schema definitions for heat reports.
//!
//! Schema is versioned to allow future evolution.

use crate::heat::{CatalogueOverlay, HeatResult};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Selected region, `None` when nothing is selected
    pub region: Option<String>,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Heat per related region
    pub entries: HeatResult,

    /// Fill per catalogued region, one entry per region file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<CatalogueOverlay>,
}

/// Build a report stamped with the current time
pub fn to_report(
    region: Option<&str>,
    entries: HeatResult,
    overlays: Vec<CatalogueOverlay>,
) -> HeatReport {
    HeatReport {
        version: SCHEMA_VERSION.to_string(),
        region: region.map(str::to_string),
        generated_at: chrono::Utc::now().to_rfc3339(),
        entries,
        overlays,
    }
}
