//! Configuration and constants for heat resolution.
//!
//! Every tunable has a constant default here. A TOML file can override any
//! subset of them through [`HeatConfig`].

use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current heat report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Row fields that carry document metadata rather than a destination
pub const EXCLUDED_FIELDS: &[&str] = &["_id", "_index", "_type", "Source", "timestamp"];

/// Row field holding the origin region name
pub const SOURCE_FIELD: &str = "Source";

/// Origin used for rows without a usable `Source` field
pub const UNKNOWN_ORIGIN: &str = "(unknown)";

/// Region name that is aggregated but never shown
pub const RESERVED_REGION: &str = "Corridor";

/// Quantities at or below this value are treated as noise
pub const NOISE_FLOOR: f64 = 3.0;

// HSLA color constants. Hue runs from 120 (green, lowest) to 0 (red, highest).
pub const LOW_HUE: f64 = 120.0;
pub const HIGH_HUE: f64 = 0.0;
pub const NEUTRAL_HUE: f64 = 60.0;
pub const SATURATION_PERCENT: f64 = 100.0;
pub const LIGHTNESS_PERCENT: f64 = 50.0;
pub const FILL_ALPHA: f64 = 0.3;

/// Fill used for regions without heat
pub const TRANSPARENT_FILL: &str = "#ffffff00";

/// Tunables for aggregation and heat resolution
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeatConfig {
    /// Quantities must be strictly greater than this to be shown
    pub noise_floor: f64,

    /// Region names never emitted by the resolver, on top of `RESERVED_REGION`
    pub reserved_regions: Vec<String>,

    /// Row fields never interpreted as destinations, on top of `EXCLUDED_FIELDS`
    pub excluded_fields: Vec<String>,

    /// Remove origins that recorded no destination at all
    pub prune_empty_origins: bool,

    /// Color parameters
    pub color: ColorConfig,
}

/// Color parameters of the heat gradient
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorConfig {
    pub low_hue: f64,
    pub high_hue: f64,
    pub neutral_hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            noise_floor: NOISE_FLOOR,
            reserved_regions: vec![RESERVED_REGION.to_string()],
            excluded_fields: EXCLUDED_FIELDS.iter().map(|f| f.to_string()).collect(),
            prune_empty_origins: false,
            color: ColorConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            low_hue: LOW_HUE,
            high_hue: HIGH_HUE,
            neutral_hue: NEUTRAL_HUE,
            saturation: SATURATION_PERCENT,
            lightness: LIGHTNESS_PERCENT,
            alpha: FILL_ALPHA,
        }
    }
}

impl HeatConfig {
    /// Whether `region` is one of the reserved names
    ///
    /// `RESERVED_REGION` is always reserved, whatever the configured list says.
    pub fn is_reserved(&self, region: &str) -> bool {
        region == RESERVED_REGION || self.reserved_regions.iter().any(|r| r == region)
    }

    /// Whether `field` is a metadata field
    ///
    /// `EXCLUDED_FIELDS` always apply; the configured list only adds to them.
    pub fn is_excluded_field(&self, field: &str) -> bool {
        EXCLUDED_FIELDS.contains(&field) || self.excluded_fields.iter().any(|f| f == field)
    }
}

/// Load a heat configuration from a TOML file
///
/// Missing keys fall back to the defaults above.
pub fn load_config(path: impl AsRef<Path>) -> Result<HeatConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading heat config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse a heat configuration from TOML text
pub fn parse_config(contents: &str) -> Result<HeatConfig, ConfigError> {
    let config: HeatConfig = toml::from_str(contents)?;
    Ok(config)
}
