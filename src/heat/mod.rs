//! Heat resolution for a selected region.
//!
//! This module turns flow maps into:
//! - Per-region magnitudes and labels
//! - Normalized HSLA colors
//! - Region overlays for a renderer

pub mod color;
pub mod label;
pub mod overlay;
pub mod resolver;

// Re-export main types and functions
pub use color::{HslaColor, MagnitudeRange};
pub use overlay::{build_catalogue_overlay, build_overlay, CatalogueOverlay, RegionOverlay};
pub use resolver::{heat_mode, resolve_heat, resolve_heat_with, HeatEntry, HeatMode, HeatResult};
