//! Magnitude normalization and the green -> red heat gradient.

use super::label::format_number;
use crate::utils::config::ColorConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSLA color, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslaColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl HslaColor {
    /// Color at normalized position `p` in [0, 1]: 0 is the low hue, 1 the high hue
    pub fn from_intensity(p: f64, config: &ColorConfig) -> Self {
        let hue = p * (config.high_hue - config.low_hue) + config.low_hue;
        Self::with_hue(hue, config)
    }

    /// Color used when every magnitude is the same
    pub fn neutral(config: &ColorConfig) -> Self {
        Self::with_hue(config.neutral_hue, config)
    }

    fn with_hue(hue: f64, config: &ColorConfig) -> Self {
        Self {
            hue,
            saturation: config.saturation,
            lightness: config.lightness,
            alpha: config.alpha,
        }
    }

    /// CSS string, e.g. `hsla(120, 100%, 50%, 0.3)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HslaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            format_number(self.hue),
            format_number(self.saturation),
            format_number(self.lightness),
            format_number(self.alpha)
        )
    }
}

/// Minimum and spread of a set of magnitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeRange {
    pub min: f64,
    pub range: f64,
}

impl MagnitudeRange {
    /// Measure `magnitudes`; `None` when there are none
    pub fn measure(magnitudes: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = magnitudes.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(Self { min, range: max - min })
    }

    /// All magnitudes are equal (including a single one)
    pub fn is_degenerate(&self) -> bool {
        self.range == 0.0
    }

    /// Position of `magnitude` in [0, 1]; `None` when degenerate
    pub fn normalize(&self, magnitude: f64) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some((magnitude - self.min) / self.range)
        }
    }
}
