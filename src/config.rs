// Copyright 2025 Cowboy AI, LLC.

//! Rendering configuration

use crate::composer::DEFAULT_PALETTE_SIZE;
use crate::errors::{OverlayError, VizResult};
use serde::{Deserialize, Serialize};

/// Presentation settings handed to the render boundary
///
/// None of these affect derived geometry; they only shape how descriptors
/// are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Line width of ordinary term curves
    pub line_width: f64,
    /// Line width of the highlighted term
    pub emphasized_line_width: f64,
    /// Opacity of activation fills
    pub fill_alpha: f64,
    /// Line width of the crisp value marker
    pub marker_line_width: f64,
    /// Legend entry of the crisp value marker
    pub marker_label: String,
    /// Opacity of the legend frame
    pub legend_frame_alpha: f64,
    /// Upper y limit; slightly above 1 so full membership is not clipped
    pub y_max: f64,
    /// Vertical axis label
    pub y_label: String,
    /// Number of distinct colors in the backend's cycle
    pub palette_size: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            emphasized_line_width: 3.0,
            fill_alpha: 0.4,
            marker_line_width: 3.0,
            marker_label: "crisp value".to_string(),
            legend_frame_alpha: 0.5,
            y_max: 1.01,
            y_label: "Membership".to_string(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl OverlayConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> VizResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges
    pub fn validate(&self) -> VizResult<()> {
        if self.palette_size == 0 {
            return Err(OverlayError::configuration("palette_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) || !(0.0..=1.0).contains(&self.legend_frame_alpha)
        {
            return Err(OverlayError::configuration("alpha values must be in [0, 1]"));
        }
        if self.line_width <= 0.0 || self.emphasized_line_width <= 0.0 || self.marker_line_width <= 0.0
        {
            return Err(OverlayError::configuration("line widths must be positive"));
        }
        if self.y_max <= 0.0 {
            return Err(OverlayError::configuration("y_max must be positive"));
        }
        Ok(())
    }
}
