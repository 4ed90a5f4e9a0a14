//! Canvas configuration: the reference frame and instance scale limits.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Dimensions and scaling limits of the planner canvas.
///
/// Hosts normally run with the default 800×600 reference frame; the type is
/// serde-deserializable so an embedding page can override it from
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in canvas units.
    pub width: f64,
    /// Canvas height in canvas units.
    pub height: f64,
    /// Smallest allowed instance scale.
    pub min_scale: f64,
    /// Largest allowed instance scale.
    pub max_scale: f64,
    /// Scale change applied per grow/shrink step.
    pub scale_step: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: consts::CANVAS_WIDTH,
            height: consts::CANVAS_HEIGHT,
            min_scale: consts::MIN_SCALE,
            max_scale: consts::MAX_SCALE,
            scale_step: consts::SCALE_STEP,
        }
    }
}

impl CanvasConfig {
    /// Clamp a scale factor to the configured limits.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}
