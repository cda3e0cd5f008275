use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Drag sensitivity and momentum decay parameters.
pub struct MotionOptions {
    /// Degrees of rotation per pixel of horizontal pointer travel.
    #[schemars(title = "Drag Sensitivity", range(min = 0.005, max = 0.5), extend("step" = 0.005))]
    pub velocity_scale: f64,
    /// Per-frame velocity multiplier after release, in (0, 1).
    #[schemars(title = "Friction", range(min = 0.8, max = 0.999), extend("step" = 0.001))]
    pub friction: f64,
    /// Speed (degrees per update) below which the ring stops spinning.
    #[schemars(skip)]
    pub momentum_threshold: f64,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            velocity_scale: 0.05,
            friction: 0.99,
            momentum_threshold: 0.1,
        }
    }
}

impl MotionOptions {
    pub(crate) fn validate(&self) -> Result<(), CarouselError> {
        if !self.velocity_scale.is_finite() {
            return Err(CarouselError::InvalidOptions(format!(
                "velocity_scale must be finite, got {}",
                self.velocity_scale
            )));
        }
        // friction >= 1 never converges, friction <= 0 flips or kills the spin
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(CarouselError::InvalidOptions(format!(
                "friction must be in (0, 1), got {}",
                self.friction
            )));
        }
        let threshold = self.momentum_threshold;
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(CarouselError::InvalidOptions(format!(
                "momentum_threshold must be positive, got {threshold}"
            )));
        }
        Ok(())
    }
}
