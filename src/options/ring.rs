use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ring", inline)]
#[serde(default)]
/// Ring layout and camera placement.
pub struct RingOptions {
    /// Number of panels on the ring. Must be at least 1.
    #[schemars(title = "Items", range(min = 1, max = 64))]
    pub item_count: u32,
    /// Panel width in CSS pixels.
    #[schemars(title = "Item Width", range(min = 50.0, max = 1200.0), extend("step" = 1.0))]
    pub item_width: f64,
    /// Spacing multiplier pulling each panel back toward the axis.
    #[schemars(title = "Gap", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub gap: f64,
    /// How far the ring is pushed along the viewing axis.
    #[schemars(title = "View Depth", range(min = 0.0, max = 2000.0), extend("step" = 1.0))]
    pub view_depth: f64,
    /// Fixed tilt of the ring in degrees.
    #[schemars(title = "Tilt", range(min = -45.0, max = 45.0), extend("step" = 0.5))]
    pub tilt: f64,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            item_count: 8,
            item_width: 300.0,
            gap: 1.7,
            view_depth: 754.0,
            tilt: 0.0,
        }
    }
}

impl RingOptions {
    pub(crate) fn validate(&self) -> Result<(), CarouselError> {
        if self.item_count == 0 {
            return Err(CarouselError::InvalidOptions(
                "item_count must be at least 1".into(),
            ));
        }
        if !(self.item_width > 0.0 && self.item_width.is_finite()) {
            return Err(CarouselError::InvalidOptions(format!(
                "item_width must be positive, got {}",
                self.item_width
            )));
        }
        for (name, value) in [
            ("gap", self.gap),
            ("view_depth", self.view_depth),
            ("tilt", self.tilt),
        ] {
            if !value.is_finite() {
                return Err(CarouselError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
