//! Carousel configuration with TOML preset and JSON support.
//!
//! Ring layout and motion tuning are split into two sections. Every field
//! has a default, so partial TOML (e.g. only `[motion]`) or a partial JS
//! options object works.

mod motion;
mod ring;

use std::path::Path;

pub use motion::MotionOptions;
pub use ring::RingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Top-level options container. All sub-structs use `#[serde(default)]`.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct CarouselOptions {
    /// Ring layout and camera placement.
    pub ring: RingOptions,
    /// Drag sensitivity and momentum decay.
    pub motion: MotionOptions,
}

impl CarouselOptions {
    /// Generate JSON Schema describing the tweakable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CarouselOptions)
    }

    /// Check construction contracts. Malformed options are rejected rather
    /// than clamped so bad geometry never reaches the ring.
    pub fn validate(&self) -> Result<(), CarouselError> {
        self.ring.validate()?;
        self.motion.validate()
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, CarouselError> {
        toml::from_str(text)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Parse options from JSON text. Missing fields use defaults.
    pub fn from_json_str(text: &str) -> Result<Self, CarouselError> {
        serde_json::from_str(text)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let opts = CarouselOptions::default();
        assert_eq!(opts.motion.velocity_scale, 0.05);
        assert_eq!(opts.motion.friction, 0.99);
        assert_eq!(opts.motion.momentum_threshold, 0.1);
        assert_eq!(opts.ring.view_depth, 754.0);
        assert_eq!(opts.ring.tilt, 0.0);
        assert_eq!(opts.ring.item_count, 8);
        assert_eq!(opts.ring.item_width, 300.0);
        assert_eq!(opts.ring.gap, 1.7);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = CarouselOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = CarouselOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[ring]
item_count = 12
item_width = 536.0
";
        let opts = CarouselOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.ring.item_count, 12);
        assert_eq!(opts.ring.item_width, 536.0);
        assert_eq!(opts.ring.gap, 1.7);
        assert_eq!(opts.motion, MotionOptions::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts =
            CarouselOptions::from_json_str(r#"{"motion":{"friction":0.95}}"#)
                .unwrap();
        assert_eq!(opts.motion.friction, 0.95);
        assert_eq!(opts.motion.velocity_scale, 0.05);
        assert_eq!(opts.ring, RingOptions::default());
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = CarouselOptions::from_toml_str("[ring\nitem_count = 3")
            .unwrap_err();
        assert!(matches!(err, CarouselError::OptionsParse(_)));
    }

    #[test]
    fn zero_items_rejected() {
        let mut opts = CarouselOptions::default();
        opts.ring.item_count = 0;
        assert!(matches!(
            opts.validate(),
            Err(CarouselError::InvalidOptions(_))
        ));
    }

    #[test]
    fn non_positive_width_rejected() {
        let mut opts = CarouselOptions::default();
        opts.ring.item_width = 0.0;
        assert!(opts.validate().is_err());
        opts.ring.item_width = f64::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn friction_must_be_inside_unit_interval() {
        for friction in [0.0, 1.0, 1.2, -0.5, f64::NAN] {
            let mut opts = CarouselOptions::default();
            opts.motion.friction = friction;
            assert!(opts.validate().is_err(), "friction {friction} accepted");
        }
    }

    #[test]
    fn threshold_must_be_positive() {
        let mut opts = CarouselOptions::default();
        opts.motion.momentum_threshold = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn schema_lists_both_sections() {
        let schema = serde_json::to_value(CarouselOptions::json_schema())
            .unwrap();
        let props = &schema["properties"];
        assert!(props.get("ring").is_some());
        assert!(props.get("motion").is_some());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("carousel-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = CarouselOptions::default();
        opts.ring.tilt = 12.5;
        opts.save(&path).unwrap();
        let loaded = CarouselOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
