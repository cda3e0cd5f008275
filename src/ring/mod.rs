//! Ring geometry: panel offsets, radius, placement and visibility.

mod visibility;

use std::f64::consts::PI;

pub use visibility::{relative_angle, visibility_at, Visibility};

use crate::options::RingOptions;
use crate::view::RingTransform;

/// Distance a hover caption floats in front of its panel.
const LABEL_LIFT: f64 = 50.0;

/// A single panel with a fixed angular offset from the ring's zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    index: usize,
    offset: f64,
}

impl Item {
    /// Position of this panel on the ring.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fixed angular offset in degrees, assigned at ring construction.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Visibility of this panel for a given ring rotation.
    #[must_use]
    pub fn visibility(&self, rotation: f64) -> Visibility {
        visibility_at(rotation, self.offset)
    }

    /// CSS transform that places the panel on the ring, `depth` units out
    /// from the axis.
    #[must_use]
    pub fn placement_css(&self, depth: f64) -> String {
        format!("rotateY({}deg) translateZ({depth}px)", self.offset)
    }

    /// CSS transform for the panel's caption that cancels the ring and panel
    /// rotation so the caption always faces the viewer.
    #[must_use]
    pub fn label_transform(&self, rotation: f64, tilt: f64) -> String {
        format!(
            "rotateY({}deg) rotateZ({tilt}deg) translateZ({LABEL_LIFT}px)",
            -rotation - self.offset
        )
    }
}

/// The circular arrangement of panels around the vertical axis.
///
/// Offsets and radius are fixed at construction. The ring rotation lives in
/// the controller, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    items: Vec<Item>,
    item_width: f64,
    gap: f64,
    radius: f64,
}

impl Ring {
    /// Lay out `item_count` panels at equal angular steps.
    ///
    /// Callers validate `options` first; `item_count` is treated as at
    /// least 1 so the step never divides by zero.
    #[must_use]
    pub fn new(options: &RingOptions) -> Self {
        let count = options.item_count.max(1);
        let step = 360.0 / f64::from(count);
        let items = (0..count as usize)
            .map(|index| Item {
                index,
                offset: step * index as f64,
            })
            .collect();
        Self {
            items,
            item_width: options.item_width,
            gap: options.gap,
            radius: radius_for(count, options.item_width),
        }
    }

    /// All panels in index order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ring has no panels. Never true after [`Ring::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Angle between adjacent panels in degrees.
    #[must_use]
    pub fn angle_step(&self) -> f64 {
        360.0 / self.items.len() as f64
    }

    /// Radial distance of the ring, see [`radius_for`].
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// How far each panel is pushed out from the axis: the radius pulled
    /// back by `item_width * gap`.
    #[must_use]
    pub fn item_depth(&self) -> f64 {
        self.radius - self.item_width * self.gap
    }

    /// Panel width in CSS pixels.
    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Visibility of every panel for a ring rotation, in index order.
    pub fn visibility(
        &self,
        rotation: f64,
    ) -> impl Iterator<Item = (usize, Visibility)> + '_ {
        self.items
            .iter()
            .map(move |item| (item.index, item.visibility(rotation)))
    }

    /// Index of the panel whose centre sits deepest along the viewing axis
    /// under `transform`: the middle of the visible half.
    #[must_use]
    pub fn centered_item(&self, transform: &RingTransform) -> usize {
        let depth = self.item_depth();
        self.items
            .iter()
            .map(|item| {
                let centre = transform.item_position(item.offset, depth);
                (item.index, centre.z)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0, |(index, _)| index)
    }
}

/// Ring radius for `count` panels of `width`.
///
/// Circumference is `count * width * 2`, which leaves room for perspective
/// foreshortening between adjacent panels.
#[must_use]
pub fn radius_for(count: u32, width: f64) -> f64 {
    (width * 2.0 * f64::from(count)) / (2.0 * PI)
}
