use glam::{DMat4, DVec3};

/// The ring container's visual transform for one update.
///
/// Applied wholesale every update in a fixed order: push along the viewing
/// axis, tilt, then spin around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTransform {
    /// Translation along the viewing axis.
    pub depth: f64,
    /// Fixed tilt in degrees (applied as a negative Z rotation).
    pub tilt: f64,
    /// Current ring rotation in degrees.
    pub rotation: f64,
}

impl RingTransform {
    /// CSS `transform` value for the ring container.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translateZ({}px) rotateZ({}deg) rotateY({}deg)",
            self.depth, -self.tilt, self.rotation
        )
    }

    /// The same transform as a matrix, composed left to right like CSS.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, self.depth))
            * DMat4::from_rotation_z(-self.tilt.to_radians())
            * DMat4::from_rotation_y(self.rotation.to_radians())
    }

    /// Centre of a panel placed at `offset` degrees and pushed out by
    /// `item_depth`, in the container's parent space.
    #[must_use]
    pub fn item_position(&self, offset: f64, item_depth: f64) -> DVec3 {
        let placement = DMat4::from_rotation_y(offset.to_radians())
            * DMat4::from_translation(DVec3::new(0.0, 0.0, item_depth));
        (self.matrix() * placement).transform_point3(DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_orders_translate_tilt_rotate() {
        let t = RingTransform {
            depth: 754.0,
            tilt: 10.0,
            rotation: 42.5,
        };
        assert_eq!(
            t.to_css(),
            "translateZ(754px) rotateZ(-10deg) rotateY(42.5deg)"
        );
    }

    #[test]
    fn matrix_translates_origin_by_depth() {
        let t = RingTransform {
            depth: 754.0,
            tilt: 0.0,
            rotation: 123.0,
        };
        let origin = t.matrix().transform_point3(DVec3::ZERO);
        assert!((origin - DVec3::new(0.0, 0.0, 754.0)).length() < 1e-9);
    }

    #[test]
    fn matrix_spins_around_vertical_axis() {
        let t = RingTransform {
            depth: 0.0,
            tilt: 0.0,
            rotation: 90.0,
        };
        let p = t.matrix().transform_point3(DVec3::Z);
        assert!((p - DVec3::X).length() < 1e-9);
        let up = t.matrix().transform_point3(DVec3::Y);
        assert!((up - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn item_position_follows_offset_then_depth() {
        let t = RingTransform {
            depth: 754.0,
            tilt: 0.0,
            rotation: 0.0,
        };
        let p = t.item_position(90.0, 100.0);
        assert!((p - DVec3::new(100.0, 0.0, 754.0)).length() < 1e-9);

        let spun = RingTransform { rotation: 90.0, ..t };
        let back = spun.item_position(90.0, 100.0);
        assert!((back - DVec3::new(0.0, 0.0, 654.0)).length() < 1e-9);
    }

    #[test]
    fn full_turns_give_the_same_matrix() {
        let a = RingTransform {
            depth: 754.0,
            tilt: 5.0,
            rotation: 30.0,
        };
        let b = RingTransform {
            rotation: 30.0 + 720.0,
            ..a
        };
        assert!(a.matrix().abs_diff_eq(b.matrix(), 1e-9));
    }
}
