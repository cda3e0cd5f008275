//! Front/back classification of panels on the ring.
//!
//! The camera sits inside the ring (the ring is pushed toward the viewer by
//! `view_depth`), so the panels nearest the zero angle are behind the eye.
//! Those are hidden; the far half of the ring is what the viewer sees.

/// Whether a panel is currently shown to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Facing the viewer: rendered and accepts pointer interaction.
    Shown,
    /// Facing away: not rendered and ignores pointer interaction.
    Hidden,
}

impl Visibility {
    /// Whether the panel should receive pointer events.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Angle of a panel as seen by the viewer, wrapped into `[0, 360)`.
///
/// Computed from the absolute value of the sum, so `-30` and `30` land on
/// the same relative angle. The hidden band is symmetric around zero, which
/// makes that fold harmless.
#[must_use]
pub fn relative_angle(rotation: f64, offset: f64) -> f64 {
    (rotation + offset).abs() % 360.0
}

/// Classify a panel from the ring rotation and its fixed offset.
///
/// Strict comparisons: exactly 90 and 270 are shown, exactly 0 is hidden.
#[must_use]
pub fn visibility_at(rotation: f64, offset: f64) -> Visibility {
    let relative = relative_angle(rotation, offset);
    if relative < 90.0 || relative > 270.0 {
        Visibility::Hidden
    } else {
        Visibility::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_at_rest_is_hidden() {
        assert_eq!(visibility_at(0.0, 0.0), Visibility::Hidden);
    }

    #[test]
    fn half_turn_offset_at_rest_is_shown() {
        assert_eq!(visibility_at(0.0, 180.0), Visibility::Shown);
    }

    #[test]
    fn boundaries_are_shown() {
        assert_eq!(visibility_at(0.0, 90.0), Visibility::Shown);
        assert_eq!(visibility_at(0.0, 270.0), Visibility::Shown);
        assert_eq!(visibility_at(0.0, 89.999), Visibility::Hidden);
        assert_eq!(visibility_at(0.0, 270.001), Visibility::Hidden);
    }

    #[test]
    fn visible_set_follows_the_rotation() {
        // Rotating by 180 swaps front and back
        assert_eq!(visibility_at(180.0, 0.0), Visibility::Shown);
        assert_eq!(visibility_at(180.0, 180.0), Visibility::Hidden);
    }

    #[test]
    fn unbounded_rotation_wraps() {
        assert_eq!(relative_angle(720.0 + 45.0, 0.0), 45.0);
        assert_eq!(visibility_at(3600.0 + 180.0, 0.0), Visibility::Shown);
        assert_eq!(relative_angle(-400.0, 0.0), 40.0);
    }

    #[test]
    fn negative_sum_uses_absolute_value() {
        assert_eq!(relative_angle(-200.0, 0.0), 200.0);
        assert_eq!(visibility_at(-200.0, 0.0), Visibility::Shown);
        assert_eq!(visibility_at(-30.0, 0.0), Visibility::Hidden);
    }

    #[test]
    fn only_shown_panels_are_interactive() {
        assert!(Visibility::Shown.is_interactive());
        assert!(!Visibility::Hidden.is_interactive());
    }
}
