//! Free-spin decay after release.
//!
//! Velocity decays geometrically: after `k` frames it is `v0 * friction^k`.
//! The spin stops on the first frame whose velocity is at or below the
//! threshold, which always happens for `friction` in (0, 1).

/// Velocity for the next frame.
#[inline]
#[must_use]
pub fn decay(velocity: f64, friction: f64) -> f64 {
    velocity * friction
}

/// Whether a ring moving at `velocity` keeps spinning.
#[inline]
#[must_use]
pub fn is_coasting(velocity: f64, threshold: f64) -> bool {
    velocity.abs() > threshold
}

/// Number of decay frames a release at `velocity` runs before resting.
///
/// Zero when the release is too slow to coast at all. Closed form of the
/// smallest `k` with `|v0| * friction^k <= threshold`, so it may be off by
/// one from the stepped loop where `friction^k` lands on the threshold.
#[must_use]
pub fn frames_to_rest(velocity: f64, friction: f64, threshold: f64) -> u32 {
    if !is_coasting(velocity, threshold) {
        return 0;
    }
    let frames = ((threshold / velocity.abs()).ln() / friction.ln()).ceil();
    // float -> int casts saturate
    frames.max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(mut velocity: f64, friction: f64, threshold: f64) -> u32 {
        let mut frames = 0;
        if !is_coasting(velocity, threshold) {
            return 0;
        }
        loop {
            velocity = decay(velocity, friction);
            frames += 1;
            if !is_coasting(velocity, threshold) {
                return frames;
            }
        }
    }

    #[test]
    fn slow_release_does_not_coast() {
        assert_eq!(frames_to_rest(0.1, 0.99, 0.1), 0);
        assert_eq!(frames_to_rest(-0.05, 0.99, 0.1), 0);
        assert_eq!(frames_to_rest(0.0, 0.99, 0.1), 0);
    }

    #[test]
    fn closed_form_matches_stepping() {
        for v0 in [0.11, 0.5, -1.0, 2.5, -7.25, 40.0] {
            for friction in [0.5, 0.9, 0.95, 0.99] {
                let expected = stepped(v0, friction, 0.1);
                let estimate = frames_to_rest(v0, friction, 0.1);
                assert!(
                    estimate.abs_diff(expected) <= 1,
                    "v0={v0} friction={friction}: {estimate} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn decay_is_geometric() {
        let mut v = 3.0;
        for _ in 0..10 {
            v = decay(v, 0.9);
        }
        assert!((v - 3.0 * 0.9_f64.powi(10)).abs() < 1e-12);
    }

    #[test]
    fn just_above_threshold_coasts_one_frame() {
        assert_eq!(stepped(0.100_001, 0.99, 0.1), 1);
        assert_eq!(frames_to_rest(0.100_001, 0.99, 0.1), 1);
    }
}
