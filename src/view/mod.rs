//! Output side of the controller: where transforms and visibility go.

mod recording;
mod transform;

pub use recording::RecordingView;
pub use transform::RingTransform;

use crate::ring::Visibility;

/// Receives the controller's per-update output.
///
/// Implementations apply the ring transform to the ring container and the
/// visibility flag (including interactivity) to each panel.
pub trait RingView {
    /// Replace the ring container's transform.
    fn apply_transform(&mut self, transform: &RingTransform);

    /// Set one panel's visibility and interactivity.
    fn apply_visibility(&mut self, index: usize, visibility: Visibility);
}
