use super::{RingTransform, RingView};
use crate::ring::Visibility;

/// Headless [`RingView`] that remembers what was applied.
///
/// Used by native hosts (the simulator) and by tests to observe the
/// controller without a DOM.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    transform: Option<RingTransform>,
    visibility: Vec<Visibility>,
    transform_writes: usize,
}

impl RecordingView {
    /// Empty view with nothing applied yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied transform.
    #[must_use]
    pub fn transform(&self) -> Option<RingTransform> {
        self.transform
    }

    /// Most recently applied visibility per panel, in index order.
    #[must_use]
    pub fn visibility(&self) -> &[Visibility] {
        &self.visibility
    }

    /// Indices of panels currently shown.
    #[must_use]
    pub fn shown(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == Visibility::Shown)
            .map(|(i, _)| i)
            .collect()
    }

    /// How many times a transform was applied.
    #[must_use]
    pub fn transform_writes(&self) -> usize {
        self.transform_writes
    }
}

impl RingView for RecordingView {
    fn apply_transform(&mut self, transform: &RingTransform) {
        self.transform = Some(*transform);
        self.transform_writes += 1;
    }

    fn apply_visibility(&mut self, index: usize, visibility: Visibility) {
        if index >= self.visibility.len() {
            self.visibility.resize(index + 1, Visibility::Hidden);
        }
        self.visibility[index] = visibility;
    }
}
