use super::{FrameHandle, FrameScheduler};

/// Deterministic scheduler driven by the caller.
///
/// Requests queue up until the host takes them with [`take_due`] and feeds
/// them back to the controller. Used by tests and by the headless
/// simulator.
///
/// [`take_due`]: ManualScheduler::take_due
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that have not fired or been cancelled.
    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Whether any callback is waiting.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Remove and return the oldest pending request, as if it just fired.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Total requests ever made.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total requests withdrawn before firing.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.pending.push(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_fifo() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        let b = s.request_frame();
        assert_ne!(a, b);
        assert_eq!(s.take_due(), Some(a));
        assert_eq!(s.take_due(), Some(b));
        assert_eq!(s.take_due(), None);
    }

    #[test]
    fn cancel_removes_only_that_handle() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        let b = s.request_frame();
        s.cancel_frame(a);
        s.cancel_frame(a);
        assert_eq!(s.pending(), &[b]);
        assert_eq!(s.cancelled(), 1);
        assert_eq!(s.requested(), 2);
    }
}
