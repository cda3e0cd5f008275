use crate::frame::FrameHandle;

/// Where the controller is in its drag / coast cycle.
///
/// ```text
/// Idle --down--> Dragging --up (slow)--> Idle
///                Dragging --up (fast)--> Decaying --rest--> Idle
///                Decaying --down-------> Dragging
/// any  --teardown--> TornDown
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPhase {
    /// At rest, waiting for a drag.
    Idle,
    /// A drag session is active.
    Dragging {
        /// Pointer X at the previous drag event.
        last_x: f64,
    },
    /// Coasting after release; one frame callback is pending.
    Decaying {
        /// The pending frame request.
        frame: FrameHandle,
    },
    /// Torn down; every input is ignored.
    TornDown,
}

impl MotionPhase {
    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The frame request this phase is waiting on, if any.
    #[must_use]
    pub fn pending_frame(self) -> Option<FrameHandle> {
        match self {
            Self::Decaying { frame } => Some(frame),
            _ => None,
        }
    }
}
