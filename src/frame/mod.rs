//! Per-frame scheduling: a request/cancel pair the controller pulls frames
//! through.
//!
//! The host invokes [`RotationController::on_frame`] with the handle it was
//! given when the frame fires. Only the handle currently pending in the
//! controller is honoured, so a cancelled or superseded request can never
//! mutate rotation.
//!
//! [`RotationController::on_frame`]: crate::controller::RotationController::on_frame

mod manual;
mod timing;

pub use manual::ManualScheduler;
pub use timing::FramePacer;

/// Opaque token for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a host-issued id (e.g. a `requestAnimationFrame` id).
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw host id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host primitive that calls back roughly once per display refresh.
pub trait FrameScheduler {
    /// Ask for one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Cancelling a handle that already fired or was
    /// already cancelled is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
