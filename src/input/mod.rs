//! Pointer input: event types, the subscription seam, and an in-process
//! event bus.

/// In-process pointer event bus.
mod bus;
/// Platform-agnostic pointer events.
pub mod event;
/// Subscribe/unsubscribe seam for pointer event sources.
pub mod source;

pub use bus::PointerBus;
pub use event::PointerEvent;
pub use source::{PointerHandler, PointerSource, Subscription};
