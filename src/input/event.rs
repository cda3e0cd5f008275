/// Platform-agnostic pointer events.
///
/// Only the horizontal coordinate matters to the ring; vertical motion is
/// never reported.
///
/// # Example
///
/// ```ignore
/// controller.handle_event(PointerEvent::Down { x: 100.0 });
/// controller.handle_event(PointerEvent::Move { x: 140.0 });
/// controller.handle_event(PointerEvent::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down {
        /// Horizontal position in CSS pixels.
        x: f64,
    },
    /// Pointer moved, pressed or not.
    Move {
        /// Horizontal position in CSS pixels.
        x: f64,
    },
    /// Primary button released.
    Up,
}
