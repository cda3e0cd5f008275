use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::frame::{FrameHandle, FrameScheduler};

/// Slot holding the per-frame callback. Filled in once the controller it
/// drives exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// [`FrameScheduler`] over `requestAnimationFrame`.
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    /// Schedule `callback` on `window`'s animation frames.
    #[must_use]
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::error!("frame requested before the frame callback was set");
            return FrameHandle::new(0);
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle::new(id as u64),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {e:?}");
                FrameHandle::new(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if handle.id() == 0 {
            return;
        }
        if let Err(e) = self.window.cancel_animation_frame(handle.id() as i32)
        {
            log::warn!("cancelAnimationFrame({}) failed: {e:?}", handle.id());
        }
    }
}
