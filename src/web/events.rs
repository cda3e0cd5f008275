use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

use crate::error::CarouselError;
use crate::input::{PointerEvent, PointerHandler, PointerSource, Subscription};

type Listener = (&'static str, Closure<dyn FnMut(MouseEvent)>);

/// [`PointerSource`] over mouse events on an injected [`EventTarget`].
///
/// Each subscription owns its three listener closures; unsubscribing
/// removes exactly those from the target.
pub struct DomPointerSource {
    target: EventTarget,
    next_id: u64,
    listeners: HashMap<Subscription, Vec<Listener>>,
}

impl DomPointerSource {
    /// Listen on `target` (typically the window).
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            next_id: 0,
            listeners: HashMap::new(),
        }
    }

    fn remove_all(&self, listeners: &[Listener]) {
        for (kind, closure) in listeners {
            if let Err(e) = self.target.remove_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {kind} listener: {e:?}");
            }
        }
    }
}

fn translate(kind: &str, event: &MouseEvent) -> PointerEvent {
    let x = f64::from(event.client_x());
    match kind {
        "mousedown" => PointerEvent::Down { x },
        "mousemove" => PointerEvent::Move { x },
        _ => PointerEvent::Up,
    }
}

impl PointerSource for DomPointerSource {
    fn subscribe(
        &mut self,
        handler: PointerHandler,
    ) -> Result<Subscription, CarouselError> {
        let handler = Rc::new(RefCell::new(handler));
        let mut listeners: Vec<Listener> = Vec::with_capacity(3);
        for kind in ["mousedown", "mousemove", "mouseup"] {
            let handler = Rc::clone(&handler);
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(
                move |event: MouseEvent| {
                    (*handler.borrow_mut())(translate(kind, &event));
                },
            );
            if let Err(e) = self.target.add_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            ) {
                self.remove_all(&listeners);
                return Err(CarouselError::Dom(format!(
                    "failed to add {kind} listener: {e:?}"
                )));
            }
            listeners.push((kind, closure));
        }

        self.next_id += 1;
        let subscription = Subscription::new(self.next_id);
        let _ = self.listeners.insert(subscription, listeners);
        Ok(subscription)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(listeners) = self.listeners.remove(&subscription) {
            self.remove_all(&listeners);
        }
    }
}
