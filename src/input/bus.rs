use super::event::PointerEvent;
use super::source::{PointerHandler, PointerSource, Subscription};
use crate::error::CarouselError;

/// In-process [`PointerSource`] for native hosts and tests.
///
/// The host pushes events in with [`dispatch`](PointerBus::dispatch) and
/// every live subscriber receives them in subscription order.
#[derive(Default)]
pub struct PointerBus {
    next_id: u64,
    handlers: Vec<(Subscription, PointerHandler)>,
}

impl PointerBus {
    /// Bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every subscriber.
    pub fn dispatch(&mut self, event: PointerEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerBus")
            .field("subscribers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl PointerSource for PointerBus {
    fn subscribe(
        &mut self,
        handler: PointerHandler,
    ) -> Result<Subscription, CarouselError> {
        self.next_id += 1;
        let subscription = Subscription::new(self.next_id);
        self.handlers.push((subscription, handler));
        Ok(subscription)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.handlers.retain(|(s, _)| *s != subscription);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispatch_reaches_each_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = PointerBus::new();
        for tag in 0..2 {
            let seen = Rc::clone(&seen);
            let _ = bus
                .subscribe(Box::new(move |e: PointerEvent| {
                    seen.borrow_mut().push((tag, e));
                }))
                .unwrap();
        }
        bus.dispatch(PointerEvent::Up);
        assert_eq!(
            *seen.borrow(),
            vec![(0, PointerEvent::Up), (1, PointerEvent::Up)]
        );
    }

    #[test]
    fn unsubscribe_by_token() {
        let hits = Rc::new(RefCell::new(0));
        let mut bus = PointerBus::new();
        let make = |hits: &Rc<RefCell<i32>>| -> PointerHandler {
            let hits = Rc::clone(hits);
            Box::new(move |_: PointerEvent| *hits.borrow_mut() += 1)
        };
        let a = bus.subscribe(make(&hits)).unwrap();
        let _b = bus.subscribe(make(&hits)).unwrap();
        bus.unsubscribe(a);
        bus.unsubscribe(a);
        assert_eq!(bus.subscriber_count(), 1);
        bus.dispatch(PointerEvent::Move { x: 1.0 });
        assert_eq!(*hits.borrow(), 1);
    }
}
