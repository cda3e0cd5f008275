use std::cell::RefCell;
use std::rc::Rc;

use super::event::PointerEvent;
use crate::error::CarouselError;

/// Callback registered with a [`PointerSource`].
pub type PointerHandler = Box<dyn FnMut(PointerEvent)>;

/// Token returned by [`PointerSource::subscribe`], used to unsubscribe.
///
/// Removal goes through the token, never through callback identity, so two
/// subscribers with identical handlers stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Wrap a source-issued id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Something that emits pointer events to subscribers.
pub trait PointerSource {
    /// Register `handler` for down/move/up events.
    fn subscribe(
        &mut self,
        handler: PointerHandler,
    ) -> Result<Subscription, CarouselError>;

    /// Drop the handler registered under `subscription`. Unknown or
    /// already-removed tokens are ignored.
    fn unsubscribe(&mut self, subscription: Subscription);
}

/// A source shared between several carousels.
impl<T: PointerSource> PointerSource for Rc<RefCell<T>> {
    fn subscribe(
        &mut self,
        handler: PointerHandler,
    ) -> Result<Subscription, CarouselError> {
        self.borrow_mut().subscribe(handler)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.borrow_mut().unsubscribe(subscription);
    }
}
