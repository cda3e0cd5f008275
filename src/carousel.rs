//! A rotation controller wired to its pointer source.
//!
//! [`Carousel`] owns the subscription it makes, so several carousels can
//! share one source without cross-talk, and tearing one down releases
//! exactly its own listeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::controller::RotationController;
use crate::error::CarouselError;
use crate::frame::{FrameScheduler, ManualScheduler};
use crate::input::{PointerEvent, PointerSource, Subscription};
use crate::options::CarouselOptions;
use crate::view::RingView;

/// Shared handle to a controller, as held by frame and pointer callbacks.
pub type SharedController<S, V> = Rc<RefCell<RotationController<S, V>>>;

/// A [`RotationController`] plus its pointer subscription.
///
/// Subscribed in [`attach`](Self::attach), released in
/// [`detach`](Self::detach) or on drop.
pub struct Carousel<P, S, V>
where
    P: PointerSource,
    S: FrameScheduler,
    V: RingView,
{
    controller: SharedController<S, V>,
    source: P,
    subscription: Option<Subscription>,
}

impl<P, S, V> Carousel<P, S, V>
where
    P: PointerSource,
    S: FrameScheduler + 'static,
    V: RingView + 'static,
{
    /// Build a controller and subscribe it to `source`.
    pub fn attach(
        options: CarouselOptions,
        scheduler: S,
        view: V,
        mut source: P,
    ) -> Result<Self, CarouselError> {
        let controller = Rc::new(RefCell::new(RotationController::new(
            options, scheduler, view,
        )?));
        let weak: Weak<RefCell<RotationController<S, V>>> =
            Rc::downgrade(&controller);
        let subscription =
            source.subscribe(Box::new(move |event: PointerEvent| {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow_mut().handle_event(event);
                }
            }))?;
        log::debug!("carousel attached (subscription {})", subscription.id());
        Ok(Self {
            controller,
            source,
            subscription: Some(subscription),
        })
    }
}

impl<P, S, V> Carousel<P, S, V>
where
    P: PointerSource,
    S: FrameScheduler,
    V: RingView,
{
    /// Unsubscribe from the pointer source and tear the controller down,
    /// cancelling any pending frame. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
            log::debug!(
                "carousel detached (subscription {})",
                subscription.id()
            );
        }
        self.controller.borrow_mut().teardown();
    }

    /// Whether the pointer subscription is live.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// The shared controller.
    #[must_use]
    pub fn controller(&self) -> &SharedController<S, V> {
        &self.controller
    }

    /// The pointer source this carousel subscribed to.
    #[must_use]
    pub fn source(&self) -> &P {
        &self.source
    }

    /// Mutable access to the pointer source (e.g. to dispatch events).
    pub fn source_mut(&mut self) -> &mut P {
        &mut self.source
    }

    /// Current ring rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.controller.borrow().rotation()
    }
}

impl<P, V> Carousel<P, ManualScheduler, V>
where
    P: PointerSource,
    V: RingView,
{
    /// Fire the oldest due frame, if any. Returns whether one fired.
    pub fn run_due_frame(&self) -> bool {
        let mut controller = self.controller.borrow_mut();
        let Some(handle) = controller.scheduler_mut().take_due() else {
            return false;
        };
        controller.on_frame(handle);
        true
    }

    /// Fire frames until the ring rests. Returns how many fired.
    pub fn run_until_rest(&self) -> usize {
        let mut frames = 0;
        while self.run_due_frame() {
            frames += 1;
        }
        frames
    }
}

impl<P, S, V> Drop for Carousel<P, S, V>
where
    P: PointerSource,
    S: FrameScheduler,
    V: RingView,
{
    fn drop(&mut self) {
        self.detach();
    }
}

impl<P, S, V> std::fmt::Debug for Carousel<P, S, V>
where
    P: PointerSource,
    S: FrameScheduler,
    V: RingView,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("controller", &self.controller.borrow())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MotionPhase;
    use crate::input::PointerBus;
    use crate::view::RecordingView;

    type SharedBus = Rc<RefCell<PointerBus>>;
    type TestCarousel = Carousel<SharedBus, ManualScheduler, RecordingView>;

    fn attach(bus: &SharedBus) -> TestCarousel {
        Carousel::attach(
            CarouselOptions::default(),
            ManualScheduler::new(),
            RecordingView::new(),
            Rc::clone(bus),
        )
        .unwrap()
    }

    fn drag(bus: &SharedBus, from: f64, to: f64) {
        let mut bus = bus.borrow_mut();
        bus.dispatch(PointerEvent::Down { x: from });
        bus.dispatch(PointerEvent::Move { x: to });
        bus.dispatch(PointerEvent::Up);
    }

    #[test]
    fn events_drive_the_controller() {
        let bus = SharedBus::default();
        let carousel = attach(&bus);
        drag(&bus, 0.0, 40.0);
        assert_eq!(carousel.rotation(), 2.0);
        assert!(matches!(
            carousel.controller().borrow().phase(),
            MotionPhase::Decaying { .. }
        ));
        assert!(carousel.run_until_rest() > 0);
        assert_eq!(carousel.controller().borrow().phase(), MotionPhase::Idle);
        assert!(carousel.rotation() > 2.0);
    }

    #[test]
    fn detach_releases_subscription_and_pending_frame() {
        let bus = SharedBus::default();
        let mut carousel = attach(&bus);
        drag(&bus, 0.0, 100.0);
        carousel.detach();

        assert!(!carousel.is_attached());
        assert_eq!(bus.borrow().subscriber_count(), 0);
        let controller = carousel.controller().borrow();
        assert!(controller.is_torn_down());
        assert!(!controller.scheduler().has_pending());
    }

    #[test]
    fn events_after_detach_change_nothing() {
        let bus = SharedBus::default();
        let mut carousel = attach(&bus);
        carousel.detach();
        carousel.detach();
        drag(&bus, 0.0, 500.0);
        assert_eq!(carousel.rotation(), 0.0);
        assert!(!carousel.run_due_frame());
    }

    #[test]
    fn instances_on_one_source_are_independent() {
        let bus = SharedBus::default();
        let mut first = attach(&bus);
        let second = attach(&bus);
        assert_eq!(bus.borrow().subscriber_count(), 2);

        drag(&bus, 0.0, 20.0);
        assert_eq!(first.rotation(), 1.0);
        assert_eq!(second.rotation(), 1.0);

        first.detach();
        drag(&bus, 0.0, 20.0);
        assert_eq!(first.rotation(), 1.0);
        assert_eq!(second.rotation(), 2.0);
    }

    #[test]
    fn drop_detaches() {
        let bus = SharedBus::default();
        {
            let _carousel = attach(&bus);
            assert_eq!(bus.borrow().subscriber_count(), 1);
        }
        assert_eq!(bus.borrow().subscriber_count(), 0);
        drag(&bus, 0.0, 20.0);
    }
}
