//! Drag / momentum state machine for the ring.
//!
//! [`RotationController`] turns horizontal pointer travel into angular
//! velocity, integrates it into the ring rotation, coasts with friction
//! after release, and pushes the transform and per-panel visibility into
//! a [`RingView`] on every update.

/// Free-spin decay math.
pub mod momentum;
mod state;

pub use state::MotionPhase;

use crate::error::CarouselError;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::input::PointerEvent;
use crate::options::CarouselOptions;
use crate::ring::{Ring, Visibility};
use crate::view::{RingTransform, RingView};

/// Rotation state for one carousel.
///
/// Single-threaded and event-driven. At most one frame request is pending
/// at a time, and it is only ever re-requested from inside
/// [`on_frame`](Self::on_frame).
pub struct RotationController<S, V> {
    options: CarouselOptions,
    ring: Ring,
    /// Degrees, unbounded. Only wrapped transiently for visibility.
    rotation: f64,
    /// Degrees per update.
    velocity: f64,
    phase: MotionPhase,
    scheduler: S,
    view: V,
}

impl<S: FrameScheduler, V: RingView> RotationController<S, V> {
    /// Validate `options`, lay out the ring, and push the initial transform
    /// and visibility into `view`.
    pub fn new(
        options: CarouselOptions,
        scheduler: S,
        view: V,
    ) -> Result<Self, CarouselError> {
        options.validate()?;
        let ring = Ring::new(&options.ring);
        log::debug!(
            "ring: {} items, radius {:.1}, item depth {:.1}",
            ring.len(),
            ring.radius(),
            ring.item_depth()
        );
        let mut controller = Self {
            options,
            ring,
            rotation: 0.0,
            velocity: 0.0,
            phase: MotionPhase::Idle,
            scheduler,
            view,
        };
        controller.render();
        Ok(controller)
    }

    /// Dispatch a pointer event to the matching drag operation.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x } => self.on_drag_start(x),
            PointerEvent::Move { x } => self.on_drag_move(x),
            PointerEvent::Up => self.on_drag_end(),
        }
    }

    /// Begin a drag session at pointer `x`, cancelling any coast.
    ///
    /// The current velocity is kept, so releasing without moving picks the
    /// coast back up.
    pub fn on_drag_start(&mut self, x: f64) {
        if self.phase == MotionPhase::TornDown {
            return;
        }
        if !x.is_finite() {
            log::warn!("ignoring drag start at non-finite x {x}");
            return;
        }
        self.cancel_pending_frame();
        self.phase = MotionPhase::Dragging { last_x: x };
        log::debug!("drag start at x={x}");
    }

    /// Spin by the horizontal travel since the previous drag event.
    ///
    /// Ignored unless a drag session is active.
    pub fn on_drag_move(&mut self, x: f64) {
        let MotionPhase::Dragging { last_x } = &mut self.phase else {
            return;
        };
        if !x.is_finite() {
            log::warn!("ignoring drag move to non-finite x {x}");
            return;
        }
        let delta = x - *last_x;
        *last_x = x;
        self.velocity = delta * self.options.motion.velocity_scale;
        self.rotation += self.velocity;
        self.render();
    }

    /// End the drag session. A fast enough release starts coasting.
    ///
    /// The release itself does not move the ring; the first friction step
    /// runs in the first scheduled frame. Ignored unless a drag session is
    /// active.
    pub fn on_drag_end(&mut self) {
        if !self.phase.is_dragging() {
            return;
        }
        let motion = &self.options.motion;
        if momentum::is_coasting(self.velocity, motion.momentum_threshold) {
            log::debug!(
                "release at {:.3} deg/frame, coasting ~{} frames",
                self.velocity,
                momentum::frames_to_rest(
                    self.velocity,
                    motion.friction,
                    motion.momentum_threshold
                )
            );
            let frame = self.scheduler.request_frame();
            self.phase = MotionPhase::Decaying { frame };
        } else {
            log::debug!("release at rest, rotation {:.3}", self.rotation);
            self.phase = MotionPhase::Idle;
        }
    }

    /// Run one coast step for the frame request `handle`.
    ///
    /// Handles other than the one currently pending (cancelled, superseded,
    /// or from before a teardown) are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.phase.pending_frame() != Some(handle) {
            log::trace!("ignoring stale frame {}", handle.id());
            return;
        }
        let motion = &self.options.motion;
        self.velocity = momentum::decay(self.velocity, motion.friction);
        self.rotation += self.velocity;
        let coasting =
            momentum::is_coasting(self.velocity, motion.momentum_threshold);
        self.render();
        if coasting {
            let frame = self.scheduler.request_frame();
            self.phase = MotionPhase::Decaying { frame };
        } else {
            log::debug!("came to rest at rotation {:.3}", self.rotation);
            self.phase = MotionPhase::Idle;
        }
    }

    /// Stop for good: cancel any pending frame and ignore all further
    /// input. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.phase == MotionPhase::TornDown {
            return;
        }
        self.cancel_pending_frame();
        self.phase = MotionPhase::TornDown;
        log::debug!("controller torn down at rotation {:.3}", self.rotation);
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(frame) = self.phase.pending_frame() {
            self.scheduler.cancel_frame(frame);
            self.phase = MotionPhase::Idle;
        }
    }

    /// Push the transform and every panel's visibility into the view.
    fn render(&mut self) {
        let transform = self.transform();
        self.view.apply_transform(&transform);
        for (index, visibility) in self.ring.visibility(self.rotation) {
            self.view.apply_visibility(index, visibility);
        }
    }
}

impl<S, V> RotationController<S, V> {
    /// Current ring rotation in degrees (unbounded).
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Current velocity in degrees per update.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.phase == MotionPhase::TornDown
    }

    /// Ring geometry.
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, for hosts that drive frames.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The output view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The ring container transform for the current rotation.
    #[must_use]
    pub fn transform(&self) -> RingTransform {
        RingTransform {
            depth: self.options.ring.view_depth,
            tilt: self.options.ring.tilt,
            rotation: self.rotation,
        }
    }

    /// Current visibility of every panel, in index order.
    #[must_use]
    pub fn visibility(&self) -> Vec<Visibility> {
        self.ring.visibility(self.rotation).map(|(_, v)| v).collect()
    }
}

impl<S, V> std::fmt::Debug for RotationController<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationController")
            .field("rotation", &self.rotation)
            .field("velocity", &self.velocity)
            .field("phase", &self.phase)
            .field("items", &self.ring.len())
            .finish_non_exhaustive()
    }
}
