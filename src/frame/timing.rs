use web_time::{Duration, Instant};

/// Fixed-rate frame pacing for hosts without a display callback.
///
/// The host waits out [`until_next`](FramePacer::until_next), runs its
/// frame, then calls [`tick`](FramePacer::tick).
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    started: Instant,
    last_tick: Instant,
    frames: u64,
}

impl FramePacer {
    /// Pacer for `fps` frames per second. Zero disables waiting.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        let interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(fps))
        };
        let now = Instant::now();
        Self {
            interval,
            started: now,
            last_tick: now,
            frames: 0,
        }
    }

    /// Time between frames.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next frame is due; zero once it is.
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Record a finished frame and return how many have run.
    pub fn tick(&mut self) -> u64 {
        self.last_tick = Instant::now();
        self.frames += 1;
        self.frames
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean frame rate since the pacer was created.
    #[must_use]
    pub fn average_fps(&self) -> f64 {
        let secs = self.started.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaced_never_waits() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.interval(), Duration::ZERO);
        assert_eq!(pacer.until_next(), Duration::ZERO);
    }

    #[test]
    fn waits_out_the_interval_after_a_tick() {
        let mut pacer = FramePacer::new(1);
        assert_eq!(pacer.interval(), Duration::from_secs(1));
        assert_eq!(pacer.tick(), 1);
        let wait = pacer.until_next();
        assert!(wait > Duration::ZERO && wait <= pacer.interval());
    }

    #[test]
    fn counts_frames() {
        let mut pacer = FramePacer::new(0);
        for _ in 0..5 {
            let _ = pacer.tick();
        }
        assert_eq!(pacer.frames(), 5);
        assert!(pacer.average_fps() >= 0.0);
    }
}
