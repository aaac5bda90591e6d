//! Frame clock
//!
//! Produces the per-frame time delta that animators consume.

use std::time::{Duration, Instant};

/// Monotonic frame clock for hosts that do not hand out frame timestamps
pub struct FrameClock {
    last_frame: Instant,
    target_fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            target_fps: 60,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Ideal spacing between frames at the target rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }

    /// Time since the previous call (or since construction)
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit frame timestamp.
    ///
    /// Timestamps older than the last frame yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last_frame);
        if now > self.last_frame {
            self.last_frame = now;
        }
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_interval(), Duration::from_secs(1) / 60);
        clock.set_target_fps(0);
        assert_eq!(clock.target_fps(), 1);
    }

    #[test]
    fn test_tick_at_measures_delta() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_millis(5);
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(dt, Duration::from_millis(16));
        assert_eq!(clock.tick_at(start), Duration::ZERO);
    }
}
