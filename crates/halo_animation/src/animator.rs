//! Time-based value animator
//!
//! A [`ValueAnimator`] maps elapsed time to a value between `from` and `to`
//! through an [`Easing`] curve. It owns no clock: callers advance it with
//! [`ValueAnimator::tick`] from their frame callback.

use std::time::Duration;

use crate::easing::Easing;

/// Lifecycle of a [`ValueAnimator`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimatorState {
    #[default]
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Result of advancing an animator by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorFrame {
    /// Interpolated value for this frame
    pub value: f32,
    /// Elapsed time fraction (0.0 to 1.0)
    pub fraction: f32,
    /// True on the frame that reached the end of the duration
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct ValueAnimator {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    state: AnimatorState,
}

impl ValueAnimator {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
            state: AnimatorState::Idle,
        }
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Rewind to the beginning and start running
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = AnimatorState::Running;
        tracing::trace!(
            from = self.from,
            to = self.to,
            duration_ms = self.duration.as_millis() as u64,
            "animator started"
        );
    }

    /// Stop a running animator without reaching the end value.
    ///
    /// Returns false if the animator was not running.
    pub fn cancel(&mut self) -> bool {
        if self.state != AnimatorState::Running {
            return false;
        }
        self.state = AnimatorState::Cancelled;
        tracing::trace!(fraction = self.fraction(), "animator cancelled");
        true
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Elapsed time fraction, clamped to 1.0. A zero duration is always complete.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64).min(1.0) as f32
    }

    /// Current interpolated value.
    ///
    /// At a fraction of 1.0 this is exactly `to`, whatever the easing curve.
    pub fn value(&self) -> f32 {
        let fraction = self.fraction();
        if fraction >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(fraction)
    }

    /// Advance by `dt`. Returns `None` unless the animator is running.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimatorFrame> {
        if !self.is_running() {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let fraction = self.fraction();
        let finished = fraction >= 1.0;
        if finished {
            self.state = AnimatorState::Finished;
        }

        Some(AnimatorFrame {
            value: self.value(),
            fraction,
            finished,
        })
    }
}
