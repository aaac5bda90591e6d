//! Halo Animation System
//!
//! Time-based value animation driven by the host's frame callback.
//!
//! # Features
//!
//! - **Easing**: Linear, quadratic and anticipate/overshoot curves
//! - **Value animators**: Interpolate an `f32` between two values over a fixed duration
//! - **Frame clock**: Derives per-frame deltas for hosts without a vsync timestamp
//!
//! Nothing here spawns threads. The host calls `tick` from its UI thread once
//! per display refresh and reads back the interpolated value.

pub mod animator;
pub mod clock;
pub mod easing;

pub use animator::{AnimatorFrame, AnimatorState, ValueAnimator};
pub use clock::FrameClock;
pub use easing::Easing;
