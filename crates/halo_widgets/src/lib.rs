//! Halo Widget Library
//!
//! Self-drawing UI components. Widgets measure themselves against the
//! parent's constraints, paint into any [`halo_paint::DrawContext`] and
//! advance their animations when the host ticks them once per frame.

pub mod circular_progress;
pub mod listener;
pub mod widget;

pub use circular_progress::{CircularProgressBar, CircularProgressConfig};
pub use listener::{AnimationCallbacks, ProgressAnimationListener};
pub use widget::{MeasureSpec, Widget};
