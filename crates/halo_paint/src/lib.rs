//! Halo Paint API
//!
//! The 2D drawing vocabulary shared by every Halo widget.
//!
//! # Features
//!
//! - RGBA colors with hex and packed-ARGB constructors
//! - Geometry primitives (point, size, rect)
//! - Paint descriptors (fill/stroke, stroke width, text size, shadow layer)
//! - A [`DrawContext`] trait with a recording implementation, [`PaintContext`]
//! - Host-provided text measurement through [`TextMeasurer`]

pub mod color;
pub mod context;
pub mod paint;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use context::{DrawContext, PaintCommand, PaintContext};
pub use paint::{Paint, PaintStyle, ShadowLayer};
pub use primitives::*;
pub use text::{FixedAdvanceMeasurer, TextMeasurer, TextMetrics};
