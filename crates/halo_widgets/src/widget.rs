//! Base widget trait and types

use std::time::Duration;

use halo_paint::{DrawContext, Size, TextMeasurer};

/// Constraint the parent places on one axis during measurement
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// No constraint, the widget picks its own size
    Unspecified,
    /// Up to this many pixels
    AtMost(f32),
    /// Exactly this many pixels
    Exactly(f32),
}

impl MeasureSpec {
    /// Resolve to a size: the suggested size when unconstrained, otherwise
    /// the size the parent offers.
    pub fn resolve(self, suggested: f32) -> f32 {
        match self {
            MeasureSpec::Unspecified => suggested,
            MeasureSpec::AtMost(size) | MeasureSpec::Exactly(size) => size,
        }
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Compute and remember the widget's size for the given constraints
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Draw the widget at its measured size
    fn paint(&self, ctx: &mut dyn DrawContext, text: &dyn TextMeasurer);

    /// Advance animations by one frame. Returns true while more frames are needed.
    fn tick(&mut self, dt: Duration) -> bool;

    fn is_animating(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::Unspecified.resolve(48.0), 48.0);
        assert_eq!(MeasureSpec::AtMost(200.0).resolve(48.0), 200.0);
        assert_eq!(MeasureSpec::Exactly(120.0).resolve(48.0), 120.0);
    }
}
