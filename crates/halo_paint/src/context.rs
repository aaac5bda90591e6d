//! Draw context - the drawing API widgets paint into

use smallvec::SmallVec;

use crate::paint::Paint;
use crate::primitives::{Point, Rect};

/// Drawing surface handed to widgets during a paint pass.
///
/// Angles are in degrees. 0° points at 3 o'clock and positive sweeps run
/// clockwise in screen space (y grows downward).
pub trait DrawContext {
    /// Draw the arc of the oval inscribed in `oval`.
    ///
    /// With `use_center` the arc is closed through the oval center (a wedge).
    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    );

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint);
}

/// A paint command recorded by [`PaintContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    DrawArc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: Paint,
    },
    DrawText {
        text: String,
        origin: Point,
        paint: Paint,
    },
}

/// Retained [`DrawContext`] that records commands for a renderer to replay
pub struct PaintContext {
    commands: SmallVec<[PaintCommand; 4]>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands).into_vec()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded arcs, in draw order
    pub fn arcs(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::DrawArc { .. }))
    }

    /// Recorded text runs, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::DrawText { .. }))
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for PaintContext {
    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    ) {
        self.commands.push(PaintCommand::DrawArc {
            oval,
            start_angle,
            sweep_angle,
            use_center,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) {
        self.commands.push(PaintCommand::DrawText {
            text: text.to_owned(),
            origin,
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        let ring = Paint::stroke(Color::BLACK, 5.0);
        ctx.draw_arc(Rect::new(5.0, 5.0, 100.0, 100.0), 0.0, 360.0, false, &ring);
        ctx.draw_text("hi", Point::new(10.0, 20.0), &Paint::text(Color::WHITE, 24.0));

        assert_eq!(ctx.commands().len(), 2);
        assert_eq!(ctx.arcs().count(), 1);
        assert_eq!(ctx.texts().count(), 1);
        assert!(matches!(ctx.commands()[0], PaintCommand::DrawArc { .. }));

        let taken = ctx.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(ctx.is_empty());
    }
}
