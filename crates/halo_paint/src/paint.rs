//! Paint descriptors
//!
//! A [`Paint`] bundles everything a draw call needs to know about how to
//! render: color, fill or stroke, stroke width, text size and an optional
//! shadow layer. Widgets own their paints and hand references to the
//! [`DrawContext`](crate::DrawContext) on every pass.

use crate::color::Color;

/// Whether geometry is filled or outlined
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Shadow drawn underneath text or shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub radius: f32,
    pub dx: f32,
    pub dy: f32,
    pub color: Color,
}

impl ShadowLayer {
    pub const fn new(radius: f32, dx: f32, dy: f32, color: Color) -> Self {
        Self {
            radius,
            dx,
            dy,
            color,
        }
    }

    /// One pixel drop shadow used under labels
    pub const fn subtle(color: Color) -> Self {
        Self::new(0.1, 0.0, 1.0, color)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
    pub text_size: f32,
    pub shadow: Option<ShadowLayer>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            anti_alias: false,
            text_size: 12.0,
            shadow: None,
        }
    }
}

impl Paint {
    /// Anti-aliased outline paint
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            anti_alias: true,
            ..Default::default()
        }
    }

    /// Anti-aliased fill paint for text
    pub fn text(color: Color, size: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            anti_alias: true,
            text_size: size,
            ..Default::default()
        }
    }

    pub fn with_shadow(mut self, shadow: ShadowLayer) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
