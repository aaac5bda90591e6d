//! Text measurement
//!
//! Widgets never load fonts themselves. The host supplies a [`TextMeasurer`]
//! backed by whatever shaping engine renders the text, so layout and
//! rendering agree on metrics.

use crate::paint::Paint;

/// Metrics of a single line of text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole run
    pub width: f32,
    /// Height of the tight glyph bounds
    pub height: f32,
}

pub trait TextMeasurer {
    /// Measure `text` as it would be drawn with `paint`
    fn measure(&self, text: &str, paint: &Paint) -> TextMetrics;
}

/// Measurer that assumes every glyph has the same advance.
///
/// Useful for tests and headless hosts with no font stack. Advance and
/// bounds height are fractions of the paint's text size.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvanceMeasurer {
    pub advance_ratio: f32,
    pub height_ratio: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            height_ratio: 0.75,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, paint: &Paint) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }
        let glyphs = text.chars().count() as f32;
        TextMetrics {
            width: glyphs * paint.text_size * self.advance_ratio,
            height: paint.text_size * self.height_ratio,
        }
    }
}
