//! Color tokens for theming

use halo_paint::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Foreground arc
    Progress,
    /// Full background ring
    Background,
    /// Centered label
    Title,
    /// Drop shadow under the label
    TitleShadow,
}

impl ColorToken {
    pub const ALL: [ColorToken; 4] = [
        ColorToken::Progress,
        ColorToken::Background,
        ColorToken::Title,
        ColorToken::TitleShadow,
    ];

    /// Key used in theme files
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Progress => "progress",
            ColorToken::Background => "background",
            ColorToken::Title => "title",
            ColorToken::TitleShadow => "title_shadow",
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub progress: Color,
    pub background: Color,
    pub title: Color,
    pub title_shadow: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Progress => self.progress,
            ColorToken::Background => self.background,
            ColorToken::Title => self.title,
            ColorToken::TitleShadow => self.title_shadow,
        }
    }

    /// Replace a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Progress => self.progress = color,
            ColorToken::Background => self.background = color,
            ColorToken::Title => self.title = color,
            ColorToken::TitleShadow => self.title_shadow = color,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            progress: Color::from_argb(0xFF33B5E5),
            background: Color::from_argb(0xFFDDDDDD),
            title: Color::from_argb(0xFF333333),
            title_shadow: Color::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_for_every_token() {
        let mut colors = ColorTokens::default();
        for token in ColorToken::ALL {
            colors.set(token, Color::WHITE);
            assert_eq!(colors.get(token), Color::WHITE, "{}", token.key());
        }
    }
}
