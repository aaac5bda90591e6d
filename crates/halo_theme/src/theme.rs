//! Progress theme and its TOML representation

use std::fs;
use std::path::Path;

use halo_paint::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::tokens::{ColorToken, ColorTokens};

/// Ring thickness in pixels when a theme does not say otherwise
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Title text size in pixels when a theme does not say otherwise
pub const DEFAULT_TITLE_SIZE: f32 = 24.0;

/// Validated theme values a progress widget is built from
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTheme {
    pub name: String,
    pub colors: ColorTokens,
    pub stroke_width: f32,
    pub title_size: f32,
}

impl Default for ProgressTheme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorTokens::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            title_size: DEFAULT_TITLE_SIZE,
        }
    }
}

impl ProgressTheme {
    /// Load a theme from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %theme.name, "loaded theme");
        Ok(theme)
    }

    /// Parse a theme from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(content)?;
        Self::try_from(file)
    }

    /// Serialize to a TOML document that [`from_toml_str`](Self::from_toml_str) reads back
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.to_file())?)
    }

    /// Fully specified file form of this theme
    pub fn to_file(&self) -> ThemeFile {
        ThemeFile {
            name: Some(self.name.clone()),
            stroke_width: Some(self.stroke_width),
            title_size: Some(self.title_size),
            colors: ColorFile {
                progress: Some(format_color(self.colors.progress)),
                background: Some(format_color(self.colors.background)),
                title: Some(format_color(self.colors.title)),
                title_shadow: Some(format_color(self.colors.title_shadow)),
            },
        }
    }
}

/// On-disk theme document. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_size: Option<f32>,
    pub colors: ColorFile,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_shadow: Option<String>,
}

impl ColorFile {
    fn entry(&self, token: ColorToken) -> Option<&str> {
        match token {
            ColorToken::Progress => self.progress.as_deref(),
            ColorToken::Background => self.background.as_deref(),
            ColorToken::Title => self.title.as_deref(),
            ColorToken::TitleShadow => self.title_shadow.as_deref(),
        }
    }
}

impl TryFrom<ThemeFile> for ProgressTheme {
    type Error = ThemeError;

    fn try_from(file: ThemeFile) -> Result<Self> {
        let defaults = ProgressTheme::default();

        let mut colors = defaults.colors;
        for token in ColorToken::ALL {
            if let Some(value) = file.colors.entry(token) {
                colors.set(token, parse_color(token.key(), value)?);
            }
        }

        let stroke_width = validate_metric(
            "stroke_width",
            file.stroke_width.unwrap_or(defaults.stroke_width),
        )?;
        let title_size =
            validate_metric("title_size", file.title_size.unwrap_or(defaults.title_size))?;

        Ok(Self {
            name: file.name.unwrap_or(defaults.name),
            colors,
            stroke_width,
            title_size,
        })
    }
}

fn validate_metric(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::InvalidMetric { field, value })
    }
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB`
pub fn parse_color(token: &'static str, value: &str) -> Result<Color> {
    let invalid = || ThemeError::InvalidColor {
        token,
        value: value.to_string(),
    };

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    match hex.len() {
        6 => Ok(Color::from_argb(0xFF00_0000 | packed)),
        8 => Ok(Color::from_argb(packed)),
        _ => Err(invalid()),
    }
}

/// Format as `#AARRGGBB`
pub fn format_color(color: Color) -> String {
    format!("#{:08X}", color.to_argb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_forms() {
        let opaque = parse_color("progress", "#0099CC").unwrap();
        assert_eq!(opaque.to_argb(), 0xFF0099CC);

        let translucent = parse_color("progress", "#330099CC").unwrap();
        assert_eq!(translucent.to_argb(), 0x330099CC);
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        for bad in ["0099CC", "#09C", "#GG0000", "#+99CC00", "#0099CC00FF"] {
            assert!(
                matches!(
                    parse_color("title", bad),
                    Err(ThemeError::InvalidColor { token: "title", .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(Color::from_argb(0x80112233)), "#80112233");
    }

    #[test]
    fn test_empty_document_is_default() {
        let theme = ProgressTheme::from_toml_str("").unwrap();
        assert_eq!(theme, ProgressTheme::default());
    }

    #[test]
    fn test_metrics_are_validated() {
        let err = ProgressTheme::from_toml_str("stroke_width = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidMetric {
                field: "stroke_width",
                ..
            }
        ));

        let err = ProgressTheme::from_toml_str("title_size = -3.0").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidMetric {
                field: "title_size",
                ..
            }
        ));
    }
}
