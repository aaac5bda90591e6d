//! Theme error types

use thiserror::Error;

/// Theme loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme file
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Theme document is not valid TOML or has the wrong shape
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written back out
    #[error("Failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Color string is not `#RRGGBB` or `#AARRGGBB`
    #[error("Invalid color for `{token}`: {value:?}")]
    InvalidColor { token: &'static str, value: String },

    /// Metric is not finite or not positive
    #[error("Invalid {field}: {value} (must be finite and positive)")]
    InvalidMetric { field: &'static str, value: f32 },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
