//! Halo Theme System
//!
//! Supplies the default colors and metrics widgets read at construction.
//!
//! # Overview
//!
//! - **Tokens**: Semantic colors for the progress arc, track, title and title shadow
//! - **Theme files**: TOML documents deserialized with serde and validated
//! - **Global state**: An optional process-wide theme with per-token overrides
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use halo_theme::{ColorToken, ProgressTheme, ThemeState};
//!
//! // Initialize theme at app startup
//! ThemeState::init(ProgressTheme::load("theme.toml")?);
//!
//! // Widgets pick it up when they are built
//! let theme = ThemeState::current();
//! let arc = theme.colors.get(ColorToken::Progress);
//! ```
//!
//! # Theme files
//!
//! ```toml
//! name = "ocean"
//! stroke_width = 6.0
//! title_size = 20.0
//!
//! [colors]
//! progress = "#FF0099CC"
//! background = "#33000000"
//! ```
//!
//! Colors are `#RRGGBB` or `#AARRGGBB`. Anything left out keeps its default.

pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use state::{set_redraw_callback, ThemeState};
pub use theme::{ProgressTheme, ThemeFile};
pub use tokens::{ColorToken, ColorTokens};
