//! Global theme state singleton
//!
//! Hosts that want every widget to share one theme initialize [`ThemeState`]
//! once at startup. Widgets built afterwards read their defaults from it;
//! without it they fall back to [`ProgressTheme::default`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, OnceLock, PoisonError, RwLock,
};

use halo_paint::Color;
use rustc_hash::FxHashMap;

use crate::theme::ProgressTheme;
use crate::tokens::ColorToken;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the host to repaint after theme changes
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

/// Global theme state - read by widgets when they are constructed
pub struct ThemeState {
    theme: RwLock<ProgressTheme>,

    /// Dynamic color overrides
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,

    /// Set whenever colors change, cleared by the host after repainting
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Initialize the global theme state.
    ///
    /// Returns false if it was already initialized; the existing theme is kept.
    pub fn init(theme: ProgressTheme) -> bool {
        tracing::debug!(name = %theme.name, "initializing theme state");
        let state = ThemeState {
            theme: RwLock::new(theme),
            color_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
        };
        let installed = THEME_STATE.set(state).is_ok();
        if !installed {
            tracing::warn!("theme state already initialized, keeping existing theme");
        }
        installed
    }

    /// Get the global theme state (None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Effective theme for new widgets: the global theme with overrides
    /// applied, or the built-in default
    pub fn current() -> ProgressTheme {
        Self::try_get()
            .map(ThemeState::resolved)
            .unwrap_or_default()
    }

    /// The theme with color overrides applied
    pub fn resolved(&self) -> ProgressTheme {
        let mut theme = self.read_theme();
        let overrides = self
            .color_overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (token, color) in overrides.iter() {
            theme.colors.set(*token, *color);
        }
        theme
    }

    /// Get a color token value (checks override first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self
            .color_overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token)
        {
            return *color;
        }
        self.read_theme().colors.get(token)
    }

    /// Replace the whole theme. Overrides stay in place.
    pub fn set_theme(&self, theme: ProgressTheme) {
        tracing::debug!(name = %theme.name, "switching theme");
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = theme;
        self.mark_repaint();
    }

    /// Set a color override (triggers repaint only)
    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, color);
        self.mark_repaint();
    }

    /// Remove a color override
    pub fn remove_color_override(&self, token: ColorToken) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token);
        self.mark_repaint();
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.mark_repaint();
    }

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    fn read_theme(&self) -> ProgressTheme {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn mark_repaint(&self) {
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }
}
