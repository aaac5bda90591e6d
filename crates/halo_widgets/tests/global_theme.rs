//! Widgets built after the global theme is installed pick it up.
//!
//! Kept in its own test binary: the theme state is a process-wide singleton.

use halo_paint::Color;
use halo_theme::{ColorToken, ProgressTheme, ThemeState};
use halo_widgets::{CircularProgressBar, MeasureSpec, Widget};

#[test]
fn new_widgets_use_global_theme_and_overrides() {
    let theme = ProgressTheme::from_toml_str(
        r##"
        name = "ocean"
        stroke_width = 12.0

        [colors]
        progress = "#FF0099CC"
        "##,
    )
    .unwrap();
    assert!(ThemeState::init(theme));

    let mut bar = CircularProgressBar::new();
    assert_eq!(bar.stroke_width(), 12.0);
    assert_eq!(bar.progress_color().to_argb(), 0xFF0099CC);
    let size = bar.measure(MeasureSpec::Exactly(100.0), MeasureSpec::Exactly(100.0));
    assert_eq!(size.width, 124.0);

    let state = ThemeState::try_get().unwrap();
    state.set_color_override(ColorToken::Title, Color::WHITE);

    // Existing widgets own their paints; only new ones see the override.
    let fresh = CircularProgressBar::new();
    assert_eq!(fresh.title_color(), Color::WHITE);
    assert_ne!(bar.title_color(), Color::WHITE);
}
