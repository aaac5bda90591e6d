//! Headless Circular Progress Demo
//!
//! Drives a circular progress bar through an animated transition at the
//! display rate and logs the recorded paint commands of the final frame.
//!
//! Run with: RUST_LOG=debug cargo run -p halo_widgets --example headless_progress [theme.toml]

use std::time::Duration;

use anyhow::{Context, Result};
use halo_animation::FrameClock;
use halo_paint::{FixedAdvanceMeasurer, PaintContext};
use halo_theme::{ProgressTheme, ThemeState};
use halo_widgets::{AnimationCallbacks, CircularProgressBar, MeasureSpec, Widget};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = std::env::args().nth(1) {
        let theme = ProgressTheme::load(&path)
            .with_context(|| format!("Failed to load theme from {path}"))?;
        ThemeState::init(theme);
    }

    let mut bar = CircularProgressBar::new();
    bar.set_title("Loading");
    let size = bar.measure(MeasureSpec::Exactly(200.0), MeasureSpec::AtMost(320.0));
    tracing::info!(width = size.width, height = size.height, "measured");

    bar.animate_progress_to(
        Duration::from_millis(750),
        0,
        75,
        AnimationCallbacks::new()
            .on_start(|| tracing::info!("animation started"))
            .on_progress(|p| tracing::info!(progress = p, "progress"))
            .on_finish(|| tracing::info!("animation finished"))
            .boxed(),
    );

    let mut clock = FrameClock::new();
    let frame = clock.frame_interval();
    clock.tick();
    loop {
        std::thread::sleep(frame);
        if !bar.tick(clock.tick()) {
            break;
        }
    }

    let mut ctx = PaintContext::new();
    bar.paint(&mut ctx, &FixedAdvanceMeasurer::default());
    for command in ctx.take_commands() {
        tracing::info!(?command, "paint");
    }

    Ok(())
}
