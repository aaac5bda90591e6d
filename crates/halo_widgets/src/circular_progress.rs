//! Circular progress indicator
//!
//! A ring that fills clockwise from 12 o'clock as progress approaches `max`,
//! with an optional title centered inside it.
//!
//! The widget provides:
//! - Square measurement: the smaller offered dimension plus the ring stroke
//! - A full background ring, a progress arc, and a drop-shadowed title
//! - Time-based transitions between progress values with listener callbacks
//!
//! # Example
//!
//! ```ignore
//! use halo_widgets::{AnimationCallbacks, CircularProgressBar, Widget};
//!
//! let mut bar = CircularProgressBar::new();
//! bar.set_title("Syncing");
//! bar.animate_progress_to(
//!     Duration::from_millis(1000),
//!     0,
//!     50,
//!     AnimationCallbacks::new()
//!         .on_progress(|p| println!("{p}%"))
//!         .boxed(),
//! );
//!
//! // Host frame callback
//! while bar.tick(frame_dt) {
//!     bar.paint(&mut canvas, &measurer);
//! }
//! ```

use std::fmt;
use std::time::Duration;

use halo_animation::{Easing, ValueAnimator};
use halo_paint::{Color, DrawContext, Paint, Point, Rect, ShadowLayer, Size, TextMeasurer};
use halo_theme::{ColorToken, ProgressTheme, ThemeState};

use crate::listener::ProgressAnimationListener;
use crate::widget::{MeasureSpec, Widget};

/// Where the progress arc begins: 12 o'clock, with 0° at 3 o'clock
pub const PROGRESS_START_ANGLE: f32 = 270.0;

pub const DEFAULT_MAX: i32 = 100;

/// Configuration for building a circular progress bar
#[derive(Clone, Debug)]
pub struct CircularProgressConfig {
    /// Denominator of the progress fraction
    pub max: i32,
    /// Centered label, skipped when empty
    pub title: String,
    /// Thickness of both rings
    pub stroke_width: f32,
    /// Title text size
    pub title_size: f32,
    pub progress_color: Color,
    pub background_color: Color,
    pub title_color: Color,
    pub title_shadow_color: Color,
    /// Curve used by [`CircularProgressBar::animate_progress_to`]
    pub easing: Easing,
}

impl Default for CircularProgressConfig {
    fn default() -> Self {
        Self::from_theme(&ProgressTheme::default())
    }
}

impl CircularProgressConfig {
    /// Take colors and metrics from a theme
    pub fn from_theme(theme: &ProgressTheme) -> Self {
        Self {
            max: DEFAULT_MAX,
            title: String::new(),
            stroke_width: theme.stroke_width,
            title_size: theme.title_size,
            progress_color: theme.colors.get(ColorToken::Progress),
            background_color: theme.colors.get(ColorToken::Background),
            title_color: theme.colors.get(ColorToken::Title),
            title_shadow_color: theme.colors.get(ColorToken::TitleShadow),
            easing: Easing::Linear,
        }
    }

    /// Set the max value
    pub fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    /// Set the initial title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the ring thickness
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the title text size
    pub fn title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    /// Set the progress arc color
    pub fn progress_color(mut self, color: impl Into<Color>) -> Self {
        self.progress_color = color.into();
        self
    }

    /// Set the background ring color
    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the title color
    pub fn title_color(mut self, color: impl Into<Color>) -> Self {
        self.title_color = color.into();
        self
    }

    /// Set the animation easing
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// In-flight progress animation
struct ProgressTransition {
    animator: ValueAnimator,
    end: i32,
    listener: Option<Box<dyn ProgressAnimationListener>>,
}

impl ProgressTransition {
    fn listener(&mut self) -> Option<&mut (dyn ProgressAnimationListener + 'static)> {
        self.listener.as_deref_mut()
    }
}

/// Circular progress bar widget
pub struct CircularProgressBar {
    progress: i32,
    max: i32,
    title: String,
    stroke_width: f32,
    easing: Easing,
    /// Size used on an unconstrained axis
    min_size: Size,
    measured: Size,
    circle_bounds: Rect,
    progress_paint: Paint,
    background_paint: Paint,
    title_paint: Paint,
    transition: Option<ProgressTransition>,
    dirty: bool,
    on_redraw: Option<Box<dyn FnMut()>>,
}

impl CircularProgressBar {
    /// Create a progress bar styled by the global theme, or the built-in
    /// theme when none is installed
    pub fn new() -> Self {
        Self::with_theme(&ThemeState::current())
    }

    /// Create a progress bar styled by `theme`
    pub fn with_theme(theme: &ProgressTheme) -> Self {
        Self::with_config(CircularProgressConfig::from_theme(theme))
    }

    /// Create a progress bar with custom config
    pub fn with_config(config: CircularProgressConfig) -> Self {
        let stroke_width = config.stroke_width.max(0.0);
        let max = config.max.max(0);

        Self {
            progress: 0,
            max,
            title: config.title,
            stroke_width,
            easing: config.easing,
            min_size: Size::ZERO,
            measured: Size::ZERO,
            circle_bounds: Rect::ZERO,
            progress_paint: Paint::stroke(config.progress_color, stroke_width),
            background_paint: Paint::stroke(config.background_color, stroke_width),
            title_paint: Paint::text(config.title_color, config.title_size)
                .with_shadow(ShadowLayer::subtle(config.title_shadow_color)),
            transition: None,
            dirty: true,
            on_redraw: None,
        }
    }

    // ========== Progress ==========

    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Set the progress, clamped to `[0, max]`. Always requests a redraw.
    pub fn set_progress(&mut self, progress: i32) {
        self.progress = progress.clamp(0, self.max);
        self.invalidate();
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the max value. Negative values become 0 and progress is pulled
    /// down to the new max.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.progress = self.progress.min(self.max);
        self.invalidate();
    }

    /// Degrees of arc for the current progress, 0 when max is 0
    pub fn sweep_angle(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.progress as f32 / self.max as f32 * 360.0).clamp(0.0, 360.0)
    }

    // ========== Title ==========

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.invalidate();
    }

    // ========== Paints ==========

    pub fn set_title_color(&mut self, color: impl Into<Color>) {
        self.title_paint.set_color(color.into());
        self.invalidate();
    }

    pub fn set_progress_color(&mut self, color: impl Into<Color>) {
        self.progress_paint.set_color(color.into());
        self.invalidate();
    }

    pub fn set_background_color(&mut self, color: impl Into<Color>) {
        self.background_paint.set_color(color.into());
        self.invalidate();
    }

    pub fn title_color(&self) -> Color {
        self.title_paint.color
    }

    pub fn progress_color(&self) -> Color {
        self.progress_paint.color
    }

    pub fn background_color(&self) -> Color {
        self.background_paint.color
    }

    // ========== Layout ==========

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Size to fall back to on an axis the parent leaves unconstrained
    pub fn set_min_size(&mut self, size: Size) {
        self.min_size = size;
    }

    /// Size computed by the last [`Widget::measure`]
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Oval both rings are drawn in
    pub fn circle_bounds(&self) -> Rect {
        self.circle_bounds
    }

    // ========== Redraw ==========

    /// Register the sink for redraw requests. Replaces any previous one.
    pub fn on_redraw<F: FnMut() + 'static>(&mut self, callback: F) {
        self.on_redraw = Some(Box::new(callback));
    }

    /// Whether a mutation happened since the last [`clear_dirty`](Self::clear_dirty)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn invalidate(&mut self) {
        self.dirty = true;
        if let Some(ref mut callback) = self.on_redraw {
            callback();
        }
    }

    // ========== Animation ==========

    /// Animate the displayed progress from `start` to `end` over `duration`.
    ///
    /// A non-zero `start` is applied immediately. Any running animation is
    /// cancelled first and its listener gets `on_animation_cancel`. The
    /// host drives the animation through [`Widget::tick`].
    pub fn animate_progress_to(
        &mut self,
        duration: Duration,
        start: i32,
        end: i32,
        listener: Option<Box<dyn ProgressAnimationListener>>,
    ) {
        self.cancel_animation();

        if start != 0 {
            self.set_progress(start);
        }

        let mut animator =
            ValueAnimator::new(start as f32, end as f32, duration).with_easing(self.easing);
        animator.start();

        let mut transition = ProgressTransition {
            animator,
            end,
            listener,
        };

        tracing::debug!(
            start,
            end,
            duration_ms = duration.as_millis() as u64,
            "progress animation started"
        );
        if let Some(listener) = transition.listener() {
            listener.on_animation_start();
        }
        self.transition = Some(transition);
    }

    /// Cancel the running animation, leaving progress where it is.
    ///
    /// Returns false if nothing was running.
    pub fn cancel_animation(&mut self) -> bool {
        let Some(mut transition) = self.transition.take() else {
            return false;
        };
        transition.animator.cancel();
        tracing::debug!(
            progress = self.progress,
            end = transition.end,
            "progress animation cancelled"
        );
        if let Some(listener) = transition.listener() {
            listener.on_animation_cancel();
        }
        true
    }
}

impl Default for CircularProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CircularProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularProgressBar")
            .field("progress", &self.progress)
            .field("max", &self.max)
            .field("title", &self.title)
            .field("stroke_width", &self.stroke_width)
            .field("measured", &self.measured)
            .field("animating", &self.transition.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for CircularProgressBar {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let width = width.resolve(self.min_size.width);
        let height = height.resolve(self.min_size.height);
        let side = width.min(height).max(0.0);

        self.measured = Size::square(side + 2.0 * self.stroke_width);
        self.circle_bounds = Rect::from_size(self.measured).inset(self.stroke_width);

        tracing::trace!(
            side = self.measured.width,
            bounds = ?self.circle_bounds,
            "measured circular progress"
        );
        self.measured
    }

    fn paint(&self, ctx: &mut dyn DrawContext, text: &dyn TextMeasurer) {
        ctx.draw_arc(self.circle_bounds, 0.0, 360.0, false, &self.background_paint);
        ctx.draw_arc(
            self.circle_bounds,
            PROGRESS_START_ANGLE,
            self.sweep_angle(),
            false,
            &self.progress_paint,
        );

        if !self.title.is_empty() {
            let metrics = text.measure(&self.title, &self.title_paint);
            // Halves of the box and text height are whole pixels.
            let x = ((self.measured.width / 2.0).trunc() - metrics.width / 2.0).trunc();
            let y = (self.measured.height / 2.0).trunc() + (metrics.height / 2.0).trunc();
            ctx.draw_text(&self.title, Point::new(x, y), &self.title_paint);
        }

        tracing::trace!(
            progress = self.progress,
            max = self.max,
            sweep = self.sweep_angle(),
            "painted circular progress"
        );
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let Some(mut transition) = self.transition.take() else {
            return false;
        };
        let Some(frame) = transition.animator.tick(dt) else {
            return false;
        };

        // Truncates toward zero, like an integer cast of the animated float.
        let value = frame.value as i32;
        if value != self.progress {
            tracing::debug!(progress = value, "animated progress step");
            self.set_progress(value);
            if let Some(listener) = transition.listener() {
                listener.on_animation_progress(value);
            }
        }

        if frame.finished {
            // Snap to the exact end value regardless of interpolation rounding.
            self.set_progress(transition.end);
            tracing::debug!(progress = self.progress, "progress animation finished");
            if let Some(listener) = transition.listener() {
                listener.on_animation_finish();
            }
            return false;
        }

        self.transition = Some(transition);
        true
    }

    fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_paint::{FixedAdvanceMeasurer, PaintCommand, PaintContext};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn bar() -> CircularProgressBar {
        CircularProgressBar::with_theme(&ProgressTheme::default())
    }

    fn arc_sweeps(ctx: &PaintContext) -> Vec<(f32, f32)> {
        ctx.arcs()
            .map(|c| match c {
                PaintCommand::DrawArc {
                    start_angle,
                    sweep_angle,
                    ..
                } => (*start_angle, *sweep_angle),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let bar = bar();
        assert_eq!(bar.progress(), 0);
        assert_eq!(bar.max(), DEFAULT_MAX);
        assert_eq!(bar.title(), "");
        assert_eq!(bar.stroke_width(), 5.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut bar = bar();
        bar.set_progress(150);
        assert_eq!(bar.progress(), 100);
        bar.set_progress(-4);
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_set_max_pulls_progress_down() {
        let mut bar = bar();
        bar.set_progress(80);
        bar.set_max(40);
        assert_eq!(bar.progress(), 40);
        bar.set_max(-1);
        assert_eq!(bar.max(), 0);
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_sweep_angle() {
        let mut bar = bar();
        bar.set_progress(25);
        assert_eq!(bar.sweep_angle(), 90.0);
        bar.set_max(0);
        assert_eq!(bar.sweep_angle(), 0.0);
    }

    #[test]
    fn test_measure_is_square_with_stroke_padding() {
        let mut bar = bar();
        let size = bar.measure(MeasureSpec::Exactly(200.0), MeasureSpec::AtMost(120.0));
        assert_eq!(size, Size::square(130.0));
        assert_eq!(bar.circle_bounds(), Rect::new(5.0, 5.0, 120.0, 120.0));
    }

    #[test]
    fn test_measure_unspecified_uses_min_size() {
        let mut bar = bar();
        bar.set_min_size(Size::new(64.0, 48.0));
        let size = bar.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size::square(58.0));
    }

    #[test]
    fn test_paint_draws_track_then_arc() {
        let mut bar = bar();
        bar.measure(MeasureSpec::Exactly(100.0), MeasureSpec::Exactly(100.0));
        bar.set_progress(50);

        let mut ctx = PaintContext::new();
        bar.paint(&mut ctx, &FixedAdvanceMeasurer::default());

        assert_eq!(arc_sweeps(&ctx), vec![(0.0, 360.0), (270.0, 180.0)]);
        assert_eq!(ctx.texts().count(), 0);
    }

    #[test]
    fn test_title_is_centered() {
        let mut bar = bar();
        bar.measure(MeasureSpec::Exactly(100.0), MeasureSpec::Exactly(100.0));
        bar.set_title("50%");

        let mut ctx = PaintContext::new();
        bar.paint(&mut ctx, &FixedAdvanceMeasurer::default());

        // 110px box, "50%" at 24px: 36px wide, 18px tall
        let title = ctx.texts().next().cloned();
        match title {
            Some(PaintCommand::DrawText {
                text,
                origin,
                paint,
            }) => {
                assert_eq!(text, "50%");
                assert_eq!(origin, Point::new(37.0, 64.0));
                assert!(paint.shadow.is_some());
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn test_title_position_uses_whole_pixel_halves() {
        let mut bar = CircularProgressBar::with_config(
            CircularProgressConfig::default().title_size(25.0),
        );
        bar.measure(MeasureSpec::Exactly(101.0), MeasureSpec::Exactly(101.0));
        bar.set_title("7");

        let mut ctx = PaintContext::new();
        bar.paint(&mut ctx, &FixedAdvanceMeasurer::default());

        // 111px box halves to 55; "7" at 25px is 12.5 wide, 18.75 tall
        let origin = match ctx.texts().next().cloned() {
            Some(PaintCommand::DrawText { origin, .. }) => origin,
            other => panic!("expected title, got {other:?}"),
        };
        assert_eq!(origin, Point::new(48.0, 64.0));
    }

    #[test]
    fn test_every_mutation_requests_one_redraw() {
        let mut bar = bar();
        let redraws = Rc::new(Cell::new(0));
        let counter = redraws.clone();
        bar.on_redraw(move || counter.set(counter.get() + 1));

        bar.set_progress(10);
        bar.set_progress(10);
        bar.set_title("x");
        bar.set_title_color(Color::WHITE);
        bar.set_progress_color(Color::BLACK);
        bar.set_background_color(Color::GRAY);
        bar.set_max(50);
        assert_eq!(redraws.get(), 7);
        assert!(bar.is_dirty());

        bar.clear_dirty();
        assert!(!bar.is_dirty());
    }

    #[test]
    fn test_animation_event_order() {
        let events = Rc::new(RefCell::new(Vec::<String>::new()));
        let (a, b, c) = (events.clone(), events.clone(), events.clone());

        let mut bar = bar();
        bar.animate_progress_to(
            Duration::from_millis(100),
            0,
            10,
            crate::AnimationCallbacks::new()
                .on_start(move || a.borrow_mut().push("start".into()))
                .on_progress(move |p| b.borrow_mut().push(format!("p{p}")))
                .on_finish(move || c.borrow_mut().push("finish".into()))
                .boxed(),
        );
        while bar.tick(Duration::from_millis(25)) {}

        assert_eq!(
            *events.borrow(),
            vec!["start", "p2", "p5", "p7", "p10", "finish"]
        );
        assert_eq!(bar.progress(), 10);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_second_animation_cancels_first() {
        let cancelled = Rc::new(Cell::new(false));
        let finished = Rc::new(Cell::new(false));
        let (cancel_flag, finish_flag) = (cancelled.clone(), finished.clone());

        let mut bar = bar();
        bar.animate_progress_to(
            Duration::from_millis(100),
            0,
            100,
            crate::AnimationCallbacks::new()
                .on_cancel(move || cancel_flag.set(true))
                .on_finish(move || finish_flag.set(true))
                .boxed(),
        );
        bar.tick(Duration::from_millis(50));
        bar.animate_progress_to(Duration::from_millis(100), 20, 30, None);

        assert!(cancelled.get());
        assert_eq!(bar.progress(), 20);
        while bar.tick(Duration::from_millis(16)) {}
        assert!(!finished.get());
        assert_eq!(bar.progress(), 30);
    }

    #[test]
    fn test_cancel_without_animation() {
        let mut bar = bar();
        assert!(!bar.cancel_animation());
        assert!(!bar.tick(Duration::from_millis(16)));
    }
}
