//! Progress animation listeners

/// Receives lifecycle events of a progress animation.
///
/// All callbacks run on the thread that ticks the widget.
pub trait ProgressAnimationListener {
    /// The animation has started. Fires before any progress callback.
    fn on_animation_start(&mut self);

    /// The animation reached its end value. Fires once, after the last
    /// progress callback.
    fn on_animation_finish(&mut self);

    /// The displayed progress changed to `progress`
    fn on_animation_progress(&mut self, progress: i32);

    /// The animation was replaced or cancelled before finishing
    fn on_animation_cancel(&mut self) {}
}

/// Closure bundle implementing [`ProgressAnimationListener`].
///
/// Unset callbacks are ignored.
#[derive(Default)]
pub struct AnimationCallbacks {
    on_start: Option<Box<dyn FnMut()>>,
    on_finish: Option<Box<dyn FnMut()>>,
    on_progress: Option<Box<dyn FnMut(i32)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl AnimationCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_finish<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_finish = Some(Box::new(callback));
        self
    }

    pub fn on_progress<F: FnMut(i32) + 'static>(mut self, callback: F) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    pub fn on_cancel<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    /// Box for [`CircularProgressBar::animate_progress_to`](crate::CircularProgressBar::animate_progress_to)
    pub fn boxed(self) -> Option<Box<dyn ProgressAnimationListener>> {
        Some(Box::new(self))
    }
}

impl ProgressAnimationListener for AnimationCallbacks {
    fn on_animation_start(&mut self) {
        if let Some(ref mut callback) = self.on_start {
            callback();
        }
    }

    fn on_animation_finish(&mut self) {
        if let Some(ref mut callback) = self.on_finish {
            callback();
        }
    }

    fn on_animation_progress(&mut self, progress: i32) {
        if let Some(ref mut callback) = self.on_progress {
            callback(progress);
        }
    }

    fn on_animation_cancel(&mut self) {
        if let Some(ref mut callback) = self.on_cancel {
            callback();
        }
    }
}
