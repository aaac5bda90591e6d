//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    /// Pulls back before starting, overshoots before settling.
    ///
    /// `tension` controls both the pull-back and the overshoot amount.
    AnticipateOvershoot { tension: f32 },
}

impl Easing {
    /// Anticipate/overshoot with the given tension scaled by `extra`
    pub fn anticipate_overshoot(tension: f32, extra: f32) -> Self {
        Easing::AnticipateOvershoot {
            tension: tension * extra,
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::AnticipateOvershoot { tension } => {
                if t < 0.5 {
                    0.5 * anticipate(t * 2.0, *tension)
                } else {
                    0.5 * (overshoot(t * 2.0 - 2.0, *tension) + 2.0)
                }
            }
        }
    }
}

#[inline]
fn anticipate(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t - s)
}

#[inline]
fn overshoot(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t + s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::AnticipateOvershoot { tension: 3.0 },
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::default(), Easing::Linear);
    }

    #[test]
    fn test_anticipate_dips_below_zero() {
        let easing = Easing::anticipate_overshoot(2.0, 1.5);
        assert!(easing.apply(0.1) < 0.0);
        assert!(easing.apply(0.9) > 1.0);
    }
}
