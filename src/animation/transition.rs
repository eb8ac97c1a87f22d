use crate::{
    animation::{ease::Ease, spring::Spring},
    foundation::core::Vec2,
    foundation::error::{FolioError, FolioResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (`t = 0`) to `b` (`t = 1`). `t` may leave `[0, 1]` for springs.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Visual state of an animated element: opacity plus translation from its laid-out position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation in CSS pixels (positive y moves down).
    pub offset: Vec2,
}

impl Pose {
    /// Fully opaque at the laid-out position.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
    };

    /// Transparent and pushed `dy` pixels below the laid-out position.
    pub fn hidden_below(dy: f64) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::new(0.0, dy),
        }
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            offset: <Vec2 as Lerp>::lerp(&a.offset, &b.offset, t),
        }
    }
}

/// Time curve of a transition once its delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Motion {
    /// Fixed-duration eased tween.
    Tween {
        /// Duration in seconds, `> 0`.
        duration: f64,
        /// Easing curve.
        ease: Ease,
    },
    /// Physically simulated spring.
    Spring(Spring),
}

impl Motion {
    /// Normalized progress `elapsed` seconds after the motion started.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Tween { duration, ease } => ease.apply(elapsed / duration),
            Self::Spring(spring) => spring.progress(elapsed),
        }
    }

    /// Seconds until the motion is visually at rest.
    pub fn settle_time(&self) -> f64 {
        match self {
            Self::Tween { duration, .. } => *duration,
            Self::Spring(spring) => spring.settle_time(1e-3).unwrap_or(f64::INFINITY),
        }
    }

    /// Validate motion parameters.
    pub fn validate(&self) -> FolioResult<()> {
        match self {
            Self::Tween { duration, ease } => {
                if !duration.is_finite() || *duration <= 0.0 {
                    return Err(FolioError::animation("tween duration must be > 0"));
                }
                ease.validate()
            }
            Self::Spring(spring) => spring.validate(),
        }
    }
}

/// A motion that starts after `delay` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Seconds before the motion starts, `>= 0`.
    pub delay: f64,
    /// Motion curve.
    pub motion: Motion,
}

impl Transition {
    /// Transition with no delay.
    pub fn immediate(motion: Motion) -> Self {
        Self { delay: 0.0, motion }
    }

    /// Same motion, with `extra` seconds added to the delay.
    pub fn delayed_by(self, extra: f64) -> Self {
        Self {
            delay: self.delay + extra,
            ..self
        }
    }

    /// Progress `t` seconds after the transition was triggered.
    pub fn progress_at(&self, t: f64) -> f64 {
        self.motion.progress(t - self.delay)
    }

    /// Sample `from -> to` at `t` seconds after the trigger.
    pub fn sample<T: Lerp>(&self, from: &T, to: &T, t: f64) -> T {
        T::lerp(from, to, self.progress_at(t))
    }

    /// Return `true` once the motion has come to rest.
    pub fn is_finished_at(&self, t: f64) -> bool {
        t - self.delay >= self.motion.settle_time()
    }

    /// Validate delay and motion parameters.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(FolioError::animation("transition delay must be >= 0"));
        }
        self.motion.validate()
    }
}

/// Start delays for `count` items: `base + index * step`, in declaration order.
pub fn stagger_delays(base: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| base + step * i as f64).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
