use crate::foundation::error::{FolioError, FolioResult};

const MAX_SETTLE_SECS: f64 = 30.0;

/// Damped harmonic spring driving normalized progress from `0` to `1`.
///
/// Progress starts at rest and may overshoot `1` when underdamped; callers clamp where the
/// animated property has a hard range (opacity).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Spring constant `k`, must be `> 0`.
    pub stiffness: f64,
    /// Damping coefficient `c`, must be `>= 0`.
    pub damping: f64,
    /// Mass `m`, must be `> 0`.
    pub mass: f64,
}

impl Spring {
    /// Build a validated spring.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> FolioResult<Self> {
        let s = Self {
            stiffness,
            damping,
            mass,
        };
        s.validate()?;
        Ok(s)
    }

    /// Check that the constants describe a physical spring.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(FolioError::animation("spring stiffness must be > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(FolioError::animation("spring damping must be >= 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(FolioError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`. Below `1` the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress at `t` seconds after release. Negative `t` is clamped to rest at `0`.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Seconds until the displacement from `1` stays below `rest_delta`.
    ///
    /// Returns `None` for an undamped spring, which never settles.
    pub fn settle_time(&self, rest_delta: f64) -> Option<f64> {
        let rest_delta = rest_delta.max(1e-9);
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta <= 0.0 {
            return None;
        }

        if zeta < 1.0 {
            // Envelope bound of the oscillation.
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amp = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            return Some(((amp / rest_delta).ln() / (zeta * w0)).clamp(0.0, MAX_SETTLE_SECS));
        }

        // Non-oscillating: progress is monotonic, scan forward.
        let step = 1.0 / 240.0;
        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if 1.0 - self.progress(t) < rest_delta {
                return Some(t);
            }
            t += step;
        }
        Some(MAX_SETTLE_SECS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
