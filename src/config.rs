//! Tunable constants of the scroll tracker, reveal system, letter sequencer and nav indicator.
//!
//! Every field has a default matching the stock page; a JSON file may override any subset.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::{ease::Ease, spring::Spring, transition::Motion};
use crate::foundation::error::{FolioError, FolioResult};

/// Complete configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Scroll position tracker thresholds.
    pub tracker: TrackerConfig,
    /// Viewport reveal trigger and cascade.
    pub reveal: RevealConfig,
    /// Letter reveal sequencer.
    pub letters: LettersConfig,
    /// Shared navigation indicator motion.
    pub indicator: IndicatorConfig,
}

impl FolioConfig {
    /// Parse a configuration from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FolioError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> FolioResult<()> {
        self.tracker.validate()?;
        self.reveal.validate()?;
        self.letters.validate()?;
        self.indicator.spring.validate()
    }
}

/// Thresholds used by [`crate::ScrollTracker`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// `is_scrolled` turns on strictly above this offset.
    pub scrolled_threshold: f64,
    /// Look-ahead added to the scroll offset, compensating for the fixed nav bar height.
    pub look_ahead: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            look_ahead: 100.0,
        }
    }
}

impl TrackerConfig {
    pub(crate) fn validate(&self) -> FolioResult<()> {
        if !self.scrolled_threshold.is_finite() || self.scrolled_threshold < 0.0 {
            return Err(FolioError::validation(
                "tracker.scrolled_threshold must be finite and >= 0",
            ));
        }
        if !self.look_ahead.is_finite() {
            return Err(FolioError::validation("tracker.look_ahead must be finite"));
        }
        Ok(())
    }
}

/// Reveal trigger and cascade parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Root margin applied to every viewport edge. Negative shrinks the viewport.
    pub margin: f64,
    /// Fraction of the block height that must intersect, in `[0, 1]`. `0` means any overlap.
    pub amount: f64,
    /// Hidden blocks start this many pixels below their laid-out position.
    pub offset_y: f64,
    /// Motion of a block (and of each cascaded child).
    pub motion: Motion,
    /// Delay before the first child of a cascade starts.
    pub delay_children: f64,
    /// Extra delay per child index in a cascade.
    pub stagger_children: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin: -100.0,
            amount: 0.0,
            offset_y: 50.0,
            motion: Motion::Tween {
                duration: 0.6,
                ease: Ease::OutCubic,
            },
            delay_children: 0.0,
            stagger_children: 0.1,
        }
    }
}

impl RevealConfig {
    pub(crate) fn validate(&self) -> FolioResult<()> {
        if !self.margin.is_finite() || !self.offset_y.is_finite() {
            return Err(FolioError::validation(
                "reveal.margin and reveal.offset_y must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(FolioError::validation("reveal.amount must be in [0, 1]"));
        }
        if !(self.delay_children >= 0.0 && self.stagger_children >= 0.0) {
            return Err(FolioError::validation(
                "reveal.delay_children and reveal.stagger_children must be >= 0",
            ));
        }
        self.motion.validate()
    }
}

/// Letter reveal sequencer parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LettersConfig {
    /// Delay between consecutive characters, `> 0`.
    pub stagger: f64,
    /// Hidden glyphs start this many pixels below their laid-out position.
    pub offset_y: f64,
    /// Settle spring of each glyph.
    pub spring: Spring,
}

impl Default for LettersConfig {
    fn default() -> Self {
        Self {
            stagger: 0.03,
            offset_y: 20.0,
            spring: Spring {
                stiffness: 100.0,
                damping: 12.0,
                mass: 1.0,
            },
        }
    }
}

impl LettersConfig {
    pub(crate) fn validate(&self) -> FolioResult<()> {
        if !self.stagger.is_finite() || self.stagger <= 0.0 {
            return Err(FolioError::validation("letters.stagger must be > 0"));
        }
        if !self.offset_y.is_finite() {
            return Err(FolioError::validation("letters.offset_y must be finite"));
        }
        self.spring.validate()
    }
}

/// Spring used by the shared link indicator when it moves between links.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Indicator spring.
    pub spring: Spring,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            spring: Spring {
                stiffness: 380.0,
                damping: 30.0,
                mass: 1.0,
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
