//! Letter reveal sequencer: splits text into staggered, individually animated glyphs.

use crate::{
    animation::transition::{Motion, Pose, Transition},
    config::LettersConfig,
    foundation::error::FolioResult,
};

/// Glyph substituted for `' '` so word gaps do not collapse when each glyph is its own box.
pub const NBSP: char = '\u{00A0}';

/// One animated character of a sequenced string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LetterUnit {
    /// Position in the source string, in code points.
    pub index: usize,
    /// Displayed glyph.
    pub glyph: char,
    /// Seconds after the sequence trigger at which this glyph starts moving.
    pub delay: f64,
}

/// Stateless sequencer. Calling [`LetterSequencer::sequence`] repeatedly on the same input
/// yields identical units.
#[derive(Clone, Copy, Debug)]
pub struct LetterSequencer {
    stagger: f64,
    hidden: Pose,
    motion: Motion,
}

impl LetterSequencer {
    /// Build from validated config.
    pub fn new(cfg: &LettersConfig) -> FolioResult<Self> {
        cfg.validate()?;
        Ok(Self {
            stagger: cfg.stagger,
            hidden: Pose::hidden_below(cfg.offset_y),
            motion: Motion::Spring(cfg.spring),
        })
    }

    /// Units of `text` in code-point order, starting `start_delay` seconds after the trigger.
    pub fn sequence(&self, text: &str, start_delay: f64) -> Vec<LetterUnit> {
        text.chars()
            .enumerate()
            .map(|(index, c)| LetterUnit {
                index,
                glyph: if c == ' ' { NBSP } else { c },
                delay: start_delay + self.stagger * index as f64,
            })
            .collect()
    }

    /// Pose of `unit` at `elapsed` seconds after the sequence was triggered.
    pub fn pose_at(&self, unit: &LetterUnit, elapsed: f64) -> Pose {
        self.transition(unit)
            .sample(&self.hidden, &Pose::SETTLED, elapsed)
    }

    /// Return `true` once every unit has settled.
    pub fn is_settled(&self, units: &[LetterUnit], elapsed: f64) -> bool {
        units
            .iter()
            .all(|u| self.transition(u).is_finished_at(elapsed))
    }

    fn transition(&self, unit: &LetterUnit) -> Transition {
        Transition {
            delay: unit.delay,
            motion: self.motion,
        }
    }
}

impl Default for LetterSequencer {
    fn default() -> Self {
        let cfg = LettersConfig::default();
        Self {
            stagger: cfg.stagger,
            hidden: Pose::hidden_below(cfg.offset_y),
            motion: Motion::Spring(cfg.spring),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/letters.rs"]
mod tests;
