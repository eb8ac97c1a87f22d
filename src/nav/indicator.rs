use crate::animation::{
    spring::Spring,
    transition::{Lerp, Motion, Transition},
};

/// Horizontal box of one nav link, in CSS pixels relative to the nav bar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinkSlot {
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: f64,
}

impl Lerp for LinkSlot {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            left: <f64 as Lerp>::lerp(&a.left, &b.left, t),
            width: <f64 as Lerp>::lerp(&a.width, &b.width, t),
        }
    }
}

/// The single underline shared by all nav links.
///
/// Position is tracked in link-index space: `1.5` sits halfway between links 1 and 2.
/// Retargeting mid-flight starts from the current sampled position, so the indicator never
/// jumps.
#[derive(Clone, Debug)]
pub struct Indicator {
    from: f64,
    to: usize,
    started_at: f64,
    transition: Transition,
}

impl Indicator {
    /// Indicator resting under link `index`.
    pub fn new(index: usize, spring: Spring) -> Self {
        Self {
            from: index as f64,
            to: index,
            started_at: 0.0,
            transition: Transition::immediate(Motion::Spring(spring)),
        }
    }

    /// Link the indicator is moving to (or resting under).
    pub fn target(&self) -> usize {
        self.to
    }

    /// Start moving toward link `index` at host time `now`. No-op when already targeted.
    pub fn move_to(&mut self, index: usize, now: f64) {
        if index == self.to {
            return;
        }
        self.from = self.position_at(now);
        self.to = index;
        self.started_at = now;
    }

    /// Fractional link index at host time `now`.
    pub fn position_at(&self, now: f64) -> f64 {
        self.transition
            .sample(&self.from, &(self.to as f64), now - self.started_at)
    }

    /// Return `true` once the indicator rests under its target.
    pub fn is_settled_at(&self, now: f64) -> bool {
        self.from == self.to as f64 || self.transition.is_finished_at(now - self.started_at)
    }

    /// Pixel box at host time `now`, interpolated between neighbouring `slots`.
    pub fn place(&self, now: f64, slots: &[LinkSlot]) -> Option<LinkSlot> {
        let last = slots.len().checked_sub(1)?;
        let pos = self.position_at(now).clamp(0.0, last as f64);
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(last);
        Some(LinkSlot::lerp(&slots[lo], &slots[hi], pos - lo as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/indicator.rs"]
mod tests;
