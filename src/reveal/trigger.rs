use crate::{
    animation::transition::{Pose, Transition},
    config::RevealConfig,
    foundation::core::Span,
};

/// One-way reveal state of an animated block. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealState {
    /// Not yet seen; rendered in the hidden pose.
    Pending,
    /// Crossed the intersection threshold at `revealed_at` (seconds, host clock).
    Revealed,
}

/// Result of feeding one intersection observation to a [`RevealTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    /// Block still outside the (margin-adjusted) viewport.
    StillPending,
    /// This observation performed the `Pending -> Revealed` transition; start the entrance now.
    Revealed,
    /// Block had already revealed; nothing changes and no animation restarts.
    AlreadyRevealed,
}

/// Fire-once viewport watcher for one block.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    margin: f64,
    amount: f64,
    state: RevealState,
    revealed_at: Option<f64>,
}

impl RevealTrigger {
    /// New pending trigger using the margin and amount of `cfg`.
    pub fn new(cfg: &RevealConfig) -> Self {
        Self {
            margin: cfg.margin,
            amount: cfg.amount,
            state: RevealState::Pending,
            revealed_at: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Return `true` once revealed.
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Host time at which the block revealed.
    pub fn revealed_at(&self) -> Option<f64> {
        self.revealed_at
    }

    /// Whether `block` intersects `viewport` enough to reveal, ignoring current state.
    pub fn intersects(&self, viewport: Span, block: Span) -> bool {
        let root = viewport.inflate(self.margin);
        if root.is_empty() {
            return false;
        }
        if block.is_empty() {
            return root.contains(block.top);
        }
        let overlap = block.overlap(root);
        overlap > 0.0 && overlap / block.height >= self.amount
    }

    /// Feed one observation taken at host time `now`.
    pub fn observe(&mut self, viewport: Span, block: Span, now: f64) -> RevealEvent {
        if self.state == RevealState::Revealed {
            return RevealEvent::AlreadyRevealed;
        }
        if !self.intersects(viewport, block) {
            return RevealEvent::StillPending;
        }
        self.state = RevealState::Revealed;
        self.revealed_at = Some(now);
        tracing::debug!(at = now, top = block.top, "block revealed");
        RevealEvent::Revealed
    }

    /// Pose at host time `now` for an element animating with `transition` from `hidden`.
    pub fn pose_at(&self, now: f64, transition: &Transition, hidden: &Pose, shown: &Pose) -> Pose {
        match self.revealed_at {
            None => *hidden,
            Some(at) => transition.sample(hidden, shown, now - at),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;
