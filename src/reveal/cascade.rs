use crate::{
    animation::transition::{Pose, Transition, stagger_delays},
    config::RevealConfig,
    foundation::core::Span,
    reveal::trigger::{RevealEvent, RevealState, RevealTrigger},
};

/// A revealing parent block whose children enter one after another.
///
/// Children are staggered by declaration index, not by their position on screen.
#[derive(Clone, Debug)]
pub struct RevealCascade {
    trigger: RevealTrigger,
    hidden: Pose,
    parent: Transition,
    children: Vec<Transition>,
}

impl RevealCascade {
    /// Cascade over `child_count` children using `cfg`.
    pub fn new(cfg: &RevealConfig, child_count: usize) -> Self {
        let parent = Transition::immediate(cfg.motion);
        let children = stagger_delays(cfg.delay_children, cfg.stagger_children, child_count)
            .into_iter()
            .map(|d| parent.delayed_by(d))
            .collect();
        Self {
            trigger: RevealTrigger::new(cfg),
            hidden: Pose::hidden_below(cfg.offset_y),
            parent,
            children,
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Return `true` when the cascade has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Reveal state of the parent block.
    pub fn state(&self) -> RevealState {
        self.trigger.state()
    }

    /// Start delay of child `index`, relative to the parent reveal.
    pub fn child_delay(&self, index: usize) -> Option<f64> {
        self.children.get(index).map(|t| t.delay)
    }

    /// Feed an intersection observation of the parent block.
    pub fn observe(&mut self, viewport: Span, block: Span, now: f64) -> RevealEvent {
        self.trigger.observe(viewport, block, now)
    }

    /// Pose of the parent block itself at host time `now`.
    pub fn parent_pose(&self, now: f64) -> Pose {
        self.trigger
            .pose_at(now, &self.parent, &self.hidden, &Pose::SETTLED)
    }

    /// Pose of child `index` at host time `now`; `None` for an out-of-range index.
    pub fn child_pose(&self, index: usize, now: f64) -> Option<Pose> {
        let tr = self.children.get(index)?;
        Some(self.trigger.pose_at(now, tr, &self.hidden, &Pose::SETTLED))
    }

    /// Return `true` once the parent revealed and every child has come to rest.
    pub fn is_settled_at(&self, now: f64) -> bool {
        let Some(at) = self.trigger.revealed_at() else {
            return false;
        };
        let t = now - at;
        self.parent.is_finished_at(t) && self.children.iter().all(|c| c.is_finished_at(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/cascade.rs"]
mod tests;
