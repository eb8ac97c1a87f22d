use crate::{
    config::TrackerConfig,
    content::model::SectionDescriptor,
    foundation::core::SectionId,
    host::SectionLayout,
    nav::state::NavState,
};

/// Values derived from one scroll offset.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrollSample {
    /// Offset the sample was taken at.
    pub scroll_y: f64,
    /// Offset is past the "scrolled" threshold.
    pub is_scrolled: bool,
    /// First section (in list order) containing the look-ahead position, if any.
    pub active: Option<SectionId>,
}

/// Derives the nav bar style flag and the active section from a scroll offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    config: TrackerConfig,
}

impl ScrollTracker {
    /// Tracker with the given thresholds.
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use.
    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// `scroll_y` strictly past the threshold.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.scrolled_threshold
    }

    /// First section whose span contains `scroll_y + look_ahead`.
    ///
    /// Sections missing from `layout` are skipped. Linear in the number of sections.
    pub fn active_section<'a, L>(
        &self,
        scroll_y: f64,
        sections: &'a [SectionDescriptor],
        layout: &L,
    ) -> Option<&'a SectionId>
    where
        L: SectionLayout + ?Sized,
    {
        let position = scroll_y + self.config.look_ahead;
        sections
            .iter()
            .find(|s| {
                layout
                    .section_span(&s.id)
                    .is_some_and(|span| span.contains(position))
            })
            .map(|s| &s.id)
    }

    /// Full sample at `scroll_y`.
    pub fn sample<L>(
        &self,
        scroll_y: f64,
        sections: &[SectionDescriptor],
        layout: &L,
    ) -> ScrollSample
    where
        L: SectionLayout + ?Sized,
    {
        ScrollSample {
            scroll_y,
            is_scrolled: self.is_scrolled(scroll_y),
            active: self.active_section(scroll_y, sections, layout).cloned(),
        }
    }

    /// Write a sample into `state`. An unmatched position keeps the previous active section.
    ///
    /// Returns `true` when the active section changed.
    pub fn apply(&self, sample: &ScrollSample, state: &mut NavState) -> bool {
        state.is_scrolled = sample.is_scrolled;
        match &sample.active {
            Some(id) if *id != state.active_section_id => {
                tracing::debug!(from = %state.active_section_id, to = %id, "active section changed");
                state.active_section_id = id.clone();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
