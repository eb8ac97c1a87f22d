use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{
    config::FolioConfig,
    content::model::{SectionDescriptor, validate_sections},
    foundation::core::SectionId,
    foundation::error::FolioResult,
    host::{Host, ScrollSource},
    nav::indicator::{Indicator, LinkSlot},
    nav::state::NavState,
    scroll::subscription::ScrollSubscription,
    scroll::tracker::ScrollTracker,
};

/// Render model of one nav link.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavLink {
    /// Target section id.
    pub id: SectionId,
    /// Link label.
    pub label: String,
    /// Exactly one link per render is current (`aria-current="page"`).
    pub is_current: bool,
}

#[derive(Debug)]
struct NavModel {
    state: NavState,
    indicator: Indicator,
}

/// Owner of the navigation state and the page's single scroll subscription.
///
/// The subscription lives exactly as long as the controller: construction attaches it and runs
/// the tracker once, dropping (or [`NavController::dispose`]) detaches it.
pub struct NavController {
    sections: Rc<[SectionDescriptor]>,
    host: Rc<dyn Host>,
    model: Rc<RefCell<NavModel>>,
    tracker: ScrollTracker,
    subscription: ScrollSubscription,
}

impl NavController {
    /// Validate `sections`, subscribe to `host` scroll events and sync with the current offset.
    #[tracing::instrument(skip_all, fields(sections = sections.len()))]
    pub fn attach(
        sections: Vec<SectionDescriptor>,
        host: Rc<dyn Host>,
        config: &FolioConfig,
    ) -> FolioResult<Self> {
        validate_sections(&sections)?;
        config.validate()?;

        let sections: Rc<[SectionDescriptor]> = sections.into();
        let model = Rc::new(RefCell::new(NavModel {
            state: NavState::new(sections[0].id.clone()),
            indicator: Indicator::new(0, config.indicator.spring),
        }));
        let tracker = ScrollTracker::new(config.tracker);

        let on_scroll = {
            let sections = Rc::clone(&sections);
            let model = Rc::downgrade(&model);
            let host: Weak<dyn Host> = Rc::downgrade(&host);
            move |scroll_y: f64| {
                let (Some(model), Some(host)) = (model.upgrade(), host.upgrade()) else {
                    return;
                };
                track(&tracker, scroll_y, &sections, host.as_ref(), &model);
            }
        };
        let source: Rc<dyn ScrollSource> = host.clone();
        let subscription = ScrollSubscription::attach(source, Box::new(on_scroll));

        let ctrl = Self {
            sections,
            host,
            model,
            tracker,
            subscription,
        };
        ctrl.resync();
        Ok(ctrl)
    }

    /// Section descriptors in display order.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Snapshot of the navigation state.
    pub fn state(&self) -> NavState {
        self.model.borrow().state.clone()
    }

    /// Currently highlighted section.
    pub fn active_section_id(&self) -> SectionId {
        self.model.borrow().state.active_section_id.clone()
    }

    /// Nav bar uses its scrolled style.
    pub fn is_scrolled(&self) -> bool {
        self.model.borrow().state.is_scrolled
    }

    /// Mobile menu drawer is open.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.model.borrow().state.is_mobile_menu_open
    }

    /// Scroll listener is still registered.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_attached()
    }

    /// Re-run the tracker at the host's current offset, as on a scroll event.
    pub fn resync(&self) {
        if !self.is_attached() {
            return;
        }
        track(
            &self.tracker,
            self.host.scroll_y(),
            &self.sections,
            self.host.as_ref(),
            &self.model,
        );
    }

    /// Jump to `section_id`: request a smooth scroll to its top, mark it active right away and
    /// close the mobile menu.
    ///
    /// Unknown ids and ids without a laid-out element are ignored (logged, state untouched).
    /// Returns whether navigation happened.
    #[tracing::instrument(skip(self))]
    pub fn navigate_to(&mut self, section_id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == section_id) else {
            tracing::warn!(section_id, "navigation to unknown section ignored");
            return false;
        };
        let id = &self.sections[index].id;
        let Some(span) = self.host.section_span(id) else {
            tracing::warn!(section_id, "navigation target has no element, ignored");
            return false;
        };

        {
            let mut guard = self.model.borrow_mut();
            let m = &mut *guard;
            m.state.active_section_id = id.clone();
            m.state.is_mobile_menu_open = false;
            m.indicator.move_to(index, self.host.now_secs());
        }
        // Borrow released first: a host may dispatch scroll events synchronously.
        self.host.smooth_scroll_to(span.top);
        true
    }

    /// Flip the mobile menu and return the new value.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        let mut m = self.model.borrow_mut();
        m.state.is_mobile_menu_open = !m.state.is_mobile_menu_open;
        tracing::debug!(open = m.state.is_mobile_menu_open, "mobile menu toggled");
        m.state.is_mobile_menu_open
    }

    /// Link render model; exactly one entry is current.
    pub fn links(&self) -> Vec<NavLink> {
        let m = self.model.borrow();
        self.sections
            .iter()
            .map(|s| NavLink {
                id: s.id.clone(),
                label: s.label.clone(),
                is_current: s.id == m.state.active_section_id,
            })
            .collect()
    }

    /// Shared indicator position in link-index space at the host's current time.
    pub fn indicator_position(&self) -> f64 {
        self.model
            .borrow()
            .indicator
            .position_at(self.host.now_secs())
    }

    /// Shared indicator pixel box given each link's slot, at the host's current time.
    pub fn indicator_box(&self, slots: &[LinkSlot]) -> Option<LinkSlot> {
        self.model
            .borrow()
            .indicator
            .place(self.host.now_secs(), slots)
    }

    /// Detach the scroll listener now. Later scroll events no longer touch the state.
    pub fn dispose(&mut self) {
        self.subscription.detach();
    }
}

impl std::fmt::Debug for NavController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("sections", &self.sections)
            .field("model", &self.model)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

fn track(
    tracker: &ScrollTracker,
    scroll_y: f64,
    sections: &[SectionDescriptor],
    host: &dyn Host,
    model: &RefCell<NavModel>,
) {
    let sample = tracker.sample(scroll_y, sections, host);
    let mut guard = model.borrow_mut();
    let m = &mut *guard;
    if tracker.apply(&sample, &mut m.state)
        && let Some(index) = sections
            .iter()
            .position(|s| s.id == m.state.active_section_id)
    {
        m.indicator.move_to(index, host.now_secs());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/controller.rs"]
mod tests;
