//! Seams to the embedding page.
//!
//! The core never touches a DOM directly. A host provides scroll events, section geometry,
//! smooth-scroll requests and a clock through the traits below; [`SimulatedWindow`] is an
//! in-memory host used by tests and the `folio` binary.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use crate::{
    animation::ease::Ease,
    content::model::SectionDescriptor,
    foundation::core::{SectionId, Span},
    foundation::error::{FolioError, FolioResult},
};

/// Handle returned by [`ScrollSource::add_scroll_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Callback invoked with the new `scroll_y` on every scroll event.
pub type ScrollCallback = Box<dyn FnMut(f64)>;

/// Window scroll offset and scroll-event registration.
pub trait ScrollSource {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
    /// Register a scroll listener.
    fn add_scroll_listener(&self, cb: ScrollCallback) -> ListenerId;
    /// Remove a listener; returns `false` when `id` was not registered.
    fn remove_scroll_listener(&self, id: ListenerId) -> bool;
}

/// Geometry query surface: where each section element currently sits.
pub trait SectionLayout {
    /// Span of the element whose id attribute equals `id`, or `None` when no such element exists.
    fn section_span(&self, id: &SectionId) -> Option<Span>;
}

/// Sink for programmatic smooth scrolling.
pub trait ScrollRequester {
    /// Start a smooth scroll so that document offset `y` aligns with the viewport top.
    /// Supersedes any scroll already in flight.
    fn smooth_scroll_to(&self, y: f64);
}

/// Monotonic host clock in seconds.
pub trait FrameClock {
    /// Seconds since page load.
    fn now_secs(&self) -> f64;
}

/// Everything the navigation controller needs from its page.
pub trait Host: ScrollSource + SectionLayout + ScrollRequester + FrameClock {}

impl<T> Host for T where T: ScrollSource + SectionLayout + ScrollRequester + FrameClock {}

/// Serializable page geometry: viewport height plus one span per section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
    /// Laid-out sections, keyed by element id.
    pub sections: BTreeMap<SectionId, Span>,
}

impl PageLayout {
    /// Sections stacked top to bottom in descriptor order, each `height` pixels tall.
    pub fn stacked(sections: &[SectionDescriptor], height: f64, viewport_height: f64) -> Self {
        let mut top = 0.0;
        let mut out = BTreeMap::new();
        for s in sections {
            out.insert(s.id.clone(), Span { top, height });
            top += height;
        }
        Self {
            viewport_height,
            sections: out,
        }
    }

    /// Parse a layout from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let layout: Self = serde_json::from_reader(r)
            .map_err(|e| FolioError::validation(format!("parse layout JSON: {e}")))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Parse a layout from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject negative viewport and malformed spans.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(FolioError::validation("viewport_height must be > 0"));
        }
        for (id, span) in &self.sections {
            Span::new(span.top, span.height)
                .map_err(|e| FolioError::validation(format!("section '{id}': {e}")))?;
        }
        Ok(())
    }

    /// Total document height (bottom of the lowest section).
    pub fn document_height(&self) -> f64 {
        self.sections
            .values()
            .map(|s| s.bottom())
            .fold(0.0, f64::max)
    }
}

impl SectionLayout for PageLayout {
    fn section_span(&self, id: &SectionId) -> Option<Span> {
        self.sections.get(id).copied()
    }
}

type SharedCallback = Rc<RefCell<ScrollCallback>>;

#[derive(Clone, Copy, Debug)]
struct SmoothScroll {
    from: f64,
    to: f64,
}

/// In-memory window: owns scroll offset, layout, listeners and a manual clock.
///
/// Smooth scrolls do not advance on their own; drive them with
/// [`SimulatedWindow::finish_smooth_scroll`].
pub struct SimulatedWindow {
    layout: RefCell<PageLayout>,
    scroll_y: Cell<f64>,
    now: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, SharedCallback)>>,
    pending: Cell<Option<SmoothScroll>>,
    requests: RefCell<Vec<f64>>,
}

impl SimulatedWindow {
    /// Window at scroll offset `0` and time `0`.
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout: RefCell::new(layout),
            scroll_y: Cell::new(0.0),
            now: Cell::new(0.0),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            pending: Cell::new(None),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Visible document span.
    pub fn viewport(&self) -> Span {
        Span {
            top: self.scroll_y.get(),
            height: self.layout.borrow().viewport_height,
        }
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll_y(&self) -> f64 {
        let layout = self.layout.borrow();
        (layout.document_height() - layout.viewport_height).max(0.0)
    }

    /// Number of registered scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Targets of every smooth scroll requested so far.
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.requests.borrow().clone()
    }

    /// Target of the smooth scroll in flight, if any.
    pub fn pending_scroll_target(&self) -> Option<f64> {
        self.pending.get().map(|s| s.to)
    }

    /// Advance the manual clock.
    pub fn advance_time(&self, dt: f64) {
        self.now.set(self.now.get() + dt.max(0.0));
    }

    /// Replace the geometry of one section (simulates a layout shift). No event is dispatched.
    pub fn set_section_span(&self, id: SectionId, span: Span) {
        self.layout.borrow_mut().sections.insert(id, span);
    }

    /// Remove a section element from the page.
    pub fn remove_section(&self, id: &SectionId) {
        self.layout.borrow_mut().sections.remove(id);
    }

    /// User-driven scroll: cancels any smooth scroll in flight and dispatches one event.
    pub fn user_scroll_to(&self, y: f64) {
        self.pending.set(None);
        self.set_scroll_and_dispatch(y);
    }

    /// Play the in-flight smooth scroll to completion in `steps` eased scroll events.
    /// Returns `false` when nothing was in flight.
    pub fn finish_smooth_scroll(&self, steps: usize) -> bool {
        let Some(scroll) = self.pending.take() else {
            return false;
        };
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = Ease::InOutCubic.apply(i as f64 / steps as f64);
            self.advance_time(1.0 / 60.0);
            self.set_scroll_and_dispatch(scroll.from + (scroll.to - scroll.from) * t);
        }
        true
    }

    /// Dispatch one scroll event at the current offset to every listener.
    pub fn dispatch_scroll(&self) {
        let y = self.scroll_y.get();
        // Snapshot so listeners may add or remove listeners while being called.
        let snapshot: Vec<SharedCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in snapshot {
            let mut f = cb.borrow_mut();
            (*f)(y);
        }
    }

    fn set_scroll_and_dispatch(&self, y: f64) {
        self.scroll_y.set(y.clamp(0.0, self.max_scroll_y()));
        self.dispatch_scroll();
    }
}

impl ScrollSource for SimulatedWindow {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn add_scroll_listener(&self, cb: ScrollCallback) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(cb))));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

impl SectionLayout for SimulatedWindow {
    fn section_span(&self, id: &SectionId) -> Option<Span> {
        self.layout.borrow().sections.get(id).copied()
    }
}

impl ScrollRequester for SimulatedWindow {
    fn smooth_scroll_to(&self, y: f64) {
        let to = y.clamp(0.0, self.max_scroll_y());
        self.requests.borrow_mut().push(to);
        self.pending.set(Some(SmoothScroll {
            from: self.scroll_y.get(),
            to,
        }));
    }
}

impl FrameClock for SimulatedWindow {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;
