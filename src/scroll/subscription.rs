use std::rc::Rc;

use crate::host::{ListenerId, ScrollCallback, ScrollSource};

/// Owned scroll-listener registration. Dropping it detaches the listener.
pub struct ScrollSubscription {
    source: Rc<dyn ScrollSource>,
    id: Option<ListenerId>,
}

impl ScrollSubscription {
    /// Register `cb` on `source`.
    pub fn attach(source: Rc<dyn ScrollSource>, cb: ScrollCallback) -> Self {
        let id = source.add_scroll_listener(cb);
        tracing::debug!(listener = id.0, "scroll listener attached");
        Self {
            source,
            id: Some(id),
        }
    }

    /// Return `true` until [`ScrollSubscription::detach`] runs.
    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Remove the listener now. Idempotent.
    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            let removed = self.source.remove_scroll_listener(id);
            tracing::debug!(listener = id.0, removed, "scroll listener detached");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/subscription.rs"]
mod tests;
