use std::fmt;

use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::Vec2;

/// Stable identifier of a rendered page section (`"home"`, `"projects"`, ...).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Half-open vertical span `[top, top + height)` in CSS pixels, document space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Distance from the document top.
    pub top: f64,
    /// Non-negative height.
    pub height: f64,
}

impl Span {
    /// Create a validated span. `height` must be finite and `>= 0`.
    pub fn new(top: f64, height: f64) -> FolioResult<Self> {
        if !top.is_finite() {
            return Err(FolioError::validation("Span top must be finite"));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(FolioError::validation("Span height must be finite and >= 0"));
        }
        Ok(Self { top, height })
    }

    /// Exclusive lower edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Return `true` when the span has no height.
    pub fn is_empty(self) -> bool {
        self.height <= 0.0
    }

    /// Return `true` when `y` is inside `[top, bottom)`.
    pub fn contains(self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }

    /// Length of the overlap with `other` (zero when disjoint).
    pub fn overlap(self, other: Span) -> f64 {
        let lo = self.top.max(other.top);
        let hi = self.bottom().min(other.bottom());
        (hi - lo).max(0.0)
    }

    /// Grow both edges outward by `by` pixels. Negative values shrink, never below zero height.
    pub fn inflate(self, by: f64) -> Self {
        let height = (self.height + 2.0 * by).max(0.0);
        let center = self.top + self.height / 2.0;
        Self {
            top: if height == 0.0 { center } else { self.top - by },
            height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
