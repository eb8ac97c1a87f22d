use crate::foundation::core::SectionId;

/// Navigation state owned by [`crate::NavController`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavState {
    /// Section highlighted in the nav bar. Always one of the controller's descriptors.
    pub active_section_id: SectionId,
    /// Page is scrolled past the threshold; the nav bar switches to its solid style.
    pub is_scrolled: bool,
    /// Mobile menu drawer is open.
    pub is_mobile_menu_open: bool,
}

impl NavState {
    /// Initial state: `first` active, not scrolled, menu closed.
    pub fn new(first: SectionId) -> Self {
        Self {
            active_section_id: first,
            is_scrolled: false,
            is_mobile_menu_open: false,
        }
    }
}
