//! Folio is the interaction core of a single-page personal portfolio.
//!
//! Page rendering lives elsewhere; this crate owns the behavior behind it:
//!
//! - A [`NavController`] that tracks the active section from scroll events, drives smooth
//!   in-page navigation and the mobile menu, and glides a shared link [`Indicator`]
//! - One-shot scroll-reveal triggers ([`RevealTrigger`], [`RevealCascade`])
//! - Per-letter headline animation ([`LetterSequencer`])
//! - The static [`SiteContent`] model and its built-in data
//!
//! The page itself is reached only through the traits in [`host`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub mod config;
pub(crate) mod content;
pub mod host;
pub mod letters;
pub(crate) mod nav;
pub(crate) mod reveal;
pub(crate) mod scroll;

pub use crate::foundation::core::{SectionId, Span, Vec2};
pub use crate::foundation::error::{FolioError, FolioResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::Spring;
pub use crate::animation::transition::{Lerp, Motion, Pose, Transition, stagger_delays};
pub use crate::config::{
    FolioConfig, IndicatorConfig, LettersConfig, RevealConfig, TrackerConfig,
};
pub use crate::content::data::{
    EMAIL_ADDRESS, GITHUB_URL, LINKEDIN_URL, SECTIONS, builtin_content, default_sections,
};
pub use crate::content::model::{
    Contact, ContactKind, Education, Experience, OutboundAction, Project, SectionDescriptor,
    SiteContent, Skill, SkillCategory, validate_sections,
};
pub use crate::letters::{LetterSequencer, LetterUnit, NBSP};
pub use crate::nav::controller::{NavController, NavLink};
pub use crate::nav::indicator::{Indicator, LinkSlot};
pub use crate::nav::state::NavState;
pub use crate::reveal::cascade::RevealCascade;
pub use crate::reveal::trigger::{RevealEvent, RevealState, RevealTrigger};
pub use crate::scroll::subscription::ScrollSubscription;
pub use crate::scroll::tracker::{ScrollSample, ScrollTracker};
