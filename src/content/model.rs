use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::SectionId;
use crate::foundation::error::{FolioError, FolioResult};

/// One navigable section: its element id and the nav link label.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionDescriptor {
    /// Element id, unique on the page.
    pub id: SectionId,
    /// Navigation link label.
    pub label: String,
}

impl SectionDescriptor {
    /// Build a descriptor.
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Check that a descriptor list is usable for navigation: non-empty, ids non-empty and unique.
pub fn validate_sections(sections: &[SectionDescriptor]) -> FolioResult<()> {
    if sections.is_empty() {
        return Err(FolioError::validation("at least one section is required"));
    }
    let mut seen = BTreeSet::new();
    for s in sections {
        if s.id.as_str().trim().is_empty() {
            return Err(FolioError::validation("section id must be non-empty"));
        }
        if !seen.insert(s.id.as_str()) {
            return Err(FolioError::validation(format!(
                "duplicate section id '{}'",
                s.id
            )));
        }
    }
    Ok(())
}

/// Skill grouping shown in the skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// Programming languages.
    Language,
    /// Frameworks and libraries.
    Framework,
    /// Tooling and infrastructure.
    Tooling,
}

/// A single skill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Grid grouping.
    pub category: SkillCategory,
}

/// A project card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Card title.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Technology tags, in display order.
    pub tech: Vec<String>,
    /// Optional source or demo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An education entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Education {
    /// School or university.
    pub institution: String,
    /// Degree or programme.
    pub degree: String,
    /// Free-form period (`"2016 - 2020"`).
    pub period: String,
}

/// A work experience entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Experience {
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Free-form period.
    pub period: String,
    /// Bullet points, in display order.
    pub highlights: Vec<String>,
}

/// Kind of contact entry, which decides the outbound action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Email address; composes a message.
    Email,
    /// Professional-network profile; opens in a new browsing context.
    #[serde(rename = "linkedin")]
    LinkedIn,
    /// Code-hosting profile; opens in a new browsing context.
    #[serde(rename = "github")]
    GitHub,
}

/// A contact entry. `target` is an email address for [`ContactKind::Email`], a URL otherwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    /// What kind of target this is.
    pub kind: ContactKind,
    /// Display label.
    pub label: String,
    /// Address or URL.
    pub target: String,
}

/// One-shot redirect handed to the host. The core never performs it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "action", content = "href", rename_all = "snake_case")]
pub enum OutboundAction {
    /// Open `href` in a new browsing context (`target="_blank"`, `rel="noopener noreferrer"`).
    OpenInNewContext(String),
    /// Navigate to a `mailto:` href.
    ComposeEmail(String),
}

impl Contact {
    /// Redirect performed when the entry is activated.
    pub fn outbound(&self) -> OutboundAction {
        match self.kind {
            ContactKind::Email => OutboundAction::ComposeEmail(format!("mailto:{}", self.target)),
            ContactKind::LinkedIn | ContactKind::GitHub => {
                OutboundAction::OpenInNewContext(self.target.clone())
            }
        }
    }
}

/// All static page content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteContent {
    /// Hero headline fed to the letter sequencer.
    pub headline: String,
    /// Hero subtitle.
    pub tagline: String,
    /// Navigable sections, in display and scroll order.
    pub sections: Vec<SectionDescriptor>,
    /// About paragraphs.
    pub about: Vec<String>,
    /// Work history, most recent first.
    pub experience: Vec<Experience>,
    /// Education history, most recent first.
    pub education: Vec<Education>,
    /// Project cards.
    pub projects: Vec<Project>,
    /// Skills grid.
    pub skills: Vec<Skill>,
    /// Contact entries.
    pub contacts: Vec<Contact>,
}

impl SiteContent {
    /// Parse content from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let content: Self = serde_json::from_reader(r)
            .map_err(|e| FolioError::validation(format!("parse content JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Parse content from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open content JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check section ids and contact targets.
    pub fn validate(&self) -> FolioResult<()> {
        validate_sections(&self.sections)?;
        for c in &self.contacts {
            let ok = match c.kind {
                ContactKind::Email => c.target.contains('@') && !c.target.starts_with("mailto:"),
                ContactKind::LinkedIn | ContactKind::GitHub => c.target.starts_with("https://"),
            };
            if !ok {
                return Err(FolioError::validation(format!(
                    "contact '{}' has malformed target '{}'",
                    c.label, c.target
                )));
            }
        }
        Ok(())
    }

    /// Look up a section descriptor by id.
    pub fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
