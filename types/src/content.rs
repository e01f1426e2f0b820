//! Portfolio content records.
//!
//! Immutable data loaded once at startup. View code never embeds literal
//! content; everything rendered comes from these records, so content
//! changes never touch logic.

use serde::Deserialize;
use thiserror::Error;

/// The person the portfolio is about.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Introductory paragraphs shown on the About section.
    #[serde(default)]
    pub summary: Vec<String>,
    /// Opaque reference to a portrait image. Handed unchanged to the
    /// platform opener on request, never parsed or loaded here.
    #[serde(default)]
    pub portrait: Option<String>,
}

/// A named group of skills shown on the About section.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// One portfolio project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github: String,
    /// Live demo URL. Only projects with a demo render a demo link.
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::GitHub => "GitHub",
        }
    }
}

/// One way to reach the portfolio owner.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    pub kind: ContactKind,
    /// Short human-readable value shown under the heading.
    pub value: String,
    pub url: String,
}

/// The downloadable resume document.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeDoc {
    pub file_name: String,
    pub body: String,
}

/// Everything the four sections render.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactEntry>,
    pub resume: ResumeDoc,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("profile name must not be blank")]
    BlankProfileName,
    #[error("at least one skill group is required")]
    NoSkills,
    #[error("skill group {0:?} has no items")]
    EmptySkillGroup(String),
    #[error("at least one project is required")]
    NoProjects,
    #[error("project {0:?} has a blank github link")]
    BlankGithubLink(String),
    #[error("at least one contact entry is required")]
    NoContacts,
    #[error("contact {0:?} has a blank url")]
    BlankContactUrl(String),
    #[error("resume file name must not be blank")]
    BlankResumeFileName,
}

impl PortfolioContent {
    /// Reject content that would leave a section empty or a link dead.
    ///
    /// Runs once at startup, before the terminal enters raw mode, so a bad
    /// content file fails loudly instead of rendering a blank view.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::BlankProfileName);
        }
        if self.skills.is_empty() {
            return Err(ContentError::NoSkills);
        }
        for group in &self.skills {
            if group.items.is_empty() {
                return Err(ContentError::EmptySkillGroup(group.name.clone()));
            }
        }
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        for project in &self.projects {
            if project.github.trim().is_empty() {
                return Err(ContentError::BlankGithubLink(project.title.clone()));
            }
        }
        if self.contacts.is_empty() {
            return Err(ContentError::NoContacts);
        }
        for contact in &self.contacts {
            if contact.url.trim().is_empty() {
                return Err(ContentError::BlankContactUrl(contact.value.clone()));
            }
        }
        if self.resume.file_name.trim().is_empty() {
            return Err(ContentError::BlankResumeFileName);
        }
        Ok(())
    }
}
