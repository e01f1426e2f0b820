//! Section identifiers and navigation metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a top-level content section.
///
/// The set is closed: the active section is always one of these four
/// values, so an out-of-set selection is unrepresentable rather than a
/// runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections, in navigation-bar order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position within [`SectionId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Contact => 3,
        }
    }

    /// Next section in navigation order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in navigation order, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A navigation bar entry. Purely descriptive, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
}

/// Navigation bar entries derived from [`SectionId::ALL`].
#[must_use]
pub fn nav_items() -> [NavItem; 4] {
    SectionId::ALL.map(|id| NavItem {
        id,
        label: id.label(),
    })
}
