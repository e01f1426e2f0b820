//! Core domain types for folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod content;
mod section;
pub mod ui;

pub use content::{
    ContactEntry, ContactKind, ContentError, PortfolioContent, Profile, Project, ResumeDoc,
    SkillGroup,
};
pub use section::{NavItem, SectionId, nav_items};
