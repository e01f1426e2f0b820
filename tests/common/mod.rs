//! Shared test fixtures.

#![allow(dead_code)]

use std::time::Duration;

use folio_engine::App;
use folio_types::ui::UiOptions;
use folio_types::{
    ContactEntry, ContactKind, PortfolioContent, Profile, Project, ResumeDoc, SkillGroup,
};

/// Transition duration used by fixture apps.
pub const TRANSITION: Duration = Duration::from_millis(400);

/// A small deterministic portfolio: three projects, a demo link on the
/// first one only.
pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "Ada Example".into(),
            headline: "Systems Engineer".into(),
            summary: vec!["I build small sharp tools.".into()],
            portrait: Some("portrait.png".into()),
        },
        skills: vec![
            SkillGroup {
                name: "Languages".into(),
                items: vec!["Rust".into(), "SQL".into()],
            },
            SkillGroup {
                name: "Tools".into(),
                items: vec!["Git".into(), "Docker".into()],
            },
        ],
        projects: vec![
            Project {
                title: "Atlas".into(),
                description: "A mapping service.".into(),
                tech: vec!["Rust".into(), "PostgreSQL".into()],
                github: "https://example.com/atlas".into(),
                demo: Some("https://atlas.example.com".into()),
            },
            Project {
                title: "Beacon".into(),
                description: "A log shipper.".into(),
                tech: vec!["Rust".into()],
                github: "https://example.com/beacon".into(),
                demo: None,
            },
            Project {
                title: "Cinder".into(),
                description: "A cache layer.".into(),
                tech: vec!["Rust".into(), "Redis".into()],
                github: "https://example.com/cinder".into(),
                demo: None,
            },
        ],
        contacts: vec![
            ContactEntry {
                kind: ContactKind::Email,
                value: "ada@example.com".into(),
                url: "mailto:ada@example.com".into(),
            },
            ContactEntry {
                kind: ContactKind::GitHub,
                value: "example.com/ada".into(),
                url: "https://example.com/ada".into(),
            },
        ],
        resume: ResumeDoc {
            file_name: "ada_example_cv.md".into(),
            body: "# Ada Example\n\nSystems Engineer.\n".into(),
        },
    }
}

/// App over the sample content with default options.
pub fn sample_app() -> App {
    App::new(sample_content(), UiOptions::default(), TRANSITION)
}

/// App with reduced motion: every select lands instantly.
pub fn instant_app() -> App {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    App::new(sample_content(), options, TRANSITION)
}
