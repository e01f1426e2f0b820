//! Embedded content and validation at the configuration boundary.

use folio_config::FolioConfig;
use folio_types::ContactKind;

#[test]
fn embedded_portfolio_loads_and_validates() {
    let config = FolioConfig::embedded().expect("embedded config");
    let content = &config.content;

    assert!(!content.profile.name.trim().is_empty());
    assert_eq!(content.projects.len(), 3);
    assert!(!content.skills.is_empty());
    assert!(!content.contacts.is_empty());
}

#[test]
fn every_project_has_a_github_link() {
    let config = FolioConfig::embedded().expect("embedded config");
    for project in &config.content.projects {
        assert!(project.github.starts_with("https://"));
    }
}

#[test]
fn demo_links_are_the_exception_not_the_rule() {
    let config = FolioConfig::embedded().expect("embedded config");
    let with_demo: Vec<&str> = config
        .content
        .projects
        .iter()
        .filter(|p| p.demo.is_some())
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(with_demo.len(), 1);
}

#[test]
fn contact_kinds_are_distinct() {
    let config = FolioConfig::embedded().expect("embedded config");
    let kinds: Vec<ContactKind> = config.content.contacts.iter().map(|c| c.kind).collect();
    assert!(kinds.contains(&ContactKind::Email));
    assert!(kinds.contains(&ContactKind::LinkedIn));
    assert!(kinds.contains(&ContactKind::GitHub));
}

#[test]
fn resume_document_is_nonempty() {
    let config = FolioConfig::embedded().expect("embedded config");
    assert!(!config.content.resume.file_name.trim().is_empty());
    assert!(config.content.resume.body.contains('#'));
}

#[test]
fn a_gutted_user_file_is_rejected() {
    // Structurally valid, but every section would render empty.
    let raw = concat!(
        "skills = []\n",
        "projects = []\n",
        "contacts = []\n",
        "\n",
        "[profile]\n",
        "name = \"X\"\n",
        "headline = \"Y\"\n",
        "\n",
        "[resume]\n",
        "file_name = \"x.md\"\n",
        "body = \"b\"\n",
    );
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("folio.toml");
    std::fs::write(&path, raw).expect("write");

    assert!(FolioConfig::load_from(&path).is_err());
}
