//! Resume export: writes the configured document, reports a notice, and
//! never disturbs navigation state.

use folio_types::SectionId;

use crate::common::{TRANSITION, sample_app};

#[test]
fn export_writes_the_configured_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = sample_app().with_download_dir(dir.path().to_path_buf());

    app.export_resume();

    let path = dir.path().join("ada_example_cv.md");
    let body = std::fs::read_to_string(path).expect("exported file");
    assert!(body.starts_with("# Ada Example"));
}

#[test]
fn export_does_not_change_the_active_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = sample_app().with_download_dir(dir.path().to_path_buf());
    app.select(SectionId::About);
    app.advance(TRANSITION);

    app.export_resume();

    assert_eq!(app.section(), SectionId::About);
    assert!(app.view().transition.is_none());
}

#[test]
fn export_posts_a_status_notice_with_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = sample_app().with_download_dir(dir.path().to_path_buf());

    app.export_resume();

    let notice = app.notice().expect("notice");
    assert!(notice.contains("Resume saved"));
    assert!(notice.contains("ada_example_cv.md"));
}

#[test]
fn failed_export_surfaces_as_a_notice_not_a_crash() {
    let missing = std::path::PathBuf::from("/nonexistent-folio-dir");
    let mut app = sample_app().with_download_dir(missing);

    app.export_resume();

    assert_eq!(app.notice(), Some("Resume export failed"));
    assert_eq!(app.section(), SectionId::Home);
}
