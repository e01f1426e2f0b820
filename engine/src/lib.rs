//! Core engine for folio - navigation state machine and orchestration.
//!
//! This crate owns the App state machine without TUI dependencies: the
//! active section, in-flight animations, per-section cursors, and the
//! best-effort platform side effects (opening links, exporting the
//! resume). Rendering and input live in `folio-tui`.

mod external;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use folio_types::ui::{
    EffectTimer, ModalEffect, SectionTransition, TransitionPhase, UiOptions, ViewState,
};
use folio_types::{PortfolioContent, Project, SectionId};

// Re-exported so the binary only reaches configuration through the engine.
pub use folio_config::{ConfigError, FolioConfig};

const MENU_POP_DURATION: Duration = Duration::from_millis(160);
const SHAKE_DURATION: Duration = Duration::from_millis(280);
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Transient status-bar message reporting a best-effort action's outcome.
#[derive(Debug)]
struct StatusNotice {
    text: String,
    timer: EffectTimer,
}

/// Cursor over a fixed-length list.
#[derive(Debug, Default, Clone, Copy)]
struct ListCursor {
    selected: usize,
}

impl ListCursor {
    fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

/// Section picker overlay state (compact navigation).
#[derive(Debug, Clone, Copy)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    /// Index into [`SectionId::ALL`] of the highlighted entry.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }
}

/// Application state. One instance per session, owned by the frame loop.
///
/// The active section has exactly one writer path ([`App::select`]); the
/// navigation bar, the section views, and the picker overlay all read it
/// and mutate it only through that method.
pub struct App {
    content: PortfolioContent,
    active: SectionId,
    view: ViewState,
    transition_duration: Duration,
    projects: ListCursor,
    contacts: ListCursor,
    menu: Option<MenuState>,
    notice: Option<StatusNotice>,
    download_dir: PathBuf,
}

impl App {
    #[must_use]
    pub fn new(
        content: PortfolioContent,
        ui_options: UiOptions,
        transition_duration: Duration,
    ) -> Self {
        Self {
            content,
            active: SectionId::Home,
            view: ViewState::new(ui_options),
            transition_duration,
            projects: ListCursor::default(),
            contacts: ListCursor::default(),
            menu: None,
            notice: None,
            download_dir: external::download_dir(),
        }
    }

    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(
            config.content.clone(),
            config.ui_options(),
            config.transition_duration(),
        )
    }

    /// Override the resume export directory (tests).
    #[must_use]
    pub fn with_download_dir(mut self, dir: PathBuf) -> Self {
        self.download_dir = dir;
        self
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// The active section. Reflects the latest [`App::select`] immediately,
    /// independent of how long the visual transition takes.
    #[must_use]
    pub fn section(&self) -> SectionId {
        self.active
    }

    /// Switch to `id`.
    ///
    /// Idempotent: re-selecting the active section does nothing, so an
    /// identical animation is never restarted. A select during an
    /// in-flight transition supersedes it: the new transition departs from
    /// whatever is currently on screen and the abandoned target never
    /// comes back.
    pub fn select(&mut self, id: SectionId) {
        if id == self.active {
            return;
        }
        let from = self
            .view
            .transition
            .as_ref()
            .map_or(self.active, SectionTransition::mounted);
        self.active = id;
        self.view.transition = if self.skip_motion() || from == id {
            None
        } else {
            Some(SectionTransition::new(from, id, self.transition_duration))
        };
        tracing::debug!(section = %id, "section selected");
    }

    pub fn select_next(&mut self) {
        self.select(self.active.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.active.prev());
    }

    fn skip_motion(&self) -> bool {
        self.view.ui_options.reduced_motion || self.transition_duration.is_zero()
    }

    /// What the renderer should draw this frame.
    #[must_use]
    pub fn transition_phase(&self) -> TransitionPhase {
        self.view.transition.as_ref().map_or(
            TransitionPhase::Steady {
                section: self.active,
            },
            SectionTransition::phase,
        )
    }

    // ------------------------------------------------------------------
    // Frame advancement
    // ------------------------------------------------------------------

    /// Advance animations by the wall-clock delta since the last frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(delta);
    }

    /// Deterministic advancement by an explicit delta. [`App::tick`]
    /// delegates here; tests drive it directly.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(transition) = &mut self.view.transition {
            transition.advance(delta);
            if transition.is_finished() {
                self.view.transition = None;
            }
        }
        if let Some(effect) = &mut self.view.menu_effect {
            effect.advance(delta);
            if effect.is_finished() {
                self.view.menu_effect = None;
            }
        }
        if let Some(effect) = &mut self.view.shake_effect {
            effect.advance(delta);
            if effect.is_finished() {
                self.view.shake_effect = None;
            }
        }
        if let Some(notice) = &mut self.notice {
            notice.timer.advance(delta);
            if notice.timer.is_finished() {
                self.notice = None;
            }
        }
        self.view.frames = self.view.frames.wrapping_add(1);
    }

    // ------------------------------------------------------------------
    // Section picker overlay
    // ------------------------------------------------------------------

    #[must_use]
    pub fn menu(&self) -> Option<MenuState> {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.is_some() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_menu(&mut self) {
        self.menu = Some(MenuState {
            selected: self.active.index(),
        });
        if !self.skip_motion() {
            self.view.menu_effect = Some(ModalEffect::pop_scale(MENU_POP_DURATION));
        }
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
        self.view.menu_effect = None;
    }

    // ------------------------------------------------------------------
    // Cursors and activation
    // ------------------------------------------------------------------

    pub fn cursor_up(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.selected = menu.selected.saturating_sub(1);
            return;
        }
        match self.active {
            SectionId::Projects => self.projects.up(),
            SectionId::Contact => self.contacts.up(),
            SectionId::Home | SectionId::About => {}
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(menu) = &mut self.menu {
            if menu.selected + 1 < SectionId::ALL.len() {
                menu.selected += 1;
            }
            return;
        }
        match self.active {
            SectionId::Projects => self.projects.down(self.content.projects.len()),
            SectionId::Contact => self.contacts.down(self.content.contacts.len()),
            SectionId::Home | SectionId::About => {}
        }
    }

    /// Context-sensitive activation (Enter).
    pub fn activate(&mut self) {
        if let Some(menu) = self.menu {
            let id = SectionId::ALL[menu.selected];
            self.close_menu();
            self.select(id);
            return;
        }
        match self.active {
            SectionId::Home => self.select(SectionId::Projects),
            SectionId::About => {}
            SectionId::Projects => self.open_project_github(),
            SectionId::Contact => self.open_selected_contact(),
        }
    }

    #[must_use]
    pub fn selected_project(&self) -> usize {
        self.projects.selected
    }

    #[must_use]
    pub fn selected_contact(&self) -> usize {
        self.contacts.selected
    }

    // ------------------------------------------------------------------
    // External actions (all best-effort)
    // ------------------------------------------------------------------

    pub fn open_project_github(&mut self) {
        let Some(project) = self.current_project() else {
            return;
        };
        let url = project.github.clone();
        let title = project.title.clone();
        self.open_link(&url, &format!("Opened {title} on GitHub"));
    }

    pub fn open_project_demo(&mut self) {
        let Some(project) = self.current_project() else {
            return;
        };
        if let Some(url) = project.demo.clone() {
            let title = project.title.clone();
            self.open_link(&url, &format!("Opened demo for {title}"));
        } else {
            if !self.skip_motion() {
                self.view.shake_effect = Some(ModalEffect::shake(SHAKE_DURATION));
            }
            self.post_notice("No demo for this project");
        }
    }

    fn current_project(&self) -> Option<&Project> {
        if self.active != SectionId::Projects {
            return None;
        }
        self.content.projects.get(self.projects.selected)
    }

    pub fn open_selected_contact(&mut self) {
        if self.active != SectionId::Contact {
            return;
        }
        let Some(contact) = self.content.contacts.get(self.contacts.selected) else {
            return;
        };
        let url = contact.url.clone();
        let label = contact.kind.label();
        self.open_link(&url, &format!("Opened {label}"));
    }

    pub fn open_portrait(&mut self) {
        if self.active != SectionId::Home {
            return;
        }
        let Some(portrait) = self.content.profile.portrait.clone() else {
            self.post_notice("No portrait configured");
            return;
        };
        self.open_link(&portrait, "Opened portrait");
    }

    /// Export the resume document. Never touches the active section.
    pub fn export_resume(&mut self) {
        match external::export_resume(&self.download_dir, &self.content.resume) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Resume exported");
                self.post_notice(&format!("Resume saved to {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "Resume export failed");
                self.post_notice("Resume export failed");
            }
        }
    }

    fn open_link(&mut self, url: &str, success: &str) {
        match external::open_link(url) {
            Ok(()) => {
                tracing::info!(url, "Opened link");
                self.post_notice(success);
            }
            Err(err) => {
                tracing::warn!(url, error = %format!("{err:#}"), "Failed to open link");
                self.post_notice("Could not open link");
            }
        }
    }

    // ------------------------------------------------------------------
    // Read accessors for rendering
    // ------------------------------------------------------------------

    fn post_notice(&mut self, text: &str) {
        self.notice = Some(StatusNotice {
            text: text.to_string(),
            timer: EffectTimer::new(NOTICE_DURATION),
        });
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    #[must_use]
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn frames(&self) -> usize {
        self.view.frames
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use folio_types::ui::{TransitionPhase, UiOptions};
    use folio_types::{
        ContactEntry, ContactKind, PortfolioContent, Profile, Project, ResumeDoc, SectionId,
        SkillGroup,
    };
    use std::time::Duration;

    const TRANSITION: Duration = Duration::from_millis(400);

    fn content() -> PortfolioContent {
        PortfolioContent {
            profile: Profile {
                name: "Ada".into(),
                headline: "Engineer".into(),
                summary: vec!["Hello.".into()],
                portrait: None,
            },
            skills: vec![SkillGroup {
                name: "Tools".into(),
                items: vec!["Git".into()],
            }],
            projects: vec![
                Project {
                    title: "Engine".into(),
                    description: "A thing.".into(),
                    tech: vec!["Rust".into()],
                    github: "https://example.com/engine".into(),
                    demo: Some("https://example.com/demo".into()),
                },
                Project {
                    title: "Parser".into(),
                    description: "Another thing.".into(),
                    tech: vec![],
                    github: "https://example.com/parser".into(),
                    demo: None,
                },
            ],
            contacts: vec![ContactEntry {
                kind: ContactKind::Email,
                value: "ada@example.com".into(),
                url: "mailto:ada@example.com".into(),
            }],
            resume: ResumeDoc {
                file_name: "ada.md".into(),
                body: "# Ada".into(),
            },
        }
    }

    fn app() -> App {
        App::new(content(), UiOptions::default(), TRANSITION)
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.section(), SectionId::Home);
        assert_eq!(
            app.transition_phase(),
            TransitionPhase::Steady {
                section: SectionId::Home
            }
        );
    }

    #[test]
    fn section_reflects_the_last_select_immediately() {
        let mut app = app();
        app.select(SectionId::About);
        app.select(SectionId::Contact);
        app.select(SectionId::Projects);
        assert_eq!(app.section(), SectionId::Projects);
    }

    #[test]
    fn reselecting_the_active_section_is_a_no_op() {
        let mut app = app();
        app.select(SectionId::About);
        app.advance(Duration::from_millis(100));
        let before = app.transition_phase();
        app.select(SectionId::About);
        assert_eq!(app.transition_phase(), before);
    }

    #[test]
    fn reselecting_when_steady_stays_steady() {
        let mut app = app();
        app.select(SectionId::About);
        app.advance(TRANSITION);
        app.select(SectionId::About);
        assert_eq!(
            app.transition_phase(),
            TransitionPhase::Steady {
                section: SectionId::About
            }
        );
    }

    #[test]
    fn rapid_selects_converge_on_the_last_target() {
        let mut app = app();
        app.select(SectionId::About);
        app.advance(Duration::from_millis(50));
        app.select(SectionId::Projects);
        app.advance(Duration::from_millis(50));
        app.select(SectionId::Contact);

        assert_eq!(app.section(), SectionId::Contact);
        app.advance(TRANSITION);
        assert_eq!(
            app.transition_phase(),
            TransitionPhase::Steady {
                section: SectionId::Contact
            }
        );
    }

    #[test]
    fn superseded_transition_departs_from_the_mounted_section() {
        let mut app = app();
        app.select(SectionId::About);
        // Deep into the enter phase: About is on screen.
        app.advance(Duration::from_millis(300));
        app.select(SectionId::Projects);
        assert!(matches!(
            app.transition_phase(),
            TransitionPhase::ExitingPrevious {
                section: SectionId::About,
                ..
            }
        ));
    }

    #[test]
    fn reduced_motion_swaps_without_a_transition() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let mut app = App::new(content(), options, TRANSITION);
        app.select(SectionId::Projects);
        assert_eq!(
            app.transition_phase(),
            TransitionPhase::Steady {
                section: SectionId::Projects
            }
        );
    }

    #[test]
    fn transition_is_dropped_once_finished() {
        let mut app = app();
        app.select(SectionId::About);
        app.advance(TRANSITION + Duration::from_millis(16));
        assert!(app.view().transition.is_none());
    }

    #[test]
    fn export_resume_does_not_change_the_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app().with_download_dir(dir.path().to_path_buf());
        app.select(SectionId::About);
        app.advance(TRANSITION);

        app.export_resume();

        assert_eq!(app.section(), SectionId::About);
        let exported = dir.path().join("ada.md");
        assert_eq!(
            std::fs::read_to_string(exported).expect("read"),
            "# Ada"
        );
        assert!(app.notice().expect("notice").contains("Resume saved"));
    }

    #[test]
    fn demo_request_without_a_demo_shakes_and_notifies() {
        let mut app = app();
        app.select(SectionId::Projects);
        app.advance(TRANSITION);
        app.cursor_down(); // Parser, which has no demo

        app.open_project_demo();

        assert!(app.view().shake_effect.is_some());
        assert_eq!(app.notice(), Some("No demo for this project"));
        assert_eq!(app.section(), SectionId::Projects);
    }

    #[test]
    fn notice_expires() {
        let mut app = app();
        app.open_project_demo(); // wrong section: no-op, no notice
        assert_eq!(app.notice(), None);

        app.select(SectionId::Projects);
        app.advance(TRANSITION);
        app.cursor_down();
        app.open_project_demo();
        assert!(app.notice().is_some());

        app.advance(Duration::from_secs(5));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        app.select(SectionId::Projects);
        app.cursor_up();
        assert_eq!(app.selected_project(), 0);
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.selected_project(), 1);
    }

    #[test]
    fn menu_activation_selects_and_closes() {
        let mut app = app();
        app.open_menu();
        app.cursor_down();
        app.cursor_down();
        app.activate();

        assert!(app.menu().is_none());
        assert_eq!(app.section(), SectionId::Projects);
    }

    #[test]
    fn menu_cursor_starts_on_the_active_section() {
        let mut app = app();
        app.select(SectionId::Contact);
        app.advance(TRANSITION);
        app.open_menu();
        assert_eq!(app.menu().expect("menu").selected(), 3);
    }

    #[test]
    fn home_activation_jumps_to_projects() {
        let mut app = app();
        app.activate();
        assert_eq!(app.section(), SectionId::Projects);
    }
}
