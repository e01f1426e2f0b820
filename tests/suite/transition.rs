//! Transition presenter sequencing: exit, enter, steady, superseding.

use std::time::Duration;

use folio_types::SectionId;
use folio_types::ui::{SectionTransition, TransitionPhase};

use crate::common::{TRANSITION, sample_app};

#[test]
fn phases_run_exit_then_enter_then_steady() {
    let mut t = SectionTransition::new(SectionId::Home, SectionId::About, TRANSITION);

    assert!(matches!(
        t.phase(),
        TransitionPhase::ExitingPrevious {
            section: SectionId::Home,
            ..
        }
    ));

    t.advance(Duration::from_millis(250));
    assert!(matches!(
        t.phase(),
        TransitionPhase::EnteringNext {
            section: SectionId::About,
            ..
        }
    ));

    t.advance(Duration::from_millis(250));
    assert_eq!(
        t.phase(),
        TransitionPhase::Steady {
            section: SectionId::About
        }
    );
}

#[test]
fn exactly_one_section_is_mounted_at_every_instant() {
    let mut t = SectionTransition::new(SectionId::Projects, SectionId::Contact, TRANSITION);
    for _ in 0..30 {
        t.advance(Duration::from_millis(16));
        let mounted = t.phase().mounted();
        assert!(mounted == SectionId::Projects || mounted == SectionId::Contact);
    }
    assert_eq!(t.phase().mounted(), SectionId::Contact);
}

#[test]
fn state_change_is_never_delayed_by_the_animation() {
    let mut app = sample_app();
    app.select(SectionId::Projects);

    // The transition has not advanced a single frame, yet the controller
    // already reports the new section.
    assert_eq!(app.section(), SectionId::Projects);
    assert!(matches!(
        app.transition_phase(),
        TransitionPhase::ExitingPrevious { .. }
    ));
}

#[test]
fn superseding_select_departs_from_whatever_is_on_screen() {
    let mut app = sample_app();
    app.select(SectionId::About);
    // Into the enter phase: About is visually dominant.
    app.advance(Duration::from_millis(300));
    assert_eq!(app.transition_phase().mounted(), SectionId::About);

    app.select(SectionId::Contact);
    assert!(matches!(
        app.transition_phase(),
        TransitionPhase::ExitingPrevious {
            section: SectionId::About,
            ..
        }
    ));
}

#[test]
fn returning_to_the_visible_section_snaps_without_animation() {
    let mut app = sample_app();
    app.select(SectionId::About);
    // Still exiting: Home is on screen.
    app.advance(Duration::from_millis(50));
    assert_eq!(app.transition_phase().mounted(), SectionId::Home);

    // Selecting Home again would animate Home into Home; it snaps instead.
    app.select(SectionId::Home);
    assert_eq!(
        app.transition_phase(),
        TransitionPhase::Steady {
            section: SectionId::Home
        }
    );
}

#[test]
fn finished_transition_leaves_no_state_behind() {
    let mut app = sample_app();
    app.select(SectionId::About);
    app.advance(TRANSITION + Duration::from_millis(1));
    assert!(app.view().transition.is_none());
    assert_eq!(app.transition_phase().mounted(), SectionId::About);
}
