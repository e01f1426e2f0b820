//! Navigation controller semantics: selection ordering, idempotence,
//! convergence under rapid input.

use std::time::Duration;

use folio_types::SectionId;
use folio_types::ui::TransitionPhase;

use crate::common::{TRANSITION, instant_app, sample_app};

#[test]
fn starts_on_home_with_the_home_view_mounted() {
    let app = sample_app();
    assert_eq!(app.section(), SectionId::Home);
    assert_eq!(app.transition_phase().mounted(), SectionId::Home);
}

#[test]
fn current_section_equals_the_last_of_any_select_sequence() {
    let sequences: &[&[SectionId]] = &[
        &[SectionId::About],
        &[SectionId::Projects, SectionId::Projects],
        &[SectionId::Contact, SectionId::Home, SectionId::About],
        &[
            SectionId::About,
            SectionId::Projects,
            SectionId::Contact,
            SectionId::Home,
            SectionId::Projects,
        ],
    ];

    for sequence in sequences {
        let mut app = sample_app();
        for &id in *sequence {
            app.select(id);
        }
        assert_eq!(app.section(), *sequence.last().expect("non-empty"));
    }
}

#[test]
fn selects_are_applied_in_order_even_without_frames() {
    // No advance() between selects: ordering must not depend on the
    // animation clock.
    let mut app = sample_app();
    app.select(SectionId::Projects);
    app.select(SectionId::About);
    assert_eq!(app.section(), SectionId::About);
}

#[test]
fn reselecting_the_active_section_produces_no_transition_event() {
    let mut app = sample_app();
    app.select(SectionId::About);
    app.advance(TRANSITION);
    assert!(app.view().transition.is_none());

    // Clicking the nav item for the active section twice in a row.
    app.select(SectionId::About);
    app.select(SectionId::About);
    assert!(app.view().transition.is_none());
    assert_eq!(
        app.transition_phase(),
        TransitionPhase::Steady {
            section: SectionId::About
        }
    );
}

#[test]
fn reselect_mid_flight_does_not_restart_the_animation() {
    let mut app = sample_app();
    app.select(SectionId::About);
    app.advance(Duration::from_millis(150));
    let before = app.transition_phase();

    app.select(SectionId::About);
    assert_eq!(app.transition_phase(), before);
}

#[test]
fn rapid_selects_converge_with_no_residual_view() {
    let mut app = sample_app();
    app.select(SectionId::About);
    app.advance(Duration::from_millis(30));
    app.select(SectionId::Projects);
    app.advance(Duration::from_millis(30));
    app.select(SectionId::Contact);

    assert_eq!(app.section(), SectionId::Contact);

    // Step the animation to completion; the abandoned targets must never
    // be mounted.
    let mut mounted = Vec::new();
    for _ in 0..40 {
        app.advance(Duration::from_millis(16));
        mounted.push(app.transition_phase().mounted());
    }
    assert!(!mounted.contains(&SectionId::About));
    assert!(!mounted.contains(&SectionId::Projects));
    assert_eq!(*mounted.last().expect("frames"), SectionId::Contact);
}

#[test]
fn reduced_motion_is_always_steady() {
    let mut app = instant_app();
    app.select(SectionId::Projects);
    assert_eq!(
        app.transition_phase(),
        TransitionPhase::Steady {
            section: SectionId::Projects
        }
    );
    app.select(SectionId::Contact);
    assert_eq!(
        app.transition_phase(),
        TransitionPhase::Steady {
            section: SectionId::Contact
        }
    );
}

#[test]
fn wrap_around_cycling_touches_every_section() {
    let mut app = instant_app();
    let mut seen = vec![app.section()];
    for _ in 0..4 {
        app.select_next();
        seen.push(app.section());
    }
    assert_eq!(seen.first(), seen.last());
    for id in SectionId::ALL {
        assert!(seen.contains(&id));
    }
}
