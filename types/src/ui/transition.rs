//! The section transition state machine.
//!
//! A transition is pure data: given the outgoing section, the incoming
//! section, and the time elapsed since the swap, [`SectionTransition::phase`]
//! says what the renderer should draw. Sequencing lives entirely here; the
//! renderer only projects phases onto screen coordinates, which keeps the
//! whole machine testable without a terminal.

use std::time::Duration;

use super::animation::EffectTimer;
use crate::SectionId;

/// What to draw at one point in a transition.
///
/// The sequence is strict: the outgoing section slides out, then the
/// incoming section slides in. Exactly one section is mounted per frame,
/// and once `Steady` is reached nothing of the outgoing section remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// First half: the previous section is on screen, moving out.
    ExitingPrevious { section: SectionId, progress: f32 },
    /// Second half: the next section is on screen, moving in.
    EnteringNext { section: SectionId, progress: f32 },
    /// The swap is complete; draw the target with no offset.
    Steady { section: SectionId },
}

impl TransitionPhase {
    /// The single section mounted in this phase.
    #[must_use]
    pub fn mounted(self) -> SectionId {
        match self {
            TransitionPhase::ExitingPrevious { section, .. }
            | TransitionPhase::EnteringNext { section, .. }
            | TransitionPhase::Steady { section } => section,
        }
    }
}

/// An in-flight swap between two sections.
#[derive(Debug, Clone)]
pub struct SectionTransition {
    from: SectionId,
    to: SectionId,
    timer: EffectTimer,
}

impl SectionTransition {
    #[must_use]
    pub fn new(from: SectionId, to: SectionId, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Phase at the current elapsed time. The exit occupies the first half
    /// of the duration, the enter the second half.
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        if self.timer.is_finished() {
            return TransitionPhase::Steady { section: self.to };
        }
        let progress = self.timer.progress();
        if progress < 0.5 {
            TransitionPhase::ExitingPrevious {
                section: self.from,
                progress: progress * 2.0,
            }
        } else {
            TransitionPhase::EnteringNext {
                section: self.to,
                progress: (progress - 0.5) * 2.0,
            }
        }
    }

    /// The section currently on screen.
    #[must_use]
    pub fn mounted(&self) -> SectionId {
        self.phase().mounted()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn from(&self) -> SectionId {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> SectionId {
        self.to
    }
}
