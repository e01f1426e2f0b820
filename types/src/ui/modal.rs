//! Animation effects for TUI overlays.

use std::time::Duration;

use super::animation::EffectTimer;

/// The kind of overlay animation effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffectKind {
    /// Scale in from the center (section picker opening).
    PopScale,
    /// Horizontal shake (rejected action, e.g. a project without a demo).
    Shake,
}

/// Overlay animation effect state.
#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}
