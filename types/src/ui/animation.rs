use std::time::Duration;

/// Observable state of a timed effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Animation clock: advances by frame deltas and clamps at the configured
/// duration. Never reads the wall clock itself.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}
