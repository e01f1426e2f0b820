//! View state for rendering.
//!
//! Groups everything the renderer consumes each frame, separating it from
//! the navigation state that drives the application.

use std::time::Instant;

use super::{ModalEffect, SectionTransition};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Render-facing state owned by the engine and advanced once per frame.
#[derive(Debug)]
pub struct ViewState {
    /// In-flight section swap; `None` once steady.
    pub transition: Option<SectionTransition>,
    /// Pop-in animation for the section picker overlay.
    pub menu_effect: Option<ModalEffect>,
    /// Shake animation for a rejected action.
    pub shake_effect: Option<ModalEffect>,
    /// UI options (glyphs, contrast, motion).
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
    /// Monotonic frame counter (drives idle accents).
    pub frames: usize,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            transition: None,
            menu_effect: None,
            shake_effect: None,
            ui_options,
            last_frame: Instant::now(),
            frames: 0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
