//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency. Used by
//! the engine (state ownership) and the tui crate (rendering/input).

mod animation;
mod modal;
mod transition;
mod view_state;

pub use animation::{AnimPhase, EffectTimer};
pub use modal::{ModalEffect, ModalEffectKind};
pub use transition::{SectionTransition, TransitionPhase};
pub use view_state::{UiOptions, ViewState};
