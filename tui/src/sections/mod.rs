//! The four section views.

mod about;
mod contact;
mod home;
mod projects;

use ratatui::Frame;
use ratatui::layout::Rect;

use folio_engine::App;
use folio_types::SectionId;
use folio_types::ui::TransitionPhase;

use crate::theme::{Glyphs, Palette};

/// Total mapping from section to its view. A missing arm is a compile
/// error, so the registry cannot silently render nothing.
pub(crate) fn draw_section(
    frame: &mut Frame,
    app: &App,
    id: SectionId,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    match id {
        SectionId::Home => home::draw(frame, app, area, palette, glyphs),
        SectionId::About => about::draw(frame, app, area, palette, glyphs),
        SectionId::Projects => projects::draw(frame, app, area, palette, glyphs),
        SectionId::Contact => contact::draw(frame, app, area, palette, glyphs),
    }
}

/// Number of list items visible during a staggered enter animation.
///
/// Items appear one after another as the enter progresses, the way the
/// section content cascades in. Outside the enter phase everything shows.
pub(crate) fn staggered_reveal(len: usize, phase: &TransitionPhase) -> usize {
    match *phase {
        TransitionPhase::EnteringNext { progress, .. } => {
            ((progress * len as f32).floor() as usize + 1).min(len)
        }
        TransitionPhase::ExitingPrevious { .. } | TransitionPhase::Steady { .. } => len,
    }
}
