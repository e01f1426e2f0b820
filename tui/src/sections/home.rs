//! The hero section: name, headline, and calls-to-action.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use folio_engine::App;

use crate::theme::{Glyphs, Palette, spinner_frame, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let profile = &app.content().profile;

    // Vertically center the hero block.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Fill(2),
        ])
        .split(area);

    let accent = spinner_frame(app.frames() / 8, app.ui_options());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(accent, Style::default().fg(palette.accent)),
            Span::raw("  Hello, I'm  "),
            Span::styled(accent, Style::default().fg(palette.accent)),
        ])
        .style(Style::default().fg(palette.text_secondary)),
        Line::from(""),
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.headline.as_str(),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
    ];

    if let Some(first) = profile.summary.first() {
        lines.push(Line::from(Span::styled(
            first.as_str(),
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" view projects   ", styles::key_hint(palette)),
        Span::styled("r", styles::key_highlight(palette)),
        Span::styled(
            format!(" save resume {}", glyphs.resume),
            styles::key_hint(palette),
        ),
        Span::styled("   i", styles::key_highlight(palette)),
        Span::styled(" portrait", styles::key_hint(palette)),
    ]));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[1]);
}
