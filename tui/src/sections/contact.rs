//! The contact section: one card per way to get in touch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use folio_engine::App;
use folio_types::ContactKind;

use crate::sections::staggered_reveal;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let contacts = &app.content().contacts;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Fill(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Contact",
        styles::section_title(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let intro = Paragraph::new(Line::from(Span::styled(
        "I'd love to hear from you! Feel free to reach out.",
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[1]);

    if contacts.is_empty() {
        return;
    }

    let visible = staggered_reveal(contacts.len(), &app.transition_phase());
    let constraints: Vec<Constraint> = contacts
        .iter()
        .map(|_| Constraint::Ratio(1, contacts.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[2]);

    for (i, contact) in contacts.iter().take(visible).enumerate() {
        let selected = i == app.selected_contact();
        let kind_color = kind_color(contact.kind, palette);

        let border_style = if selected {
            Style::default().fg(palette.primary)
        } else {
            Style::default().fg(palette.bg_border)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                kind_glyph(contact.kind, glyphs),
                Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                contact.kind.label(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                contact.value.as_str(),
                Style::default().fg(palette.text_muted),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::key_highlight(palette)),
                Span::styled(" open", styles::key_hint(palette)),
            ]),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
        frame.render_widget(card, columns[i]);
    }
}

fn kind_glyph(kind: ContactKind, glyphs: &Glyphs) -> &'static str {
    match kind {
        ContactKind::Email => glyphs.email,
        ContactKind::LinkedIn => glyphs.linkedin,
        ContactKind::GitHub => glyphs.github,
    }
}

fn kind_color(kind: ContactKind, palette: &Palette) -> Color {
    match kind {
        ContactKind::Email => palette.contact_email,
        ContactKind::LinkedIn => palette.contact_linkedin,
        ContactKind::GitHub => palette.contact_github,
    }
}
