//! The about section: summary paragraphs and skill groups.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use folio_engine::App;

use crate::sections::staggered_reveal;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let profile = &app.content().profile;
    let skills = &app.content().skills;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(profile.summary.len() as u16 * 3),
            Constraint::Fill(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "About Me",
        styles::section_title(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut summary_lines = Vec::new();
    for paragraph in &profile.summary {
        summary_lines.push(Line::from(Span::styled(
            paragraph.as_str(),
            Style::default().fg(palette.text_secondary),
        )));
        summary_lines.push(Line::from(""));
    }
    let summary = Paragraph::new(summary_lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, chunks[1]);

    if skills.is_empty() {
        return;
    }

    // One column per group, revealed left to right while entering.
    let visible = staggered_reveal(skills.len(), &app.transition_phase());
    let constraints: Vec<Constraint> = skills
        .iter()
        .map(|_| Constraint::Ratio(1, skills.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[2]);

    for (i, group) in skills.iter().take(visible).enumerate() {
        let mut lines = vec![Line::from("")];
        for item in &group.items {
            lines.push(Line::from(vec![
                Span::styled(glyphs.bullet, Style::default().fg(palette.primary)),
                Span::raw(" "),
                Span::styled(item.as_str(), Style::default().fg(palette.text_secondary)),
            ]));
        }

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .padding(Padding::horizontal(1))
                .title(Span::styled(
                    format!(" {} ", group.name),
                    Style::default().fg(palette.accent),
                )),
        );
        frame.render_widget(card, columns[i]);
    }
}
