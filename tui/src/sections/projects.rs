//! The projects section: a selectable list of project cards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use folio_engine::App;
use folio_types::Project;

use crate::sections::staggered_reveal;
use crate::theme::{Glyphs, Palette, styles};

const CARD_HEIGHT: u16 = 6;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let projects = &app.content().projects;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Projects",
        styles::section_title(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let visible = staggered_reveal(projects.len(), &app.transition_phase());
    let constraints: Vec<Constraint> = projects
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain([Constraint::Fill(1)])
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (i, project) in projects.iter().take(visible).enumerate() {
        let selected = i == app.selected_project();
        draw_card(frame, project, rows[i], selected, palette, glyphs);
    }
}

fn draw_card(
    frame: &mut Frame,
    project: &Project,
    area: Rect,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let border_style = if selected {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let marker = if selected { glyphs.selected } else { " " };
    let title = Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(palette.primary)),
        Span::styled(
            project.title.as_str(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);

    let mut tech_spans: Vec<Span> = Vec::new();
    for tech in &project.tech {
        tech_spans.push(Span::styled(
            format!("{}{}{}", glyphs.tag_open, tech, glyphs.tag_close),
            styles::tag(palette),
        ));
        tech_spans.push(Span::raw(" "));
    }

    let mut link_spans = vec![
        Span::styled("g", styles::key_highlight(palette)),
        Span::styled(
            format!(" GitHub {} ", glyphs.link),
            styles::key_hint(palette),
        ),
        Span::styled(
            project.github.as_str(),
            Style::default().fg(palette.text_muted),
        ),
    ];
    // Only projects with a live demo advertise one.
    if project.demo.is_some() {
        link_spans.push(Span::styled("   d", styles::key_highlight(palette)));
        link_spans.push(Span::styled(
            format!(" Demo {}", glyphs.link),
            styles::key_hint(palette),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            project.description.as_str(),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(tech_spans),
        Line::from(link_spans),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(title),
    );
    frame.render_widget(card, area);
}
