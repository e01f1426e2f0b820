//! TUI rendering for folio using ratatui.

mod effects;
mod input;
mod sections;
mod theme;

pub use effects::{apply_modal_effect, apply_transition};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use folio_engine::App;
use folio_types::{SectionId, nav_items};

/// Below this inner width the navigation bar collapses to the active
/// section plus a menu hint.
const COMPACT_NAV_THRESHOLD: u16 = 56;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = theme::palette(options);
    let glyphs = theme::glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(1),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_nav_bar(frame, app, chunks[0], &palette, &glyphs);
    draw_active_section(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette);

    if app.menu().is_some() {
        draw_section_menu(frame, app, &palette, &glyphs);
    }
}

/// Draw the mounted section at its transition offset. Exactly one section
/// is drawn per frame; the offset comes from the pure transition phase.
fn draw_active_section(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let phase = app.transition_phase();
    let mut target = effects::apply_transition(&phase, area);
    if let Some(shake) = &app.view().shake_effect {
        target = effects::apply_modal_effect(shake, target, area);
    }
    if target.width == 0 || target.height == 0 {
        return;
    }
    sections::draw_section(frame, app, phase.mounted(), target, palette, glyphs);
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = if inner.width < COMPACT_NAV_THRESHOLD {
        compact_nav_spans(app, palette, glyphs)
    } else {
        full_nav_spans(app, palette)
    };
    let items_width: usize = items
        .iter()
        .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
        .sum();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(items_width as u16)])
        .split(inner);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.content().profile.name),
        styles::brand(palette),
    )));
    frame.render_widget(brand, halves[0]);
    frame.render_widget(Paragraph::new(Line::from(items)), halves[1]);
}

fn full_nav_spans(app: &App, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, item) in nav_items().iter().enumerate() {
        let style = if item.id == app.section() {
            styles::nav_active(palette)
        } else {
            styles::nav_inactive(palette)
        };
        spans.push(Span::styled(format!("{} ", i + 1), styles::key_hint(palette)));
        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

fn compact_nav_spans(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", app.section().label()),
            styles::nav_active(palette),
        ),
        Span::raw("  "),
        Span::styled(glyphs.menu.to_string(), styles::key_highlight(palette)),
        Span::styled(" m menu ", styles::key_hint(palette)),
    ]
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let badge = format!(" {} ", app.section().label().to_uppercase());
    let mut spans = vec![
        Span::styled(badge, styles::section_badge(palette)),
        Span::raw(" "),
    ];

    if let Some(notice) = app.notice() {
        spans.push(Span::styled(notice, styles::notice(palette)));
    } else {
        spans.extend(hint_spans(app.section(), palette));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hint_spans(section: SectionId, palette: &Palette) -> Vec<Span<'static>> {
    let mut hints: Vec<(&str, &str)> = vec![("Tab", "next"), ("1-4", "go")];
    match section {
        SectionId::Home => {
            hints.push(("Enter", "projects"));
            hints.push(("r", "resume"));
        }
        SectionId::About => {}
        SectionId::Projects => {
            hints.push(("j/k", "select"));
            hints.push(("g", "github"));
            hints.push(("d", "demo"));
        }
        SectionId::Contact => {
            hints.push(("j/k", "select"));
            hints.push(("Enter", "open"));
        }
    }
    hints.push(("q", "quit"));

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    spans
}

fn draw_section_menu(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let Some(menu) = app.menu() else {
        return;
    };
    let viewport = frame.area();
    let width = 30.min(viewport.width.saturating_sub(4));
    let height = (SectionId::ALL.len() as u16) + 4;
    let base = centered_rect(viewport, width, height);
    let area = match &app.view().menu_effect {
        Some(effect) => effects::apply_modal_effect(effect, base, viewport),
        None => base,
    };

    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (i, item) in nav_items().iter().enumerate() {
        let selected = i == menu.selected();
        let marker = if selected { glyphs.selected } else { " " };
        let style = if selected {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(palette.primary)),
            Span::styled(format!("{} ", i + 1), styles::key_hint(palette)),
            Span::styled(item.label, style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  j/k", styles::key_highlight(palette)),
        Span::styled(" select  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" go  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ]));

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg_panel))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.primary))
                .title(Line::from(vec![
                    Span::styled(
                        format!(" {} ", glyphs.menu),
                        Style::default().fg(palette.primary),
                    ),
                    Span::styled("Sections ", styles::section_title(palette)),
                ])),
        );
    frame.render_widget(widget, area);
}

fn centered_rect(viewport: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(viewport.width);
    let height = height.min(viewport.height);
    Rect {
        x: viewport.x + viewport.width.saturating_sub(width) / 2,
        y: viewport.y + viewport.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
