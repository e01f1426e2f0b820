//! Color theme and glyphs for the folio TUI.
//!
//! Emerald-on-slate palette with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_types::ui::UiOptions;

/// Emerald/slate color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (slate) ===
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const BG_HIGHLIGHT: Color = Color::Rgb(51, 65, 85); // slate-700
    pub const BG_BORDER: Color = Color::Rgb(71, 85, 105); // slate-600

    // === Foregrounds (slate) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225); // slate-300
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const TEXT_DISABLED: Color = Color::Rgb(100, 116, 139); // slate-500

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(16, 185, 129); // emerald-500
    pub const PRIMARY_DIM: Color = Color::Rgb(4, 120, 87); // emerald-700

    // === Accent Colors ===
    pub const ACCENT: Color = Color::Rgb(110, 231, 183); // emerald-300
    pub const GREEN: Color = Color::Rgb(52, 211, 153); // emerald-400
    pub const YELLOW: Color = Color::Rgb(251, 191, 36); // amber-400
    pub const RED: Color = Color::Rgb(251, 113, 133); // rose-400
    pub const BLUE: Color = Color::Rgb(56, 189, 248); // sky-400

    // === Semantic Aliases ===
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = YELLOW;
    pub const ERROR: Color = RED;

    // === Contact Brand Colors ===
    pub const CONTACT_EMAIL: Color = Color::Rgb(217, 119, 6); // amber-600
    pub const CONTACT_LINKEDIN: Color = Color::Rgb(10, 102, 194); // LinkedIn blue
    pub const CONTACT_GITHUB: Color = Color::Rgb(241, 245, 249); // white
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub blue: Color,
    pub contact_email: Color,
    pub contact_linkedin: Color,
    pub contact_github: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            blue: colors::BLUE,
            contact_email: colors::CONTACT_EMAIL,
            contact_linkedin: colors::CONTACT_LINKEDIN,
            contact_github: colors::CONTACT_GITHUB,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            blue: Color::Blue,
            contact_email: Color::Yellow,
            contact_linkedin: Color::Blue,
            contact_github: Color::White,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and accents.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub selected: &'static str,
    pub link: &'static str,
    pub menu: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
    pub tag_open: &'static str,
    pub tag_close: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            selected: ">",
            link: "->",
            menu: "=",
            email: "@",
            linkedin: "in",
            github: "#",
            resume: "v",
            tag_open: "[",
            tag_close: "]",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            bullet: "•",
            selected: "▸",
            link: "↗",
            menu: "≡",
            email: "✉",
            linkedin: "in",
            github: "⎇",
            resume: "⇩",
            tag_open: "⟨",
            tag_close: "⟩",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of
/// cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn section_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn notice(palette: &Palette) -> Style {
        Style::default().fg(palette.success)
    }

    #[must_use]
    pub fn section_badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }
}
