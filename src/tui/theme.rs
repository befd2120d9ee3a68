//! Color palette for the interactive survey form.

use ratatui::prelude::*;

/// Palette used by the survey form, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub description: Color,
    pub option: Color,
    pub highlighted: Style,
    pub cursor: Color,
    pub muted: Color,
    pub status_key: Color,
    pub status_bar_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            title: Style::new().fg(Color::Cyan).bold(),
            description: Color::Gray,
            option: Color::White,
            highlighted: Style::new().fg(Color::Magenta).bold(),
            cursor: Color::Magenta,
            muted: Color::DarkGray,
            status_key: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
        }
    }

    pub fn light() -> Self {
        Self {
            title: Style::new().fg(Color::Blue).bold(),
            description: Color::DarkGray,
            option: Color::Black,
            highlighted: Style::new().fg(Color::Magenta).bold(),
            cursor: Color::Magenta,
            muted: Color::Gray,
            status_key: Color::Blue,
            status_bar_bg: Color::Indexed(253),
        }
    }
}

/// Picks the light or dark palette from the terminal background. Falls
/// back to dark when the background cannot be probed (pipes, terminals
/// without the query).
pub fn resolve_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => Theme::light(),
        _ => Theme::dark(),
    }
}
