pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::survey::WeeklyParticipation;
use app::Phase;
use event::{Event, EventHandler};

/// Runs the interactive survey form in the alternate screen. Returns
/// None when the user backs out without finishing.
pub fn run_survey(theme: &Theme) -> Result<Option<WeeklyParticipation>> {
    let mut terminal = ratatui::init();
    let events = EventHandler::new(250);
    let mut app = App::new();

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app, theme)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => handle_key_event(&mut app, key),
            Ok(Event::Tick) => {}
            Err(e) => break Err(e.into()),
        }

        match app.phase {
            Phase::Asking => {}
            Phase::Done => break Ok(app.result()),
            Phase::Aborted => break Ok(None),
        }
    };

    // Restore the terminal on every path, including errors.
    ratatui::restore();
    outcome
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        // Abort
        KeyCode::Char('q') | KeyCode::Esc => app.abort(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.abort(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.next_option(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_option(),

        // Record the highlighted category
        KeyCode::Enter | KeyCode::Char(' ') => app.select(),

        // Revisit the previous question
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => app.back(),

        _ => {}
    }
}
