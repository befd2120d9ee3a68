use std::io;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// Terminal events the survey loop reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Synchronous event source: blocks up to one tick waiting for input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Next key press, or a tick when the tick interval passes without
    /// one. Key release/repeat events are filtered (Windows emits them).
    pub fn next(&self) -> io::Result<Event> {
        if event::poll(self.tick_rate)? {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Event::Key(key));
                }
            }
            // Resize, mouse, or non-press key: treat as a tick.
            return Ok(Event::Tick);
        }
        Ok(Event::Tick)
    }
}
