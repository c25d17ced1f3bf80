//! Terminal management
//!
//! Wraps the crossterm backend: raw mode and alternate screen setup,
//! restore on drop, and poll-based keyboard reads so the countdown
//! keeps redrawing between key presses.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

use crate::{Result, TickdownError};

/// Minimum terminal size the screen layout needs
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 16;

/// Poll budget per loop iteration. Half the tick cadence, so the
/// readout never lags a tick by more than one frame.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            return Err(TickdownError::TuiError(format!(
                "terminal too small: {}x{} (need at least {}x{})",
                size.width, size.height, MIN_WIDTH, MIN_HEIGHT
            )));
        }
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to the poll budget for a key press
    pub fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
