//! TICKDOWN - a 60 second countdown game for the terminal
//!
//! Start the clock, stop it as early as you dare, and try to leave more
//! time on the clock than your best run so far. Scores live in memory
//! for the session only.

use std::fmt;
use std::time::Duration;

// Public re-exports
pub mod app;
pub mod score;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum TickdownError {
    /// Terminal I/O failed
    IoError(std::io::Error),
    /// TUI setup or rendering error
    TuiError(String),
    /// Countdown tick delivery error
    TimerError(String),
}

impl fmt::Display for TickdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickdownError::IoError(err) => write!(f, "I/O error: {}", err),
            TickdownError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            TickdownError::TimerError(msg) => write!(f, "Timer error: {}", msg),
        }
    }
}

impl std::error::Error for TickdownError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickdownError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TickdownError {
    fn from(err: std::io::Error) -> Self {
        TickdownError::IoError(err)
    }
}

/// Result type alias for tickdown operations
pub type Result<T> = std::result::Result<T, TickdownError>;

// Common types and constants
pub const APP_NAME: &str = "tickdown";
/// Value the countdown starts from and resets to, in seconds.
pub const COUNTDOWN_START_SECS: f64 = 60.0;
/// Amount one tick removes from the countdown, in seconds.
pub const TICK_DECREMENT_SECS: f64 = 0.1;
/// Cadence of the periodic tick source.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// How long a score notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);
