//! Input mapping and session accounting
//!
//! Translates keyboard events into the handful of actions the single
//! screen supports, and keeps per-session counters for the exit recap.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the timer screen reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Activate the visible control (Begin while idle, End while running)
    Select,
    /// Quit the application (q, Q, Esc, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert a keyboard event to an input action.
///
/// Only one control is ever visible, so a single Select action keeps
/// Begin and End mutually exclusive by construction; the screen decides
/// which one it means from the countdown phase.
pub fn key_to_action(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Select,
        _ => InputAction::None,
    }
}

/// Counters for the end-of-session recap
#[derive(Debug)]
pub struct SessionStats {
    started_at: Instant,
    attempts: u32,
    expirations: u32,
}

impl SessionStats {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            attempts: 0,
            expirations: 0,
        }
    }

    /// Record a Begin
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Record a run that drained the clock to zero
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Runs started this session
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Runs that expired without a score
    pub fn expirations(&self) -> u32 {
        self.expirations
    }

    /// How long the session has been going
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
