//! TUI application module
//!
//! Contains the terminal user interface components, input handling,
//! and the application run loop.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::TimerScreen;
pub use state::{key_to_action, InputAction, SessionStats};
pub use tui::Tui;
