//! TUI screen components
//!
//! The application has a single screen: the countdown timer.

pub mod timer;

pub use timer::TimerScreen;
