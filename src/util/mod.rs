//! Utility functions module
//!
//! Display formatting helpers for clock readouts, scores, and session
//! durations.

pub mod format;

// Re-export commonly used functions
pub use format::{format_remaining, format_score, format_session_length};
