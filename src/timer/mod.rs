//! Countdown state machine
//!
//! Pure, synchronous countdown logic: begin/end transitions and tick
//! application. All async plumbing lives in [`ticker`].

use crate::{COUNTDOWN_START_SECS, TICK_DECREMENT_SECS};

pub mod ticker;

/// Countdown phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Clock is parked at the start value, waiting for Begin
    Idle,
    /// Clock is counting down
    Running,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// What applying one tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Remaining time was reduced by one step
    Decremented,
    /// The clock ran out; the countdown reset itself without a score
    Expired,
    /// Tick arrived while idle (stale delivery) and was discarded
    Ignored,
}

/// The 60 second countdown.
///
/// Remaining time stays within `[0.0, COUNTDOWN_START_SECS]`; only
/// `begin`, `end`, and `apply_tick` mutate it, and all three run on the
/// UI loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining_secs: f64,
    phase: Phase,
}

impl Countdown {
    /// Create a countdown parked at the start value
    pub fn new() -> Self {
        Self {
            remaining_secs: COUNTDOWN_START_SECS,
            phase: Phase::Idle,
        }
    }

    /// Seconds left on the clock
    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the clock is counting down
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Start the countdown. Inert while already running.
    ///
    /// Returns true if the transition happened, so the caller knows to
    /// spawn a tick source.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Apply one periodic tick.
    ///
    /// An exhausted clock resets itself to the start value without
    /// producing a score; otherwise the remaining time drops by one
    /// step, clamped at zero so float drift cannot push it negative.
    pub fn apply_tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        if self.remaining_secs <= 0.0 {
            self.reset();
            return TickOutcome::Expired;
        }
        self.remaining_secs = (self.remaining_secs - TICK_DECREMENT_SECS).max(0.0);
        TickOutcome::Decremented
    }

    /// Stop the countdown and capture the remaining time as a score.
    ///
    /// Inert while idle. The caller must cancel the tick source before
    /// calling this so no tick lands after the reset.
    pub fn end(&mut self) -> Option<f64> {
        if self.phase != Phase::Running {
            return None;
        }
        let score = self.remaining_secs;
        self.reset();
        Some(score)
    }

    fn reset(&mut self) {
        self.remaining_secs = COUNTDOWN_START_SECS;
        self.phase = Phase::Idle;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_starts_idle_at_sixty() {
        let countdown = Countdown::new();
        assert_eq!(countdown.phase(), Phase::Idle);
        assert!((countdown.remaining_secs() - 60.0).abs() < EPSILON);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_begin_transitions_once() {
        let mut countdown = Countdown::new();
        assert!(countdown.begin());
        assert!(countdown.is_running());
        // Begin while running is inert
        assert!(!countdown.begin());
        assert!(countdown.is_running());
    }

    #[test]
    fn test_tick_decrements_by_step() {
        let mut countdown = Countdown::new();
        countdown.begin();
        assert_eq!(countdown.apply_tick(), TickOutcome::Decremented);
        assert!((countdown.remaining_secs() - 59.9).abs() < EPSILON);
    }

    #[test]
    fn test_ticks_decrease_monotonically() {
        let mut countdown = Countdown::new();
        countdown.begin();
        let mut previous = countdown.remaining_secs();
        for _ in 0..100 {
            countdown.apply_tick();
            let current = countdown.remaining_secs();
            assert!(current < previous);
            assert!((previous - current - 0.1).abs() < EPSILON);
            previous = current;
        }
    }

    #[test]
    fn test_expiry_resets_without_score() {
        let mut countdown = Countdown::new();
        countdown.begin();
        // 600 ticks drain the clock to zero (clamped), the 601st expires it
        for _ in 0..600 {
            assert_eq!(countdown.apply_tick(), TickOutcome::Decremented);
        }
        assert!(countdown.remaining_secs().abs() < EPSILON);
        assert!(countdown.is_running());
        assert_eq!(countdown.apply_tick(), TickOutcome::Expired);
        assert_eq!(countdown.phase(), Phase::Idle);
        assert!((countdown.remaining_secs() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_remaining_never_leaves_range() {
        let mut countdown = Countdown::new();
        countdown.begin();
        for _ in 0..700 {
            countdown.apply_tick();
            assert!(countdown.remaining_secs() >= 0.0);
            assert!(countdown.remaining_secs() <= 60.0);
        }
    }

    #[test]
    fn test_end_captures_score_and_resets() {
        let mut countdown = Countdown::new();
        countdown.begin();
        for _ in 0..50 {
            countdown.apply_tick();
        }
        let score = countdown.end().expect("end while running yields a score");
        assert!((score - 55.0).abs() < 1e-6);
        assert_eq!(countdown.phase(), Phase::Idle);
        assert!((countdown.remaining_secs() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_end_while_idle_is_inert() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.end(), None);
        assert!((countdown.remaining_secs() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut countdown = Countdown::new();
        countdown.begin();
        countdown.apply_tick();
        countdown.end();
        // A tick buffered before cancellation must not touch the reset state
        assert_eq!(countdown.apply_tick(), TickOutcome::Ignored);
        assert!((countdown.remaining_secs() - 60.0).abs() < EPSILON);
    }
}
