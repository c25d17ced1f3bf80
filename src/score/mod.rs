//! High score tracking
//!
//! In-memory board of remaining-time scores recorded when the user ends
//! a run early. Values collapse duplicates like the set it models, grow
//! monotonically, and vanish with the process.

use chrono::{DateTime, Local};

/// A single recorded score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// Seconds left on the clock when the run was ended
    pub value: f64,
    /// Wall-clock time the score was recorded
    pub recorded_at: DateTime<Local>,
}

/// Notification produced by recording a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreEvent {
    /// First score of the session
    Baseline(f64),
    /// Score strictly above the previous best
    HighScore(f64),
}

impl ScoreEvent {
    /// User-visible toast message for this event
    pub fn message(&self) -> &'static str {
        match self {
            ScoreEvent::Baseline(_) => "New baseline established!",
            ScoreEvent::HighScore(_) => "Wow, new high score!",
        }
    }
}

/// Session-scoped score board
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no score has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct scores recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Best score so far, if any
    pub fn best(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|entry| entry.value)
            .fold(None, |best, value| match best {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }

    /// All recorded scores, in recording order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// The `count` best scores, highest first
    pub fn top(&self, count: usize) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<&ScoreEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(count);
        ranked
    }

    /// Run the scoring check for a finished run.
    ///
    /// Two checks, in order and not mutually exclusive: an empty board
    /// adopts the score as the baseline, and a score strictly above the
    /// current best becomes the new high score. A score equal to the
    /// best is neither recorded nor announced (strict comparison,
    /// preserved from the original behavior).
    pub fn record(&mut self, score: f64) -> Vec<ScoreEvent> {
        let mut events = Vec::new();

        if self.entries.is_empty() {
            self.insert(score);
            events.push(ScoreEvent::Baseline(score));
        }

        if let Some(best) = self.best() {
            if score > best {
                self.insert(score);
                events.push(ScoreEvent::HighScore(score));
            }
        }

        events
    }

    /// Insert with duplicate collapse (set semantics)
    fn insert(&mut self, score: f64) {
        if self.entries.iter().any(|entry| entry.value == score) {
            return;
        }
        self.entries.push(ScoreEntry {
            value: score,
            recorded_at: Local::now(),
        });
    }
}
