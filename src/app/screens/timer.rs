//! Timer screen implementation
//!
//! The single application screen: countdown readout, the Begin/End
//! control (one visible at a time), transient score toasts, and the
//! session's best scores.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::score::ScoreBoard;
use crate::timer::Countdown;
use crate::util::{format_remaining, format_score};
use crate::TOAST_DURATION;

/// Transient score notification
#[derive(Debug)]
struct Toast {
    message: &'static str,
    shown_at: Instant,
}

impl Toast {
    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

/// Timer screen component
#[derive(Debug, Default)]
pub struct TimerScreen {
    toast: Option<Toast>,
}

impl TimerScreen {
    /// Create a new timer screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a transient notification, replacing any current one
    pub fn show_toast(&mut self, message: &'static str) {
        self.toast = Some(Toast {
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drop the notification once its display window has passed
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|toast| toast.expired()) {
            self.toast = None;
        }
    }

    /// Whether a notification is currently on screen
    pub fn toast_visible(&self) -> bool {
        self.toast.is_some()
    }

    /// Render the timer screen
    pub fn render(&mut self, f: &mut Frame, countdown: &Countdown, scores: &ScoreBoard) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Countdown readout
                Constraint::Length(3), // Begin/End control
                Constraint::Length(3), // Toast area
                Constraint::Min(6),    // High scores
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_readout(f, chunks[1], countdown);
        self.render_control(f, chunks[2], countdown);
        self.render_toast(f, chunks[3]);
        self.render_scores(f, chunks[4], scores);
        self.render_help(f, chunks[5], countdown);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("TICKDOWN")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    /// The countdown readout, two decimal places, color-keyed to phase
    fn render_readout(&self, f: &mut Frame, area: ratatui::layout::Rect, countdown: &Countdown) {
        let color = if countdown.is_running() {
            Color::Green
        } else {
            Color::White
        };

        let readout = Paragraph::new(format_remaining(countdown.remaining_secs()))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title("Seconds Left")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(readout, area);
    }

    /// One control at a time: Begin while idle, End while running
    fn render_control(&self, f: &mut Frame, area: ratatui::layout::Rect, countdown: &Countdown) {
        let (label, color) = if countdown.is_running() {
            ("[ End ]", Color::Red)
        } else {
            ("[ Begin ]", Color::Green)
        };

        let control = Paragraph::new(label)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(control, area);
    }

    fn render_toast(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines = match &self.toast {
            Some(toast) => vec![Line::from(Span::styled(
                toast.message,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))],
            None => vec![Line::from("")],
        };

        let toast = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(toast, area);
    }

    fn render_scores(&self, f: &mut Frame, area: ratatui::layout::Rect, scores: &ScoreBoard) {
        let rows: Vec<Row> = if scores.is_empty() {
            vec![Row::new(vec![
                String::from("-"),
                String::from("No scores yet"),
                String::new(),
            ])]
        } else {
            scores
                .top(3)
                .iter()
                .enumerate()
                .map(|(rank, entry)| {
                    Row::new(vec![
                        format!("{}.", rank + 1),
                        format_score(entry.value),
                        entry.recorded_at.format("%H:%M:%S").to_string(),
                    ])
                })
                .collect()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(16),
                Constraint::Min(10),
            ],
        )
        .block(
            Block::default()
                .title("High Scores")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(2);

        f.render_widget(table, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect, countdown: &Countdown) {
        let action = if countdown.is_running() {
            " Stop the clock  "
        } else {
            " Start the clock  "
        };

        let help_text = vec![Line::from(vec![
            Span::styled(
                "Enter/Space",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_toast_shows_and_replaces() {
        let mut screen = TimerScreen::new();
        assert!(!screen.toast_visible());

        screen.show_toast("New baseline established!");
        assert!(screen.toast_visible());

        screen.show_toast("Wow, new high score!");
        assert_eq!(
            screen.toast.as_ref().map(|t| t.message),
            Some("Wow, new high score!")
        );
    }

    #[test]
    fn test_fresh_toast_survives_expiry_pass() {
        let mut screen = TimerScreen::new();
        screen.show_toast("New baseline established!");
        screen.expire_toast();
        assert!(screen.toast_visible());
    }

    #[test]
    fn test_stale_toast_is_dropped() {
        let mut screen = TimerScreen::new();
        let backdated = Instant::now()
            .checked_sub(TOAST_DURATION + Duration::from_secs(1))
            .expect("clock has been up long enough");
        screen.toast = Some(Toast {
            message: "New baseline established!",
            shown_at: backdated,
        });
        screen.expire_toast();
        assert!(!screen.toast_visible());
    }
}
