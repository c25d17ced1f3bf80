//! Main application controller
//!
//! Owns the terminal, the countdown, the score board, and the tick
//! source, and runs the draw/input loop. All state mutation happens
//! here, on the loop; the tick task only delivers messages.

use std::io;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::{
    app::{
        screens::TimerScreen,
        state::{key_to_action, InputAction, SessionStats},
        tui::Tui,
    },
    score::ScoreBoard,
    timer::{ticker::Tick, ticker::Ticker, Countdown, TickOutcome},
    Result, TickdownError,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Countdown state machine
    countdown: Countdown,
    /// Session score board
    scores: ScoreBoard,
    /// Counters for the exit recap
    stats: SessionStats,
    /// Screen component
    screen: TimerScreen,
    /// Tick source, present only while the clock runs
    ticker: Option<Ticker>,
    /// Tick delivery channel, dropped together with the ticker
    tick_rx: Option<mpsc::Receiver<Tick>>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            countdown: Countdown::new(),
            scores: ScoreBoard::new(),
            stats: SessionStats::new(),
            screen: TimerScreen::new(),
            ticker: None,
            tick_rx: None,
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()
    }

    /// Put the terminal back the way we found it
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.apply_pending_ticks()?;
            self.screen.expire_toast();
            self.draw()?;
            self.handle_input()?;
        }
        self.stop_ticker();
        Ok(())
    }

    /// Session score board, for the exit recap
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Session counters, for the exit recap
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Draw the timer screen
    fn draw(&mut self) -> io::Result<()> {
        let screen = &mut self.screen;
        let countdown = &self.countdown;
        let scores = &self.scores;
        self.tui.draw(|f| screen.render(f, countdown, scores))
    }

    /// Apply every tick that arrived since the last iteration
    fn apply_pending_ticks(&mut self) -> Result<()> {
        let Some(tick_rx) = self.tick_rx.as_mut() else {
            return Ok(());
        };

        let mut expired = false;
        let mut disconnected = false;
        loop {
            match tick_rx.try_recv() {
                Ok(Tick) => {
                    if self.countdown.apply_tick() == TickOutcome::Expired {
                        expired = true;
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if expired {
            // Clock ran out: the countdown reset itself, no score
            self.stats.record_expiration();
            self.stop_ticker();
        } else if disconnected {
            if self.countdown.is_running() {
                return Err(TickdownError::TimerError(
                    "tick source stopped while the clock was running".to_string(),
                ));
            }
            self.tick_rx = None;
        }
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_input(&mut self) -> Result<()> {
        if let Some(key) = self.tui.poll_key()? {
            match key_to_action(key) {
                InputAction::Quit => self.should_quit = true,
                InputAction::Select => {
                    // One control is visible at a time, so Select is
                    // unambiguous: End while running, Begin while idle.
                    if self.countdown.is_running() {
                        self.end_run();
                    } else {
                        self.begin_run();
                    }
                }
                InputAction::None => {}
            }
        }
        Ok(())
    }

    /// Start the countdown and its tick source
    fn begin_run(&mut self) {
        if !self.countdown.begin() {
            return;
        }
        self.stats.record_attempt();
        let (ticker, tick_rx) = Ticker::spawn();
        self.ticker = Some(ticker);
        self.tick_rx = Some(tick_rx);
    }

    /// Stop the clock and run the scoring check.
    ///
    /// The tick source is cancelled and its channel dropped before the
    /// countdown is read and reset, so no tick can land in between.
    fn end_run(&mut self) {
        self.stop_ticker();
        if let Some(score) = self.countdown.end() {
            for event in self.scores.record(score) {
                self.screen.show_toast(event.message());
            }
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.tick_rx = None;
    }
}
