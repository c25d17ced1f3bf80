//! Integration tests for the countdown and scoring flow

use tickdown::score::{ScoreBoard, ScoreEvent};
use tickdown::timer::ticker::Ticker;
use tickdown::timer::{Countdown, Phase, TickOutcome};

#[test]
fn test_immediate_end_then_worse_run() {
    let mut countdown = Countdown::new();
    let mut board = ScoreBoard::new();

    // End immediately: 60.00 left, first score becomes the baseline
    countdown.begin();
    let score = countdown.end().unwrap();
    assert_eq!(board.record(score), vec![ScoreEvent::Baseline(60.0)]);
    assert_eq!(board.best(), Some(60.0));

    // Second run stops at 55.0: below the baseline, silent and unrecorded
    countdown.begin();
    for _ in 0..50 {
        countdown.apply_tick();
    }
    let score = countdown.end().unwrap();
    assert!((score - 55.0).abs() < 1e-6);
    assert!(board.record(score).is_empty());
    assert_eq!(board.best(), Some(60.0));
    assert_eq!(board.len(), 1);

    // Countdown is back at the start value either way
    assert_eq!(countdown.phase(), Phase::Idle);
    assert!((countdown.remaining_secs() - 60.0).abs() < 1e-9);
}

#[test]
fn test_improving_runs_raise_the_bar() {
    let mut countdown = Countdown::new();
    let mut board = ScoreBoard::new();

    // First run stops late, leaving little time on the clock
    countdown.begin();
    for _ in 0..400 {
        countdown.apply_tick();
    }
    let low = countdown.end().unwrap();
    assert_eq!(board.record(low), vec![ScoreEvent::Baseline(low)]);

    // Second run stops earlier and beats it
    countdown.begin();
    for _ in 0..100 {
        countdown.apply_tick();
    }
    let high = countdown.end().unwrap();
    assert!(high > low);
    assert_eq!(board.record(high), vec![ScoreEvent::HighScore(high)]);
    assert_eq!(board.best(), Some(high));
    assert_eq!(board.len(), 2);
}

#[test]
fn test_expiry_records_nothing() {
    let mut countdown = Countdown::new();
    let mut board = ScoreBoard::new();

    countdown.begin();
    let mut outcome = countdown.apply_tick();
    while outcome != TickOutcome::Expired {
        outcome = countdown.apply_tick();
    }

    // The clock reset itself; there is no score to check
    assert_eq!(countdown.phase(), Phase::Idle);
    assert!((countdown.remaining_secs() - 60.0).abs() < 1e-9);
    assert!(board.is_empty());
    assert_eq!(countdown.end(), None);
    assert!(board.is_empty());
}

#[tokio::test]
async fn test_ticker_drives_the_countdown() {
    let mut countdown = Countdown::new();
    countdown.begin();

    let (ticker, mut tick_rx) = Ticker::spawn();
    for _ in 0..3 {
        tick_rx.recv().await.expect("ticker is live");
        assert_eq!(countdown.apply_tick(), TickOutcome::Decremented);
    }
    ticker.cancel();
    drop(tick_rx);

    let score = countdown.end().unwrap();
    assert!((score - 59.7).abs() < 1e-6);

    // A tick delivered after End must not disturb the reset state
    assert_eq!(countdown.apply_tick(), TickOutcome::Ignored);
    assert!((countdown.remaining_secs() - 60.0).abs() < 1e-9);
}
