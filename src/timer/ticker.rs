//! Periodic tick source
//!
//! Implements the 100ms countdown cadence as an explicit tokio task with
//! a cancellation handle, streaming unit ticks over an mpsc channel to
//! the UI loop. The task never touches countdown state itself.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::TICK_INTERVAL;

/// One periodic firing of the countdown cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to a running tick task.
///
/// [`Ticker::cancel`] stops the task deterministically before its next
/// firing; the task also exits on its own once the receiver is gone.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl Ticker {
    /// Spawn the tick task, delivering ticks on the returned channel.
    ///
    /// The first tick fires immediately, matching the zero initial
    /// delay of the countdown. Delivery stops when the receiver is
    /// dropped or the ticker is cancelled.
    pub fn spawn() -> (Self, mpsc::Receiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::channel(16);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let mut cadence = interval(TICK_INTERVAL);
            // A delayed UI loop should not be hit with a burst of ticks
            cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    _ = cadence.tick() => {
                        if tick_tx.send(Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        (
            Self {
                handle,
                cancel_tx: Some(cancel_tx),
            },
            tick_rx,
        )
    }

    /// Stop the tick task before its next firing.
    ///
    /// The oneshot wins the select against the pending interval, and the
    /// abort covers a task parked inside channel send. Consumes the
    /// handle; a cancelled ticker cannot be restarted.
    pub fn cancel(mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        self.handle.abort();
    }
}
