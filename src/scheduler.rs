//! Refresh scheduling for the dashboard.
//!
//! A single scheduler task owns the polling cadence: one retrieval on start,
//! one per interval while the terminal is visible, and one immediately on a
//! hidden-to-visible transition. Retrievals run as spawned tasks so a slow
//! response never blocks the next trigger; a monotonic sequence number keeps
//! overlapping retrievals from applying out of order (a stale completion is
//! dropped once a newer one has been forwarded).

use crate::fetch::{FetchError, SnapshotSource};
use crate::snapshot::StateSnapshot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Polling interval while the dashboard is visible.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// External inputs into the refresh flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Issue a retrieval now (keyboard refresh). Ignored while hidden.
    TriggerNow,
    /// Visibility transition; becoming visible issues one retrieval.
    SetVisible(bool),
    Stop,
}

/// Completion of one retrieval, tagged with its issue order.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub seq: u64,
    pub result: Result<StateSnapshot, FetchError>,
}

/// Controls a running [`RefreshScheduler`].
#[derive(Debug, Clone)]
pub struct SchedulerHandle {
    command_tx: mpsc::Sender<Command>,
}

impl SchedulerHandle {
    pub async fn trigger_now(&self) {
        let _ = self.command_tx.send(Command::TriggerNow).await;
    }

    pub async fn set_visible(&self, visible: bool) {
        let _ = self.command_tx.send(Command::SetVisible(visible)).await;
    }

    pub async fn stop(&self) {
        let _ = self.command_tx.send(Command::Stop).await;
    }
}

/// Single-flow polling loop driving a [`SnapshotSource`].
pub struct RefreshScheduler {
    source: Arc<dyn SnapshotSource>,
    interval: Duration,
    command_rx: mpsc::Receiver<Command>,
    outcome_tx: mpsc::Sender<RefreshOutcome>,
}

impl RefreshScheduler {
    /// Build a scheduler plus its control handle and outcome stream.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        interval: Duration,
    ) -> (Self, SchedulerHandle, mpsc::Receiver<RefreshOutcome>) {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (outcome_tx, outcome_rx) = mpsc::channel(16);
        (
            Self {
                source,
                interval,
                command_rx,
                outcome_tx,
            },
            SchedulerHandle { command_tx },
            outcome_rx,
        )
    }

    /// Run until [`Command::Stop`] or until both ends disconnect. The first
    /// interval tick fires immediately, which is the on-load retrieval.
    pub async fn run(mut self) {
        let (results_tx, mut results_rx) = mpsc::channel::<RefreshOutcome>(16);
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut next_seq: u64 = 0;
        let mut last_forwarded: u64 = 0;
        let mut visible = true;

        loop {
            tokio::select! {
                _ = ticker.tick(), if visible => {
                    Self::issue(&self.source, &results_tx, &mut next_seq);
                }
                command = self.command_rx.recv() => match command {
                    Some(Command::TriggerNow) => {
                        if visible {
                            Self::issue(&self.source, &results_tx, &mut next_seq);
                        }
                    }
                    Some(Command::SetVisible(now_visible)) => {
                        if now_visible && !visible {
                            // Re-arm the cadence and catch up once, not twice.
                            ticker.reset();
                            Self::issue(&self.source, &results_tx, &mut next_seq);
                        }
                        visible = now_visible;
                    }
                    Some(Command::Stop) | None => break,
                },
                Some(outcome) = results_rx.recv() => {
                    if outcome.seq > last_forwarded {
                        last_forwarded = outcome.seq;
                        if self.outcome_tx.send(outcome).await.is_err() {
                            break;
                        }
                    } else {
                        debug!(
                            seq = outcome.seq,
                            latest = last_forwarded,
                            "discarding stale retrieval result"
                        );
                    }
                }
            }
        }
        debug!("refresh scheduler stopped");
    }

    fn issue(
        source: &Arc<dyn SnapshotSource>,
        results_tx: &mpsc::Sender<RefreshOutcome>,
        next_seq: &mut u64,
    ) {
        *next_seq += 1;
        let seq = *next_seq;
        let source = Arc::clone(source);
        let results_tx = results_tx.clone();
        debug!(seq, "retrieval issued");
        tokio::spawn(async move {
            let result = source.fetch().await;
            if let Err(error) = &result {
                warn!(seq, %error, "retrieval failed");
            }
            let _ = results_tx.send(RefreshOutcome { seq, result }).await;
        });
    }
}
