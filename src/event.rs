//! Host event sources.
//!
//! Both apps consume the same stream: terminal input forwarded from a
//! crossterm `EventStream` task and a periodic tick that drives the
//! status-bar clock. Events are delivered over an unbounded channel and
//! handled to completion, one at a time, on the main task.

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Periodic UI refresh
    Tick,
}

/// Spawn the terminal reader and tick tasks. Both exit once the receiving
/// side of `tx` is dropped.
pub fn spawn_event_sources(tx: UnboundedSender<AppEvent>, tick_rate_ms: u64) {
    let term_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) | None => break,
            }
        }
    });

    tokio::spawn(async move {
        let period = std::time::Duration::from_millis(tick_rate_ms.max(1));
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}
