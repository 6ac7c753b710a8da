//! Once-per-second deal countdown.

use dukaan_commerce::search::DealCountdown;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(1);

/// A running countdown. Dropping every receiver stops the task.
#[derive(Debug)]
pub struct CountdownTicker {
    receiver: watch::Receiver<DealCountdown>,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking down from `start` on the current runtime.
    pub fn spawn(start: DealCountdown) -> Self {
        let (sender, receiver) = watch::channel(start);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + TICK, TICK);
            let mut current = start;
            loop {
                interval.tick().await;
                current.tick();
                if sender.send(current).is_err() {
                    tracing::debug!("countdown has no listeners, stopping");
                    break;
                }
            }
        });
        Self { receiver, handle }
    }

    /// Latest value.
    pub fn current(&self) -> DealCountdown {
        *self.receiver.borrow()
    }

    /// Another handle onto the same countdown.
    pub fn subscribe(&self) -> watch::Receiver<DealCountdown> {
        self.receiver.clone()
    }

    /// Stop ticking.
    pub fn stop(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let ticker = CountdownTicker::spawn(DealCountdown::new(0, 0, 2));
        let mut rx = ticker.subscribe();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().to_string(), "00:00:01");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().to_string(), "00:00:00");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), DealCountdown::FULL);

        assert_eq!(ticker.current(), DealCountdown::FULL);
        ticker.stop();
    }
}
