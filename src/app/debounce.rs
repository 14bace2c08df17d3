use super::action::Action;
use std::time::Duration;
use tokio::sync::mpsc;

/// Trailing-edge debounce: only the last action scheduled within `delay`
/// is delivered, `delay` after it was scheduled.
#[derive(Debug, Clone)]
pub struct Debouncer {
    tx: mpsc::UnboundedSender<Action>,
}

impl Debouncer {
    /// Spawns the timer task. Must be called from within a tokio runtime.
    pub fn spawn(delay: Duration, out: mpsc::Sender<Action>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

        tokio::spawn(async move {
            let mut pending: Option<Action> = None;
            loop {
                if let Some(action) = pending.take() {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(next) => pending = Some(next),
                            None => break,
                        },
                        () = tokio::time::sleep(delay) => {
                            if out.send(action).await.is_err() {
                                break;
                            }
                        }
                    }
                } else if let Some(next) = rx.recv().await {
                    pending = Some(next);
                } else {
                    break;
                }
            }
        });

        Self { tx }
    }

    pub fn schedule(&self, action: Action) {
        if self.tx.send(action).is_err() {
            tracing::debug!("debounce task has stopped");
        }
    }
}

/// One debouncer per input group, so ticker typing never delays a news
/// search and vice versa.
#[derive(Debug, Clone)]
pub struct Timers {
    pub ticker: Debouncer,
    pub news: Debouncer,
}

impl Timers {
    pub fn spawn(ticker_delay: Duration, news_delay: Duration, out: mpsc::Sender<Action>) -> Self {
        Self {
            ticker: Debouncer::spawn(ticker_delay, out.clone()),
            news: Debouncer::spawn(news_delay, out),
        }
    }
}
