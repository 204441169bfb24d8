//! Periodic unread-count polling behind a watch channel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::notification::domain::BadgeState;
use crate::notification::ports::NotificationFeed;

/// Delay between unread-count fetches once polling has started.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Polls the notification feed and publishes [`BadgeState`] to subscribers.
///
/// `start` fetches immediately and then on every [`POLL_INTERVAL`] tick. Each
/// tick runs its fetch in its own task, so a slow response never blocks or
/// reorders later ticks. `stop` and `Drop` cancel the schedule. Tasks are
/// spawned onto the ambient tokio runtime.
#[derive(Debug)]
pub struct NotificationPoller<F> {
    feed: Arc<F>,
    state: watch::Sender<BadgeState>,
    running: Mutex<Option<CancellationToken>>,
}

impl<F> NotificationPoller<F> {
    /// Creates a poller over the given feed. Polling starts on [`Self::start`].
    #[must_use]
    pub fn new(feed: Arc<F>) -> Self {
        let (state, _) = watch::channel(BadgeState::default());
        Self {
            feed,
            state,
            running: Mutex::new(None),
        }
    }

    /// Returns a receiver observing every published badge state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BadgeState> {
        self.state.subscribe()
    }

    /// Stops the polling schedule. Safe to call when not running; `start` may
    /// be called again afterwards.
    pub fn stop(&self) {
        let stopped = {
            let mut running = self.running.lock().unwrap_or_else(|err| err.into_inner());
            running.take()
        };
        if let Some(token) = stopped {
            token.cancel();
        }
    }

    /// Clears the attention animation without touching the backend.
    pub fn acknowledge(&self) {
        self.state.send_modify(|badge| *badge = badge.acknowledged());
    }
}

impl<F> NotificationPoller<F>
where
    F: NotificationFeed + 'static,
{
    /// Starts polling: one immediate fetch, then one per [`POLL_INTERVAL`].
    /// A no-op while already running.
    pub fn start(&self) {
        let mut running = self.running.lock().unwrap_or_else(|err| err.into_inner());
        if running.is_some() {
            return;
        }
        let token = CancellationToken::new();
        *running = Some(token.clone());

        let feed = Arc::clone(&self.feed);
        let state = self.state.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            loop {
                tokio::select! {
                    // A cancelled poller must not fire another fetch, even
                    // when a tick is due at the same instant.
                    biased;
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        spawn_fetch(Arc::clone(&feed), state.clone());
                    }
                }
            }
        });
    }

    /// Clears the attention animation and fires one mark-read request without
    /// waiting for the response.
    pub fn mark_read(&self) {
        self.acknowledge();
        let feed = Arc::clone(&self.feed);
        tokio::spawn(async move {
            if let Err(error) = feed.mark_read().await {
                tracing::debug!(error = %error, "mark-read request failed");
            }
        });
    }
}

impl<F> Drop for NotificationPoller<F> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_fetch<F>(feed: Arc<F>, state: watch::Sender<BadgeState>)
where
    F: NotificationFeed + 'static,
{
    tokio::spawn(async move {
        match feed.unread_count().await {
            Ok(count) => {
                state.send_replace(BadgeState::with_count(count));
            }
            // The badge keeps its last published state.
            Err(error) => tracing::debug!(error = %error, "unread-count fetch failed"),
        }
    });
}
