//! Periodic status polling for `rpcd-cli watch`.

use rpcd::{Api, ApiError, Status, Transport, REQUEST_TIMEOUT};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::time::{interval, timeout, MissedTickBehavior};

/// Anything that can produce a status snapshot.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn fetch_status(&self) -> Result<Status, ApiError>;
}

impl<T: Transport> StatusSource for Api<T> {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        self.status().await
    }
}

impl<S: StatusSource> StatusSource for &S {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        (**self).fetch_status().await
    }
}

/// Fetches the status on a fixed interval. A failed poll is handed to the
/// callback like a successful one and the next tick proceeds normally.
///
/// Polls run one after another, so they never overlap. A fetch that does
/// not finish within the fetch timeout counts as unreachable.
pub struct StatusPoller<S> {
    source: S,
    period: Duration,
    fetch_timeout: Duration,
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn new(source: S, period: Duration) -> Self {
        Self {
            source,
            period,
            fetch_timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Poll until `on_status` breaks. The first poll happens immediately.
    pub async fn run<F>(&mut self, mut on_status: F)
    where
        F: FnMut(Result<Status, ApiError>) -> ControlFlow<()>,
    {
        let mut ticker = interval(self.period);
        // Slow polls delay the next tick
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let result = match timeout(self.fetch_timeout, self.source.fetch_status()).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::debug!("Status poll timed out after {:?}", self.fetch_timeout);
                    Err(ApiError::Unreachable { secure_origin: false })
                }
            };

            if let Err(e) = &result {
                tracing::warn!("Failed to query status: {}", e);
            }
            if on_status(result).is_break() {
                return;
            }
        }
    }
}
