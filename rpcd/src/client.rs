//! Transport-generic API client.

use crate::{
    classify, ApiError, Command, DisplayLayouts, Endpoint, LayoutCatalog, Method, RawReply,
    StartCommand, Status,
};
use futures_util::future::join;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Upper bound for one exchange. Transports report a request that takes
/// longer as unreachable. Shorter than [`crate::POLL_INTERVAL`], so a hung
/// status request is over before the next poll is due.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Carries one HTTP exchange.
///
/// Implementations never fail: a request that does not reach the server, or
/// does not complete within [`REQUEST_TIMEOUT`], comes back as
/// [`RawReply::unreachable`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> RawReply;

    /// Whether requests originate from an HTTPS context.
    fn secure_origin(&self) -> bool {
        false
    }
}

/// rpcd API client over a [`Transport`].
pub struct Api<T> {
    transport: T,
    base: String,
    reachable: AtomicBool,
}

/// Outcome of the concurrent initial fetch. Either half may have failed.
#[derive(Debug)]
pub struct Bootstrap {
    pub layouts: Result<Vec<DisplayLayouts>, ApiError>,
    pub commands: Result<Vec<Command>, ApiError>,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
            reachable: AtomicBool::new(true),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// False after a request failed to reach the server, true again after
    /// the next successful one.
    pub fn reachable(&self) -> bool {
        self.reachable.load(Ordering::Relaxed)
    }

    async fn call<R: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<String>) -> Result<R, ApiError> {
        let url = endpoint.url(&self.base);
        let method = endpoint.method();
        log::debug!("Request: {} {} {}", method, url, body.as_deref().unwrap_or(""));

        let reply = self.transport.send(method, &url, body).await;
        match reply.status {
            0 => self.reachable.store(false, Ordering::Relaxed),
            200 => self.reachable.store(true, Ordering::Relaxed),
            _ => {}
        }
        classify(&reply, self.transport.secure_origin())
    }

    async fn call_unit(&self, endpoint: Endpoint, body: Option<String>) -> Result<(), ApiError> {
        self.call::<IgnoredAny>(endpoint, body).await.map(|_| ())
    }

    pub async fn layouts(&self) -> Result<Vec<DisplayLayouts>, ApiError> {
        self.call::<LayoutCatalog>(Endpoint::Layouts, None)
            .await
            .map(LayoutCatalog::into_displays)
    }

    pub async fn commands(&self) -> Result<Vec<Command>, ApiError> {
        self.call(Endpoint::Commands, None).await
    }

    pub async fn status(&self) -> Result<Status, ApiError> {
        self.call(Endpoint::Status, None).await
    }

    pub async fn apply_layout(&self, display: Option<&str>, name: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::ApplyLayout {
            display: display.map(str::to_string),
            name: name.to_string(),
        };
        self.call_unit(endpoint, None).await
    }

    pub async fn start_command(&self, name: &str, request: &StartCommand) -> Result<(), ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.call_unit(Endpoint::StartCommand { name: name.to_string() }, Some(body))
            .await
    }

    pub async fn stop_command(&self, name: &str) -> Result<(), ApiError> {
        self.call_unit(Endpoint::StopCommand { name: name.to_string() }, None)
            .await
    }

    pub async fn move_command(&self, command: &str, frame: u32) -> Result<(), ApiError> {
        let endpoint = Endpoint::MoveCommand {
            command: command.to_string(),
            frame,
        };
        self.call_unit(endpoint, None).await
    }

    pub async fn reset(&self) -> Result<(), ApiError> {
        self.call_unit(Endpoint::Reset, None).await
    }

    /// Fetch layouts and commands concurrently and wait for both.
    pub async fn bootstrap(&self) -> Bootstrap {
        let (layouts, commands) = join(self.layouts(), self.commands()).await;
        Bootstrap { layouts, commands }
    }
}
