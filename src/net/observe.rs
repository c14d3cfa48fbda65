//! Call diagnostics.
//!
//! The backend is an opaque spreadsheet script, so every call reports what
//! it sent, where, and what came back. Observers are injected into
//! [`ApiClient`](super::api::ApiClient); tests record events instead of
//! scraping console output.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

use std::sync::Arc;

use super::types::Method;

/// One diagnostic event emitted during a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallEvent {
    /// Request is about to be sent.
    Request { action: String, method: Method, url: String, payload: Option<String> },
    /// Response status arrived.
    Status { action: String, status: u16 },
    /// Raw response body, before any parsing.
    Body { action: String, body: String },
    /// The call failed.
    Failed { action: String, code: &'static str, message: String, endpoint: String },
}

impl CallEvent {
    #[must_use]
    pub fn action(&self) -> &str {
        match self {
            Self::Request { action, .. }
            | Self::Status { action, .. }
            | Self::Body { action, .. }
            | Self::Failed { action, .. } => action,
        }
    }
}

/// Sink for [`CallEvent`]s.
pub trait CallObserver: Send + Sync {
    fn on_event(&self, event: &CallEvent);
}

/// Emits events as `tracing` records.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_event(&self, event: &CallEvent) {
        match event {
            CallEvent::Request { action, method, url, payload } => {
                tracing::debug!(%action, method = method.as_str(), %url, payload = payload.as_deref().unwrap_or(""), "api request");
            }
            CallEvent::Status { action, status } => {
                tracing::debug!(%action, status, "api response status");
            }
            CallEvent::Body { action, body } => {
                tracing::trace!(%action, %body, "api response body");
            }
            CallEvent::Failed { action, code, message, endpoint } => {
                tracing::warn!(%action, code, %message, %endpoint, "api call failed");
            }
        }
    }
}

/// Writes events to the browser console.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver;

#[cfg(feature = "hydrate")]
impl CallObserver for ConsoleObserver {
    fn on_event(&self, event: &CallEvent) {
        match event {
            CallEvent::Request { action, method, url, payload } => {
                leptos::logging::log!(
                    "api request: action={action} method={} url={url} payload={}",
                    method.as_str(),
                    payload.as_deref().unwrap_or("")
                );
            }
            CallEvent::Status { action, status } => {
                leptos::logging::log!("api response status: action={action} status={status}");
            }
            CallEvent::Body { action, body } => {
                leptos::logging::log!("api response body: action={action} body={body}");
            }
            CallEvent::Failed { action, code, message, endpoint } => {
                leptos::logging::error!("api call failed: action={action} code={code} url={endpoint} message={message}");
            }
        }
    }
}

/// Observer used when none is injected: the console in the browser,
/// `tracing` elsewhere.
#[must_use]
pub fn default_observer() -> Arc<dyn CallObserver> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(ConsoleObserver)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(TracingObserver)
    }
}
