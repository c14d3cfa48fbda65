//! Error taxonomy for remote calls.
//!
//! Every failure is terminal for the call that produced it. The UI surfaces
//! [`ApiError::user_message`], which appends a checklist of likely causes
//! chosen by error kind.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt::Write as _;

/// Fallback text when the backend reports failure without a message.
pub const FALLBACK_FAILURE_MESSAGE: &str = "request failed";

const HTTP_STATUS_CAUSES: &[&str] = &[
    "the web app deployment URL is wrong",
    "the web app is not shared with \"Anyone\"",
    "the spreadsheet ID is not set in the backend",
];

const NETWORK_CAUSES: &[&str] = &[
    "the endpoint URL is not configured correctly",
    "the backend is not deployed as a web app",
    "the internet connection is down",
];

/// Errors produced by [`ApiClient`](super::api::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint is blank or still the placeholder.
    #[error(
        "endpoint URL is not configured.\n\nSet SSAP_ENDPOINT_URL to the web app deployment URL and rebuild."
    )]
    Configuration,

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16, body: String },

    /// The request never produced an HTTP response.
    #[error("network request failed: {reason}")]
    Network { endpoint: String, reason: String },

    /// The body was not a response envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The envelope reported `success: false`.
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration => "E_CONFIGURATION",
            Self::Transport { .. } => "E_HTTP_STATUS",
            Self::Network { .. } => "E_NETWORK",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
            Self::Application(_) => "E_APPLICATION",
        }
    }

    /// Likely causes worth showing the user, if any.
    #[must_use]
    pub fn causes(&self) -> &'static [&'static str] {
        match self {
            Self::Transport { .. } => HTTP_STATUS_CAUSES,
            Self::Network { .. } => NETWORK_CAUSES,
            Self::Configuration | Self::MalformedResponse(_) | Self::Application(_) => &[],
        }
    }

    /// Message for a blocking alert: the error text plus a numbered
    /// checklist of likely causes.
    #[must_use]
    pub fn user_message(&self) -> String {
        let mut out = match self {
            Self::Network { .. } => "A network error occurred.".to_owned(),
            _ => self.to_string(),
        };
        let causes = self.causes();
        if !causes.is_empty() {
            out.push_str("\n\nPossible causes:");
            for (i, cause) in causes.iter().enumerate() {
                let _ = write!(out, "\n{}. {cause}", i + 1);
            }
        }
        if let Self::Network { endpoint, reason } = self {
            let _ = write!(out, "\n\nConfigured URL: {endpoint}\nDetails: {reason}");
        }
        out
    }
}
