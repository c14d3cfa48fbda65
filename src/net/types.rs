//! Wire DTOs for the proposal backend.
//!
//! DESIGN
//! ======
//! Requests are a tagged union keyed by action name so each action carries
//! its own field shape and HTTP method. Proposals stay opaque JSON objects:
//! the backend owns their schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ApiError, FALLBACK_FAILURE_MESSAGE};

/// Request envelope field naming the backend operation.
pub const ACTION_FIELD: &str = "action";

/// HTTP method used for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A proposal as the backend stores it. Fields pass through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proposal(Map<String, Value>);

impl Proposal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insert.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Backend-assigned identifier, when present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Proposal {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Target of a like/unlike reaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeTarget {
    pub proposal_id: String,
    pub user_id: String,
}

impl LikeTarget {
    pub fn new(proposal_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self { proposal_id: proposal_id.into(), user_id: user_id.into() }
    }
}

/// Every backend operation the client knows about.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    /// `addProposal`: submit a new proposal.
    AddProposal(Proposal),
    /// `getProposals`: list all proposals.
    GetProposals,
    /// `addLike`: react to a proposal.
    AddLike(LikeTarget),
    /// `removeLike`: withdraw a reaction.
    RemoveLike(LikeTarget),
}

impl Request {
    /// Action name sent to the backend.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::AddProposal(_) => "addProposal",
            Self::GetProposals => "getProposals",
            Self::AddLike(_) => "addLike",
            Self::RemoveLike(_) => "removeLike",
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::GetProposals => Method::Get,
            Self::AddProposal(_) | Self::AddLike(_) | Self::RemoveLike(_) => Method::Post,
        }
    }

    /// Fields merged into the request envelope beside `action`.
    #[must_use]
    pub fn fields(&self) -> Map<String, Value> {
        match self {
            Self::AddProposal(proposal) => proposal.fields().clone(),
            Self::GetProposals => Map::new(),
            Self::AddLike(target) | Self::RemoveLike(target) => like_fields(target),
        }
    }
}

fn like_fields(target: &LikeTarget) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("proposalId".to_owned(), Value::String(target.proposal_id.clone()));
    fields.insert("userId".to_owned(), Value::String(target.user_id.clone()));
    fields
}

/// Serialize `{action, ...fields}`. The action tag overrides any field of
/// the same name.
#[must_use]
pub fn request_body(action: &str, fields: Map<String, Value>) -> String {
    let mut envelope = Map::with_capacity(fields.len() + 1);
    envelope.insert(ACTION_FIELD.to_owned(), Value::String(action.to_owned()));
    for (key, value) in fields {
        if key != ACTION_FIELD {
            envelope.insert(key, value);
        }
    }
    Value::Object(envelope).to_string()
}

/// Append `action=<name>` to `endpoint`, respecting an existing query string.
/// The action is percent-encoded.
#[must_use]
pub fn query_url(endpoint: &str, action: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}{ACTION_FIELD}={}", encode_query_component(action))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Uniform `{success, data, message}` response wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    /// Usually a string, but backends sometimes send other JSON here.
    #[serde(default)]
    pub message: Option<Value>,
}

impl Envelope {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedResponse`] if `body` is not an envelope.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Unwrap to `data`, or the backend's failure message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Application`] when `success` is `false`.
    pub fn into_data(self) -> Result<Value, ApiError> {
        if self.success {
            return Ok(self.data);
        }
        let message = match self.message {
            Some(Value::String(text)) if !text.is_empty() => text,
            None | Some(Value::Null | Value::String(_)) => FALLBACK_FAILURE_MESSAGE.to_owned(),
            Some(other) => other.to_string(),
        };
        Err(ApiError::Application(message))
    }
}
