//! Remote-call client for the proposal backend.
//!
//! Every call goes to one configured web-app endpoint and comes back wrapped
//! in the `{success, data, message}` envelope. The client unwraps the
//! envelope and hands `data` to the caller untouched.
//!
//! ERROR HANDLING
//! ==============
//! Failures are terminal and typed (see [`ApiError`]). Nothing is retried or
//! deduplicated; that is the backend's concern. An unconfigured endpoint
//! fails before the transport is touched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde_json::{Map, Value};

use super::error::ApiError;
use super::observe::{CallEvent, CallObserver, default_observer};
use super::transport::{HttpRequest, Transport};
use super::types::{Envelope, LikeTarget, Method, Proposal, Request, query_url, request_body};
use crate::config::ClientConfig;

/// Client for the proposal backend.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn CallObserver>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client over an explicit transport, reporting to the default
    /// observer.
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport, observer: default_observer() }
    }

    /// Replace the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[cfg(feature = "native")]
    pub fn native(config: ClientConfig) -> Result<Self, super::transport::TransportFailure> {
        let transport = super::transport::ReqwestTransport::new()?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Client backed by browser `fetch`.
    #[cfg(feature = "hydrate")]
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(super::transport::GlooTransport))
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// POST `{action, ...fields}` as `text/plain` and return the envelope's `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on an unconfigured endpoint, network failure,
    /// non-2xx status, malformed body, or `success: false`.
    pub async fn post(&self, action: &str, fields: Map<String, Value>) -> Result<Value, ApiError> {
        let Some(endpoint) = self.config.configured_endpoint() else {
            return Err(self.fail(action, ApiError::Configuration));
        };
        let body = request_body(action, fields);
        self.execute(action, HttpRequest::post_text(endpoint.to_owned(), body))
            .await
    }

    /// GET `?action=<action>` and return the envelope's `data`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::post`].
    pub async fn get(&self, action: &str) -> Result<Value, ApiError> {
        let Some(endpoint) = self.config.configured_endpoint() else {
            return Err(self.fail(action, ApiError::Configuration));
        };
        self.execute(action, HttpRequest::get(query_url(endpoint, action)))
            .await
    }

    /// Dispatch a typed request with its action's method and fields.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::post`].
    pub async fn call(&self, request: &Request) -> Result<Value, ApiError> {
        match request.method() {
            Method::Post => self.post(request.action(), request.fields()).await,
            Method::Get => self.get(request.action()).await,
        }
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Submit a new proposal (`addProposal`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn submit_proposal(&self, proposal: &Proposal) -> Result<Value, ApiError> {
        self.call(&Request::AddProposal(proposal.clone())).await
    }

    /// Fetch every proposal (`getProposals`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`]. Also returns [`ApiError::MalformedResponse`]
    /// if `data` is not a list of objects.
    pub async fn list_proposals(&self) -> Result<Vec<Proposal>, ApiError> {
        let data = self.call(&Request::GetProposals).await?;
        serde_json::from_value(data).map_err(|e| ApiError::MalformedResponse(format!("proposal list: {e}")))
    }

    /// Like a proposal on behalf of `user_id` (`addLike`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn add_reaction(&self, proposal_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.call(&Request::AddLike(LikeTarget::new(proposal_id, user_id)))
            .await
    }

    /// Withdraw a like (`removeLike`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn remove_reaction(&self, proposal_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.call(&Request::RemoveLike(LikeTarget::new(proposal_id, user_id)))
            .await
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    async fn execute(&self, action: &str, request: HttpRequest) -> Result<Value, ApiError> {
        self.observer.on_event(&CallEvent::Request {
            action: action.to_owned(),
            method: request.method,
            url: request.url.clone(),
            payload: request.body.clone(),
        });
        self.round_trip(action, request)
            .await
            .map_err(|err| self.fail(action, err))
    }

    async fn round_trip(&self, action: &str, request: HttpRequest) -> Result<Value, ApiError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network { endpoint: self.config.endpoint().to_owned(), reason: e.to_string() })?;

        self.observer
            .on_event(&CallEvent::Status { action: action.to_owned(), status: response.status });
        self.observer
            .on_event(&CallEvent::Body { action: action.to_owned(), body: response.body.clone() });

        if !response.is_success() {
            return Err(ApiError::Transport { status: response.status, body: response.body });
        }
        Envelope::parse(&response.body)?.into_data()
    }

    fn fail(&self, action: &str, err: ApiError) -> ApiError {
        self.observer.on_event(&CallEvent::Failed {
            action: action.to_owned(),
            code: err.error_code(),
            message: err.to_string(),
            endpoint: self.config.endpoint().to_owned(),
        });
        err
    }
}
