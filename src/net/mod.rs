//! Networking for the proposal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the client, `types` the wire schema, `error` the failure
//! taxonomy, `transport` the HTTP seam, and `observe` the diagnostics seam.

pub mod api;
pub mod error;
pub mod observe;
pub mod transport;
pub mod types;
