//! # ssap-client
//!
//! Browser client for the SSAP proposal board. Talks to a spreadsheet-backed
//! web app through a single JSON envelope endpoint and keeps the page's
//! light/dark theme preference.
//!
//! The `native` feature (default) wires a `reqwest` transport; `hydrate`
//! builds the WASM bundle with `fetch` and DOM glue.

pub mod config;
pub mod net;
pub mod util;

pub use config::ClientConfig;
pub use net::api::ApiClient;
pub use net::error::ApiError;

/// WASM entry: install the panic hook and set up the theme toggle once the
/// DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    util::theme::init_on_ready();
}
