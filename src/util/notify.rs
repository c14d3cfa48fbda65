//! User-facing outcome notifications.
//!
//! Failures block with an alert; successes only log. Callers pass
//! [`ApiError::user_message`](crate::net::error::ApiError::user_message) for
//! failures so the alert carries the remediation checklist.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Alert body for a failure message.
#[must_use]
pub fn error_alert_text(message: &str) -> String {
    format!("❌ Error\n\n{message}")
}

/// Show a blocking error alert.
pub fn show_error(message: &str) {
    let text = error_alert_text(message);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tracing::error!(%text, "error alert");
    }
}

/// Report a success without interrupting the user.
pub fn show_success(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        leptos::logging::log!("Success: {message}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tracing::info!(%message, "success");
    }
}
