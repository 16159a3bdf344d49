//! HTTP utilities shared by the async and blocking senders
//!
//! Client construction and the interpretation of Bot API responses live here
//! so both sender flavors treat every response the same way.

use crate::error::SendError;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Default Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Default timeout for a single send call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout applied by the default clients
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of characters of an error body kept in `SendError::Status`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Creates the async HTTP client used when none is supplied.
///
/// Per-call timeouts are set on each request, so only the connect phase is
/// bounded here.
#[must_use]
pub fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        // Client::new() panics on the same TLS backend failure that fails build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Blocking counterpart of [`create_http_client`].
#[must_use]
pub fn create_blocking_http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        // Client::new() panics on the same TLS backend failure that fails build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new())
}

/// Builds `<api_url>/bot<token>/<method>`.
#[must_use]
pub fn endpoint_url(api_url: &str, token: &str, method: &str) -> String {
    format!("{}/bot{token}/{method}", api_url.trim_end_matches('/'))
}

/// Turns a Bot API response into the value of its `result` field.
///
/// The status code is only consulted once it is clear the body carries no
/// `result`: a JSON body with `result` is a success whatever the status.
///
/// # Errors
///
/// - `SendError::Status` if a non-success body is not JSON, or is JSON that
///   is neither a result nor an `ok: false` envelope
/// - `SendError::Json` if a success body is not JSON
/// - `SendError::Api` for `ok: false` envelopes
/// - `SendError::MissingResult` for any other body without `result`
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value, SendError> {
    let mut envelope: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(SendError::Status {
                status,
                body: clean_error_body(body),
            });
        }
        Err(e) => return Err(SendError::Json(e)),
    };

    if let Some(result) = envelope.get_mut("result") {
        return Ok(result.take());
    }

    if envelope.get("ok").and_then(Value::as_bool) == Some(false) {
        return Err(SendError::Api {
            error_code: envelope.get("error_code").and_then(Value::as_i64),
            description: envelope
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description")
                .to_string(),
        });
    }

    if !status.is_success() {
        return Err(SendError::Status {
            status,
            body: clean_error_body(body),
        });
    }

    Err(SendError::MissingResult)
}

/// Shortens an error body for inclusion in an error message.
fn clean_error_body(body: &str) -> String {
    let trimmed = body.trim_start();

    // Proxies in front of the API answer with HTML error pages
    let is_html = trimmed.starts_with("<!DOCTYPE")
        || trimmed.starts_with("<html")
        || trimmed.starts_with("<HTML");
    if is_html {
        return "server returned an HTML error page".to_string();
    }

    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{truncated}... (truncated)")
    } else {
        body.to_string()
    }
}
