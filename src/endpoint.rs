//! Bot API address and call defaults shared by both senders.

use crate::http::{endpoint_url, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::types::ApiMethod;
use crate::utils::{redact_token, REDACTED_TOKEN};
use std::fmt;
use std::time::Duration;

/// Token, base URL and default timeout of a sender.
///
/// The token only leaves this struct through [`BotEndpoint::url`].
#[derive(Clone)]
pub(crate) struct BotEndpoint {
    token: String,
    api_url: String,
    default_timeout: Duration,
}

impl BotEndpoint {
    pub(crate) fn new(token: String) -> Self {
        Self {
            token,
            api_url: DEFAULT_API_URL.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub(crate) fn set_api_url(&mut self, api_url: String) {
        self.api_url = api_url;
    }

    pub(crate) fn set_default_timeout(&mut self, timeout: Duration) {
        self.default_timeout = timeout;
    }

    /// Request URL of `method`. Contains the token, never log it.
    pub(crate) fn url(&self, method: ApiMethod) -> String {
        endpoint_url(&self.api_url, &self.token, method.as_str())
    }

    /// URL of `method` with the token replaced, for logs.
    pub(crate) fn redacted_url(&self, method: ApiMethod) -> String {
        endpoint_url(&self.api_url, REDACTED_TOKEN, method.as_str())
    }

    /// Strips the token from text headed for a log line.
    pub(crate) fn redact(&self, text: &str) -> String {
        redact_token(text, &self.token)
    }

    /// Timeout of a call, falling back to the default.
    pub(crate) fn timeout(&self, timeout: Option<Duration>) -> Duration {
        timeout.unwrap_or(self.default_timeout)
    }
}

impl fmt::Debug for BotEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotEndpoint")
            .field("token", &REDACTED_TOKEN)
            .field("api_url", &self.api_url)
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
