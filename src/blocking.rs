//! Blocking Bot API sender.
//!
//! Same operations as [`crate::BotSender`], but each call blocks the current
//! thread until the response arrives or the timeout elapses. Must not be used
//! from inside an async runtime.

use crate::config::Settings;
use crate::endpoint::BotEndpoint;
use crate::error::SendError;
use crate::http::{create_blocking_http_client, interpret_response};
use crate::payload::{media_group_form, text_message_form, Form};
use crate::sender::collapse;
use crate::types::{ApiMethod, MediaItem, MessageEntity};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking variant of [`crate::BotSender`].
///
/// # Examples
///
/// ```no_run
/// use telegram_bot_sender::blocking::BotSender;
///
/// let sender = BotSender::new("123456:TOKEN");
/// if let Some(message) = sender.send_text_or_none(42, Some("Hello!"), None, None) {
///     println!("sent {}", message["message_id"]);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BotSender {
    http: reqwest::blocking::Client,
    endpoint: BotEndpoint,
}

impl BotSender {
    /// Creates a sender with a default HTTP client.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(create_blocking_http_client(), token)
    }

    /// Creates a sender on top of an existing HTTP client.
    pub fn with_client(http: reqwest::blocking::Client, token: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: BotEndpoint::new(token.into()),
        }
    }

    /// Creates a sender from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.telegram_token.clone())
            .with_api_url(settings.telegram_api_url.clone())
            .with_default_timeout(settings.http_timeout())
    }

    /// Points the sender at another Bot API server.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.endpoint.set_api_url(api_url.into());
        self
    }

    /// Sets the timeout used when a call does not pass one.
    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.set_default_timeout(timeout);
        self
    }

    /// Full URL of a Bot API method. Contains the token.
    #[must_use]
    pub fn endpoint(&self, method: ApiMethod) -> String {
        self.endpoint.url(method)
    }

    /// See [`crate::BotSender::send_text`].
    ///
    /// # Errors
    ///
    /// Returns a `SendError` if the request fails or the response carries no
    /// `result`.
    pub fn send_text(
        &self,
        chat_id: i64,
        text: Option<&str>,
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Result<Option<Value>, SendError> {
        let Some(form) = text_message_form(chat_id, text, entities)? else {
            debug!(chat_id, "No text to send, skipping sendMessage");
            return Ok(None);
        };

        self.post_form(ApiMethod::SendMessage, chat_id, &form, timeout)
            .map(Some)
    }

    /// Like [`Self::send_text`], but any failure yields `None`.
    pub fn send_text_or_none(
        &self,
        chat_id: i64,
        text: Option<&str>,
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Option<Value> {
        collapse(self.send_text(chat_id, text, entities, timeout))
    }

    /// See [`crate::BotSender::send_media_group`].
    ///
    /// # Errors
    ///
    /// Returns a `SendError` if the request fails or the response carries no
    /// `result`.
    pub fn send_media_group(
        &self,
        chat_id: i64,
        text: Option<&str>,
        media: &[MediaItem],
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Result<Option<Value>, SendError> {
        let Some(form) = media_group_form(chat_id, text, media, entities)? else {
            debug!(
                chat_id,
                media_count = media.len(),
                "No caption or media to send, skipping sendMediaGroup"
            );
            return Ok(None);
        };

        self.post_form(ApiMethod::SendMediaGroup, chat_id, &form, timeout)
            .map(Some)
    }

    /// Like [`Self::send_media_group`], but any failure yields `None`.
    pub fn send_media_group_or_none(
        &self,
        chat_id: i64,
        text: Option<&str>,
        media: &[MediaItem],
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Option<Value> {
        collapse(self.send_media_group(chat_id, text, media, entities, timeout))
    }

    fn post_form(
        &self,
        method: ApiMethod,
        chat_id: i64,
        form: &Form,
        timeout: Option<Duration>,
    ) -> Result<Value, SendError> {
        debug!(
            %method,
            chat_id,
            endpoint = %self.endpoint.redacted_url(method),
            "Sending Bot API request"
        );

        let outcome = self.round_trip(method, form, self.endpoint.timeout(timeout));

        match &outcome {
            Ok(_) => debug!(%method, chat_id, "Bot API request succeeded"),
            Err(e) => warn!(
                %method,
                chat_id,
                error = %self.endpoint.redact(&e.to_string()),
                "Bot API request failed"
            ),
        }
        outcome
    }

    fn round_trip(
        &self,
        method: ApiMethod,
        form: &Form,
        timeout: Duration,
    ) -> Result<Value, SendError> {
        let response = self
            .http
            .post(self.endpoint.url(method))
            .form(form)
            .timeout(timeout)
            .send()
            .map_err(SendError::from_transport)?;

        let status = response.status();
        let body = response.text().map_err(SendError::from_transport)?;
        interpret_response(status, &body)
    }
}
