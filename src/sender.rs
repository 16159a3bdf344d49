//! Async Bot API sender.

use crate::config::Settings;
use crate::endpoint::BotEndpoint;
use crate::error::SendError;
use crate::http::{create_http_client, interpret_response};
use crate::payload::{media_group_form, text_message_form, Form};
use crate::types::{ApiMethod, MediaItem, MessageEntity};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends messages to Telegram chats as a bot.
///
/// Holds the bot token and an HTTP client. Clones share the client's
/// connection pool. `Debug` output never shows the token.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> Result<(), telegram_bot_sender::SendError> {
/// use telegram_bot_sender::BotSender;
///
/// let sender = BotSender::new("123456:TOKEN");
/// let sent = sender.send_text(42, Some("Hello!"), None, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BotSender {
    http: reqwest::Client,
    endpoint: BotEndpoint,
}

impl BotSender {
    /// Creates a sender with a default HTTP client.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(create_http_client(), token)
    }

    /// Creates a sender on top of an existing HTTP client.
    pub fn with_client(http: reqwest::Client, token: impl Into<String>) -> Self {
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

    /// Send a text message to a chat.
    ///
    /// Link previews are disabled. Returns `Ok(None)` without touching the
    /// network when `text` is `None`.
    ///
    /// # Arguments
    ///
    /// * `chat_id` - Target chat ID
    /// * `text` - Message text
    /// * `entities` - Formatting entities of the text
    /// * `timeout` - Bound on the whole call, the sender's default if `None`
    ///
    /// # Errors
    ///
    /// Returns a `SendError` if the request fails or the response carries no
    /// `result`.
    pub async fn send_text(
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
            .await
            .map(Some)
    }

    /// Like [`Self::send_text`], but any failure yields `None`.
    pub async fn send_text_or_none(
        &self,
        chat_id: i64,
        text: Option<&str>,
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Option<Value> {
        collapse(self.send_text(chat_id, text, entities, timeout).await)
    }

    /// Send a group of media items, captioned by `text`.
    ///
    /// The caption and its entities are set on the first item. `media` itself
    /// is not modified. Returns `Ok(None)` without touching the network when
    /// `text` is `None` or `media` is empty.
    ///
    /// # Errors
    ///
    /// Returns a `SendError` if the request fails or the response carries no
    /// `result`.
    pub async fn send_media_group(
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
            .await
            .map(Some)
    }

    /// Like [`Self::send_media_group`], but any failure yields `None`.
    pub async fn send_media_group_or_none(
        &self,
        chat_id: i64,
        text: Option<&str>,
        media: &[MediaItem],
        entities: Option<&[MessageEntity]>,
        timeout: Option<Duration>,
    ) -> Option<Value> {
        collapse(
            self.send_media_group(chat_id, text, media, entities, timeout)
                .await,
        )
    }

    async fn post_form(
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

        let outcome = self
            .round_trip(method, form, self.endpoint.timeout(timeout))
            .await;

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

    async fn round_trip(
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
            .await
            .map_err(SendError::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SendError::from_transport)?;
        interpret_response(status, &body)
    }
}

/// Drops the error and the difference between "skipped" and a `null` result.
pub(crate) fn collapse(outcome: Result<Option<Value>, SendError>) -> Option<Value> {
    outcome.ok().flatten().filter(|value| !value.is_null())
}
