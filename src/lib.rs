//! Minimal Telegram Bot API client for sending messages as a bot.
//!
//! Two operations are supported, sending a text message and sending a
//! captioned media group. Each performs at most one HTTP request and returns
//! the `result` field of the Bot API response.
//!
//! Every operation comes in two forms:
//! - `send_*` returns `Result<Option<Value>, SendError>`, where `Ok(None)`
//!   means there was nothing to send and no request was made
//! - `send_*_or_none` collapses every failure into `None`
//!
//! [`BotSender`] is async; [`blocking::BotSender`] blocks the calling thread.
//!
//! ```no_run
//! # async fn run() -> Result<(), telegram_bot_sender::SendError> {
//! use serde_json::json;
//! use telegram_bot_sender::BotSender;
//!
//! let sender = BotSender::new("123456:TOKEN");
//! let entities = [json!({"type": "bold", "offset": 0, "length": 5})];
//! sender.send_text(42, Some("Hello, world"), Some(&entities), None).await?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod config;
mod endpoint;
pub mod error;
pub mod http;
pub mod payload;
pub mod sender;
pub mod types;
pub mod utils;

pub use error::SendError;
pub use sender::BotSender;
pub use types::{ApiMethod, MediaItem, MessageEntity};
