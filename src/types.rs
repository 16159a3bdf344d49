//! Bot API records passed through by the sender.
//!
//! Entities and media items are defined by the Bot API, not by this crate,
//! so they are kept as plain JSON and forwarded as-is.

use serde_json::{Map, Value};
use std::fmt;

/// A formatting span inside message text.
///
/// See <https://core.telegram.org/bots/api#messageentity>.
pub type MessageEntity = Value;

/// One attachment of a media group.
///
/// See <https://core.telegram.org/bots/api#inputmedia>.
pub type MediaItem = Map<String, Value>;

/// Bot API methods used by the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    /// `sendMessage`
    SendMessage,
    /// `sendMediaGroup`
    SendMediaGroup,
}

impl ApiMethod {
    /// Method name as it appears in the request path
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "sendMessage",
            Self::SendMediaGroup => "sendMediaGroup",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
