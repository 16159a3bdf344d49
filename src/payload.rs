//! Form payloads for the Bot API send methods.
//!
//! Both builders return `Ok(None)` when there is nothing to send, in which
//! case no request must be made.

use crate::error::SendError;
use crate::types::{MediaItem, MessageEntity};
use serde_json::Value;

/// URL-encoded form fields, in the order they are sent
pub type Form = Vec<(&'static str, String)>;

/// Builds the `sendMessage` form.
///
/// `entities` are encoded as a JSON string; the field is omitted when absent.
///
/// # Errors
///
/// Returns `SendError::Json` if the entities cannot be serialized.
pub fn text_message_form(
    chat_id: i64,
    text: Option<&str>,
    entities: Option<&[MessageEntity]>,
) -> Result<Option<Form>, SendError> {
    let Some(text) = text else {
        return Ok(None);
    };

    let mut form: Form = vec![
        ("chat_id", chat_id.to_string()),
        ("text", text.to_string()),
        ("disable_web_page_preview", "true".to_string()),
    ];
    if let Some(entities) = entities {
        form.push(("entities", serde_json::to_string(entities)?));
    }

    Ok(Some(form))
}

/// Returns a copy of `media` whose first item carries the caption.
///
/// `caption_entities` is set to `entities`, or removed when there are none.
/// Items after the first are copied unchanged.
#[must_use]
pub fn caption_media(
    media: &[MediaItem],
    caption: &str,
    entities: Option<&[MessageEntity]>,
) -> Vec<MediaItem> {
    let mut media = media.to_vec();
    if let Some(first) = media.first_mut() {
        first.insert("caption".to_string(), Value::String(caption.to_string()));
        match entities {
            Some(entities) => {
                first.insert(
                    "caption_entities".to_string(),
                    Value::Array(entities.to_vec()),
                );
            }
            None => {
                first.remove("caption_entities");
            }
        }
    }
    media
}

/// Builds the `sendMediaGroup` form.
///
/// Nothing is sent unless there is a caption and at least one media item.
///
/// # Errors
///
/// Returns `SendError::Json` if the media list cannot be serialized.
pub fn media_group_form(
    chat_id: i64,
    text: Option<&str>,
    media: &[MediaItem],
    entities: Option<&[MessageEntity]>,
) -> Result<Option<Form>, SendError> {
    let Some(text) = text else {
        return Ok(None);
    };
    if media.is_empty() {
        return Ok(None);
    }

    let media = caption_media(media, text, entities);
    Ok(Some(vec![
        ("chat_id", chat_id.to_string()),
        ("media", serde_json::to_string(&media)?),
    ]))
}
