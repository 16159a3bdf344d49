//! Shared helpers for the sender integration tests.

#![allow(dead_code)]

use serde_json::{Map, Value};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Token used by every test; mocks match on `/bot{TEST_BOT_TOKEN}/...`.
pub const TEST_BOT_TOKEN: &str = "123456789:TEST_TOKEN";

pub fn init_test_env() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// In-memory writer for capturing formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Path of a Bot API method on the mock server.
pub fn method_path(method: &str) -> String {
    format!("/bot{TEST_BOT_TOKEN}/{method}")
}

/// Builds a media item from a JSON object literal.
pub fn media_item(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("media item must be a JSON object, got {other}"),
    }
}

/// A successful `sendMessage` envelope.
pub const SEND_MESSAGE_OK: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 7,
        "chat": {"id": 42, "type": "private"},
        "date": 1700000000,
        "text": "hi"
    }
}"#;

/// A successful `sendMediaGroup` envelope.
pub const SEND_MEDIA_GROUP_OK: &str = r#"{
    "ok": true,
    "result": [
        {"message_id": 10, "media_group_id": "13579", "caption": "cap"},
        {"message_id": 11, "media_group_id": "13579"}
    ]
}"#;
