mod common;

use common::{
    init_test_env, media_item, method_path, LogBuffer, SEND_MEDIA_GROUP_OK, SEND_MESSAGE_OK,
    TEST_BOT_TOKEN,
};
use mockito::Matcher;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use telegram_bot_sender::blocking::BotSender;
use telegram_bot_sender::SendError;

fn sender_for(server: &mockito::ServerGuard) -> BotSender {
    BotSender::new(TEST_BOT_TOKEN).with_api_url(server.url())
}

#[test]
fn sends_text_and_returns_result() -> Result<(), SendError> {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::UrlEncoded("text".into(), "hi".into()),
            Matcher::UrlEncoded("disable_web_page_preview".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEND_MESSAGE_OK)
        .create();

    let sent = sender_for(&server).send_text(42, Some("hi"), None, None)?;

    assert_eq!(sent.map(|message| message["message_id"].clone()), Some(json!(7)));
    mock.assert();
    Ok(())
}

#[test]
fn sends_captioned_media_group() -> Result<(), SendError> {
    init_test_env();
    let media = vec![
        media_item(json!({"type": "document", "media": "file-id-1"})),
        media_item(json!({"type": "document", "media": "file-id-2"})),
    ];
    let expected_media = json!([
        {"type": "document", "media": "file-id-1", "caption": "report"},
        {"type": "document", "media": "file-id-2"}
    ]);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", method_path("sendMediaGroup").as_str())
        .match_body(Matcher::UrlEncoded(
            "media".into(),
            serde_json::to_string(&expected_media)?,
        ))
        .with_status(200)
        .with_body(SEND_MEDIA_GROUP_OK)
        .create();

    let sent = sender_for(&server).send_media_group_or_none(42, Some("report"), &media, None, None);

    assert_eq!(sent.and_then(|v| v.as_array().map(Vec::len)), Some(2));
    assert!(!media[0].contains_key("caption"));
    mock.assert();
    Ok(())
}

#[test]
fn nothing_to_send_makes_no_request() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();
    let sender = sender_for(&server);
    let media = vec![media_item(json!({"type": "photo", "media": "file-id-1"}))];

    assert!(matches!(sender.send_text(42, None, None, None), Ok(None)));
    assert!(matches!(
        sender.send_media_group(42, None, &media, None, None),
        Ok(None)
    ));
    assert_eq!(sender.send_media_group_or_none(42, Some("cap"), &[], None, None), None);

    mock.assert();
}

#[test]
fn failures_collapse_to_none() {
    init_test_env();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .with_status(429)
        .with_body(r#"{"ok": false, "error_code": 429, "description": "Too Many Requests: retry after 3"}"#)
        .create();
    let sender = sender_for(&server);

    let err = sender
        .send_text(42, Some("hi"), None, None)
        .expect_err("rate limited call should fail");
    assert!(matches!(err, SendError::Api { error_code: Some(429), .. }));
    assert!(err.is_transient());

    assert_eq!(sender.send_text_or_none(42, Some("hi"), None, None), None);
}

#[test]
fn timeout_collapses_to_none() {
    init_test_env();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(2));
            w.write_all(SEND_MESSAGE_OK.as_bytes())
        })
        .create();
    let sender = sender_for(&server);
    let timeout = Some(Duration::from_millis(200));

    let err = sender
        .send_text(42, Some("hi"), None, timeout)
        .expect_err("call should time out");
    assert!(matches!(err, SendError::Timeout(_)), "got {err:?}");
    assert!(err.is_transient());

    assert_eq!(sender.send_text_or_none(42, Some("hi"), None, timeout), None);
}

#[test]
fn logs_never_contain_token() {
    // Not shaped like a Bot API token, so only a literal match can hide it
    let token = "my.secret+token";
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", format!("/bot{token}/sendMessage").as_str())
        .with_status(401)
        .with_body(r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#)
        .create();
    let sender = BotSender::new(token).with_api_url(server.url());

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let err = tracing::subscriber::with_default(subscriber, || {
        sender
            .send_text(42, Some("hi"), None, None)
            .expect_err("unauthorized call should fail")
    });
    assert!(matches!(err, SendError::Api { error_code: Some(401), .. }));

    let output = logs.contents();
    assert!(output.contains("Sending Bot API request"), "logs: {output}");
    assert!(output.contains("bot[TELEGRAM_TOKEN]/sendMessage"), "logs: {output}");
    assert!(output.contains("Bot API request failed"), "logs: {output}");
    assert!(!output.contains(token), "logs: {output}");
}

#[test]
fn connection_failure_collapses_to_none() {
    init_test_env();
    let sender = BotSender::new(TEST_BOT_TOKEN)
        .with_api_url("http://127.0.0.1:1")
        .with_default_timeout(Duration::from_secs(2));

    let err = sender
        .send_text(42, Some("hi"), None, None)
        .expect_err("connection should fail");
    assert!(matches!(err, SendError::Network(_) | SendError::Timeout(_)));
    assert_eq!(sender.send_text_or_none(42, Some("hi"), None, None), None);
}

#[test]
fn debug_output_hides_token() {
    let sender = BotSender::new(TEST_BOT_TOKEN);
    assert!(!format!("{sender:?}").contains(TEST_BOT_TOKEN));

    let sender = BotSender::new("my.secret+token");
    assert!(!format!("{sender:?}").contains("my.secret+token"));
}
