//! Log hygiene helpers.

// lazy_regex! statics are validated at compile time
#![allow(clippy::non_std_lazy_statics)]

use lazy_regex::{lazy_regex, Lazy, Regex};

/// Placeholder written in place of a bot token
pub const REDACTED_TOKEN: &str = "[TELEGRAM_TOKEN]";

/// Match the token segment of a Bot API URL: `/bot<id>:<secret>`
static RE_URL_TOKEN: Lazy<Regex> = lazy_regex!(r"(/bot)([0-9]+:[A-Za-z0-9_-]+)");

/// Match a bare bot token: `<id>:<secret>`
static RE_BARE_TOKEN: Lazy<Regex> = lazy_regex!(r"\b[0-9]{8,10}:[A-Za-z0-9_-]{35}\b");

/// Replaces bot tokens in `input` with `[TELEGRAM_TOKEN]`.
///
/// `token` is replaced literally whatever its shape. Anything else that
/// looks like a Bot API token is caught by pattern.
#[must_use]
pub fn redact_token(input: &str, token: &str) -> String {
    let output = if token.is_empty() {
        input.to_string()
    } else {
        input.replace(token, REDACTED_TOKEN)
    };
    let output = RE_URL_TOKEN.replace_all(&output, format!("${{1}}{REDACTED_TOKEN}"));
    RE_BARE_TOKEN
        .replace_all(&output, REDACTED_TOKEN)
        .into_owned()
}
