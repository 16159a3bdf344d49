//! Configuration and settings management
//!
//! Loads sender settings from config files and environment variables.
//! Using it is optional: a sender can be built straight from a token.

use crate::http::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Sender settings loaded from the environment
#[derive(Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// Bot API base URL, overridable for self-hosted API servers
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,

    /// Default timeout of a send call, in seconds
    #[serde(default = "default_telegram_http_timeout_secs")]
    pub telegram_http_timeout_secs: u64,
}

fn default_telegram_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_telegram_http_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use telegram_bot_sender::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or `TELEGRAM_TOKEN` is missing.
    pub fn new() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Not checked into git
            .add_source(File::with_name("config/local").required(false))
            // Eg. `APP__TELEGRAM_API_URL=http://localhost:8081`
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Plain UPPER_SNAKE_CASE variables, empty values treated as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }

    /// Default timeout of a send call
    #[must_use]
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.telegram_http_timeout_secs)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("telegram_token", &"[TELEGRAM_TOKEN]")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("telegram_http_timeout_secs", &self.telegram_http_timeout_secs)
            .finish()
    }
}
