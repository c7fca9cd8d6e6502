//! Client settings.
//!
//! [`ClientSettings`] holds everything the transport needs to reach the
//! service, plus the defaults it applies to row lookups. Load it with the
//! functions in [`settings_loader`](crate::settings_loader) or construct it
//! directly.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The public XIVAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v2.xivapi.com/api";

/// The complete set of client settings.
///
/// # Examples
///
/// ```
/// use xivapi_core::settings::{ClientSettings, DEFAULT_BASE_URL};
///
/// let settings = ClientSettings::default();
/// assert_eq!(settings.base_url, DEFAULT_BASE_URL);
/// assert!(settings.language.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    // ── Transport ────────────────────────────────────────────────────

    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,

    // ── Lookup defaults ──────────────────────────────────────────────

    /// Language applied to row lookups that do not set one.
    pub language: Option<Language>,
    /// Schema applied to row lookups that do not set one.
    pub schema: Option<String>,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or `EnvFilter` directive (e.g. "info", "xivapi=debug").
    pub log_level: String,
    /// Use the pretty, human-readable log format instead of JSON.
    pub debug: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("xivapi-rs/{}", env!("CARGO_PKG_VERSION")),
            language: None,
            schema: None,
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

impl ClientSettings {
    /// Returns the base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
