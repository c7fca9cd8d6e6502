//! Logging integration.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`ClientSettings`](crate::settings::ClientSettings) and for creating
//! per-request spans.

use crate::settings::ClientSettings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`; an unparsable directive
/// falls back to `info`. In debug mode a pretty, human-readable format is
/// used, otherwise structured JSON. Installing a second subscriber is a
/// silent no-op.
pub fn setup_logging(settings: &ClientSettings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one outgoing API request.
///
/// # Examples
///
/// ```
/// use xivapi_core::logging::request_span;
///
/// let span = request_span("GET", "https://v2.xivapi.com/api/sheet");
/// let _guard = span.enter();
/// tracing::debug!("sending request");
/// ```
pub fn request_span(method: &str, url: &str) -> tracing::Span {
    tracing::debug_span!("xivapi_request", method, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        let settings = ClientSettings {
            log_level: "not a [valid directive".to_string(),
            ..ClientSettings::default()
        };
        setup_logging(&settings);
        setup_logging(&ClientSettings::default());
    }
}
