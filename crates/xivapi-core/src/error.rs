//! Core error types for the xivapi crates.
//!
//! [`XivError`] covers two families of failure. Local errors (`Parameter`,
//! `Type`, `Configuration`) signal programmer mistakes and are raised at call
//! time by the query builder or the settings loader. Remote errors are
//! produced by the transport layer when the service answers with anything
//! other than a decodable success response.

use thiserror::Error;

/// The primary error type for the xivapi crates.
#[derive(Error, Debug)]
pub enum XivError {
    // ── Local errors ─────────────────────────────────────────────────

    /// A required argument was missing or had an unsupported value.
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// An argument did not match any recognized call shape.
    #[error("Type error: {0}")]
    Type(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── Remote errors ────────────────────────────────────────────────

    /// HTTP 400: the service rejected one of the request parameters.
    #[error("Remote parameter error: {0}")]
    RemoteParameter(String),

    /// HTTP 404: the sheet, row, or asset does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 429.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Any other non-success status.
    #[error("Server error: HTTP {0}")]
    Server(u16),

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl XivError {
    /// Returns the HTTP status a remote error corresponds to.
    ///
    /// Local errors, transport failures, and undecodable bodies have no
    /// status and return `None`.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteParameter(_) => Some(400),
            Self::NotFound(_) => Some(404),
            Self::RateLimited => Some(429),
            Self::Server(status) => Some(*status),
            Self::Parameter(_)
            | Self::Type(_)
            | Self::Configuration(_)
            | Self::InvalidResponse(_)
            | Self::Http(_)
            | Self::Io(_) => None,
        }
    }

    /// Returns `true` for errors raised locally before any request is made.
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Parameter(_) | Self::Type(_) | Self::Configuration(_)
        )
    }
}

/// A convenience type alias for `Result<T, XivError>`.
pub type XivResult<T> = Result<T, XivError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(XivError::RemoteParameter("x".into()).status_code(), Some(400));
        assert_eq!(XivError::NotFound("x".into()).status_code(), Some(404));
        assert_eq!(XivError::RateLimited.status_code(), Some(429));
        assert_eq!(XivError::Server(503).status_code(), Some(503));
        assert_eq!(XivError::Parameter("x".into()).status_code(), None);
        assert_eq!(XivError::InvalidResponse("x".into()).status_code(), None);
    }

    #[test]
    fn test_is_local() {
        assert!(XivError::Parameter("x".into()).is_local());
        assert!(XivError::Type("x".into()).is_local());
        assert!(XivError::Configuration("x".into()).is_local());
        assert!(!XivError::RateLimited.is_local());
        assert!(!XivError::Http("x".into()).is_local());
    }

    #[test]
    fn test_display() {
        let err = XivError::Parameter("operator is required".into());
        assert_eq!(err.to_string(), "Parameter error: operator is required");
        assert_eq!(XivError::Server(502).to_string(), "Server error: HTTP 502");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: XivError = io_err.into();
        assert!(err.to_string().contains("file missing"));
        assert_eq!(err.status_code(), None);
    }
}
