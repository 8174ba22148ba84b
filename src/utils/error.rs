//! The `error` module defines the error types used within the `pushover` library.
//!
//! `MessageError` holds one fixed value per rule a message can break, `Errors`
//! collects the independent failures reported by the API in a single reply,
//! and `Error` is what every fallible public function returns.

use std::fmt;

use thiserror::Error;

/// A rule violated by a message, either during validation or while its
/// attachment is serialized.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    #[error("pushover: message empty")]
    Empty,

    #[error("pushover: message too long")]
    TooLong,

    #[error("pushover: message title too long")]
    TitleTooLong,

    #[error("pushover: message URL too long")]
    UrlTooLong,

    #[error("pushover: message URL title too long")]
    UrlTitleTooLong,

    #[error("pushover: empty URL, URL title needs a URL")]
    EmptyUrl,

    #[error("pushover: invalid device name")]
    InvalidDeviceName,

    #[error("pushover: invalid priority")]
    InvalidPriority,

    #[error("pushover: missing emergency parameter")]
    MissingEmergencyParameter,

    #[error("pushover: missing attachment")]
    MissingAttachment,

    #[error("pushover: message attachment is too large")]
    AttachmentTooLarge,
}

/// Several independent failure descriptions reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors(pub Vec<String>);

impl Errors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for Errors {
    fn from(errors: Vec<String>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "Errors:\n{}", self.0.join("\n"))
    }
}

impl std::error::Error for Errors {}

/// Top-level error returned by the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Message(#[from] MessageError),

    #[error("{0}")]
    Api(#[from] Errors),

    #[error("pushover: empty API token")]
    EmptyToken,

    #[error("pushover: empty recipient token")]
    EmptyRecipientToken,

    #[error("pushover: I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pushover: http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("pushover: unexpected HTTP status {0}")]
    Status(u16),

    #[error("pushover: invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pushover: configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
