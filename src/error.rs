//! Error types for API-Football operations.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur during API-Football operations.
#[derive(Debug, Error)]
pub enum FootballError {
    /// Configuration is missing or incomplete (e.g. no API key in the environment).
    #[error("API-Football configuration required: {0}")]
    ConfigMissing(String),

    /// One or more query parameters violate their field constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API reported a failure, either with a 400-500 status or through
    /// the `errors` map of an otherwise successful envelope.
    #[error("API-Football error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// The API answered with a status code outside the handled ranges.
    #[error("unknown http code: {0}")]
    UnknownStatus(u16),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Query string encoding error.
    #[error("Failed to encode query parameters: {0}")]
    EncodeError(#[from] serde_qs::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Coarse classification of a [`FootballError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network activity.
    Validation,
    /// The request could not be built or the exchange itself failed.
    Transport,
    /// The remote service reported a business-level failure.
    Api,
    /// HTTP status outside the recognized bands.
    UnknownStatus,
    /// The envelope or payload did not have the expected JSON shape.
    Decoding,
}

impl FootballError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ConfigMissing(_)
            | Self::HttpError(_)
            | Self::EncodeError(_)
            | Self::UrlError(_) => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Api,
            Self::UnknownStatus(_) => ErrorKind::UnknownStatus,
            Self::ParseError(_) => ErrorKind::Decoding,
        }
    }

    /// The HTTP status attached to this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::UnknownStatus(code) => Some(*code),
            Self::HttpError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The validation failure, if this error is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for API-Football operations.
pub type Result<T> = core::result::Result<T, FootballError>;
