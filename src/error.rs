//! Error types
//!
//! [`TranslateError`] is the only failure the schema translator can produce.
//! [`ClientError`] covers talking to the Arke backend; its auth variants are
//! what the `pull` command inspects to decide whether to log in and retry.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while turning a struct into a Zod schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A parameter declared a type outside the supported set.
    #[error("Unknown type: {0}")]
    UnknownParameterType(String),
}

/// Failure while talking to the Arke backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unauthorized, please login to the project")]
    Unauthorized,

    #[error("Forbidden, make sure to login with a power user account")]
    Forbidden,

    #[error("request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether a fresh login could fix this error
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Forbidden)
    }
}
