use std::error::Error as StdError;
use std::path::PathBuf;

use crate::domain::{InvalidExpiryError, ValidationError};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::OdgClient`].
///
/// Only an expired token is retried (inside the client, up to the retry ceiling); every other
/// failure is returned to the caller as-is.
pub enum OdgError {
    /// A request was issued before the client was ever authorized.
    #[error("not authorized: call `authorize` before issuing requests")]
    NotAuthorized,

    /// The token was still expired after re-authorizing `retries` times.
    #[error("token still expired after {retries} re-authorizations")]
    MaxRetriesExceeded { retries: u32 },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The token service answered with a non-successful status code.
    #[error("token service returned HTTP status {status}")]
    AuthHttpStatus { status: u16 },

    /// The token service body was not JSON, or lacked the token or its expiry.
    #[error("token service protocol error: {0}")]
    AuthProtocol(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    InvalidExpiry(#[from] InvalidExpiryError),

    /// Gateway response body could not be parsed as JSON.
    #[error("response is not valid JSON: {source}")]
    ResponseParse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Gateway answered with a status other than 200. The parsed error payload is kept.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus {
        status: u16,
        body: serde_json::Value,
    },

    /// One of the domain constructors rejected an invalid or missing value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An MMS attachment file could not be read.
    #[error("failed to read attachment {path:?}: {source}")]
    AttachmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured gateway base or token endpoint does not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
