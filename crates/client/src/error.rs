use rfq_mint_types::OrderError;

/// Result type for [`RfqClient`] operations.
///
/// [`RfqClient`]: crate::RfqClient
pub type Result<T> = std::result::Result<T, RfqError>;

/// Errors returned by the [`RfqClient`].
///
/// [`RfqClient`]: crate::RfqClient
#[derive(thiserror::Error, Debug)]
pub enum RfqError {
    /// The request could not be sent, timed out, or the body could not be
    /// read.
    #[error("error contacting RFQ relay: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status and no error message.
    #[error("RFQ relay returned {status}: {body}")]
    Status {
        /// HTTP status.
        status: reqwest::StatusCode,
        /// Response body, as text.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("malformed RFQ relay response: {0}")]
    Decode(String),

    /// The relay rejected the order. The message is the relay's, verbatim.
    #[error("RFQ relay rejected order ({status}): {message}")]
    Relay {
        /// HTTP status.
        status: reqwest::StatusCode,
        /// Relay error message.
        message: String,
    },

    /// An error occurred while building the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The order failed validation before being sent.
    #[error(transparent)]
    Validation(#[from] OrderError),
}

impl RfqError {
    /// The HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            Self::Status { status, .. } | Self::Relay { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}
