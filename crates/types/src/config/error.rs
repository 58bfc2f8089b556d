use crate::AddressError;
use rfq_mint_constants::ParseDeploymentError;

/// Error type for [`crate::MintConfig`]. Captures errors related to loading
/// configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing an integer variable.
    #[error("failed to parse {key}: {source}")]
    Int {
        /// Variable name.
        key: String,
        /// Underlying error.
        #[source]
        source: std::num::ParseIntError,
    },
    /// Error parsing a boolean variable.
    #[error("failed to parse boolean environment variable {0}")]
    ParseBool(String),
    /// Error parsing an address variable.
    #[error("failed to parse {key}: {source}")]
    Address {
        /// Variable name.
        key: String,
        /// Underlying error.
        #[source]
        source: AddressError,
    },
    /// Error parsing a URL variable.
    #[error("failed to parse {key}: {source}")]
    Url {
        /// Variable name.
        key: String,
        /// Underlying error.
        #[source]
        source: url::ParseError,
    },
    /// The private key is malformed.
    #[error("invalid private key: {0}")]
    Key(#[from] alloy::signers::local::LocalSignerError),
    /// Unknown deployment, environment or schema.
    #[error(transparent)]
    Deployment(#[from] ParseDeploymentError),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
