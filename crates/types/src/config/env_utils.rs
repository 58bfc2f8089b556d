//! Environment variable loaders.
//!
//! Empty values are treated as unset, so that a `.env` template with blank
//! entries behaves like one without them.

use crate::{parse_address, ConfigError};
use alloy::primitives::Address;
use std::env;
use url::Url;

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an integer variable.
pub fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Int { key: key.to_owned(), source })
}

/// Parse a boolean variable. Accepts `true/false`, `1/0`, `yes/no`.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::ParseBool(key.to_owned())),
    }
}

/// Parse an address variable.
pub fn parse_address_var(key: &str, value: &str) -> Result<Address, ConfigError> {
    parse_address(value).map_err(|source| ConfigError::Address { key: key.to_owned(), source })
}

/// Parse a URL variable.
pub fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|source| ConfigError::Url { key: key.to_owned(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools() {
        assert!(parse_bool("K", "TRUE").unwrap());
        assert!(!parse_bool("K", " 0 ").unwrap());
        assert!(matches!(parse_bool("K", "maybe"), Err(ConfigError::ParseBool(k)) if k == "K"));
    }

    #[test]
    fn ints_and_urls() {
        assert_eq!(parse_u64("K", "60").unwrap(), 60);
        assert!(parse_u64("K", "-1").is_err());
        assert!(parse_url("K", "not a url").is_err());
        assert_eq!(parse_url("K", "http://localhost:8545").unwrap().port(), Some(8545));
    }
}
