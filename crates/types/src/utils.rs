use alloy::primitives::Address;
use chrono::Utc;

/// Errors returned when validating an address string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Not `0x` followed by 40 hex characters.
    #[error("address {0:?} is not 0x-prefixed 20-byte hex")]
    Malformed(String),
    /// Mixed-case input that does not match its EIP-55 checksum.
    #[error("address {0:?} does not match its EIP-55 checksum")]
    BadChecksum(String),
}

/// Parse and validate an address.
///
/// The input must be `0x` followed by exactly 40 hex characters. All-lower
/// and all-upper case are accepted as-is; mixed case must be a valid EIP-55
/// checksum.
pub fn parse_address(s: &str) -> Result<Address, AddressError> {
    let s = s.trim();
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| AddressError::Malformed(s.to_owned()))?;

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::Malformed(s.to_owned()));
    }

    let address: Address = hex.parse().map_err(|_| AddressError::Malformed(s.to_owned()))?;

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower && address.to_checksum(None)[2..] != *hex {
        return Err(AddressError::BadChecksum(s.to_owned()));
    }

    Ok(address)
}

/// Current unix time in seconds.
pub fn now_unix() -> u64 {
    Utc::now().timestamp() as u64
}
