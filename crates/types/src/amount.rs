use alloy::primitives::{utils::parse_units, U256};
use bigdecimal::{num_bigint::Sign, BigDecimal};
use core::fmt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// 2^256 - 1 has 78 decimal digits. Any non-zero value scaled by more than
/// this many powers of ten cannot fit in a `U256`.
const MAX_DECIMAL_DIGITS: i64 = 78;

/// Errors returned when parsing a decimal amount into an exact integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The amount string was empty.
    #[error("amount is empty")]
    Empty,
    /// The amount is not a decimal number.
    #[error("amount {0:?} is not a decimal number")]
    Invalid(String),
    /// The amount is negative.
    #[error("amount {0:?} is negative")]
    Negative(String),
    /// The amount has a fractional part in smallest units.
    #[error("amount {0:?} is not a whole number of smallest units")]
    Fractional(String),
    /// The amount does not fit the target integer width.
    #[error("amount {0:?} does not fit in {1} bits")]
    Overflow(String, usize),
    /// Human-readable amount could not be scaled by the token decimals.
    ///
    /// The underlying `UnitsError` is neither `Clone` nor `Eq`, so only its
    /// message is kept.
    #[error("amount {input:?} could not be scaled to {decimals} decimals: {reason}")]
    Units {
        /// The input string.
        input: String,
        /// Token decimals.
        decimals: u8,
        /// Message of the underlying units error.
        reason: String,
    },
}

/// Parse a decimal string into an exact unsigned integer.
///
/// Accepts plain (`"30000000"`), fractional-looking but integral
/// (`"15.0"`), and scientific (`"1.5e3"`, `"3E+7"`) forms. Parsing is exact:
/// no floating point is involved, so values beyond 2^53 survive unchanged.
pub fn parse_amount(s: &str) -> Result<U256, AmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let decimal =
        BigDecimal::from_str(trimmed).map_err(|_| AmountError::Invalid(trimmed.to_owned()))?;

    match decimal.sign() {
        Sign::NoSign => return Ok(U256::ZERO),
        Sign::Minus => return Err(AmountError::Negative(trimmed.to_owned())),
        Sign::Plus => {}
    }

    if !decimal.is_integer() {
        return Err(AmountError::Fractional(trimmed.to_owned()));
    }

    // guard before materializing 10^-scale digits
    let (_, scale) = decimal.as_bigint_and_exponent();
    if scale < -MAX_DECIMAL_DIGITS {
        return Err(AmountError::Overflow(trimmed.to_owned(), 256));
    }

    let (integer, _) = decimal.with_scale(0).into_bigint_and_exponent();
    let bytes = integer.magnitude().to_bytes_be();
    U256::try_from_be_slice(&bytes).ok_or_else(|| AmountError::Overflow(trimmed.to_owned(), 256))
}

/// A token amount in smallest units.
///
/// Keeps the decimal string exactly as the relay sent it, alongside the exact
/// integer value. The string form is what the relay expects back on order
/// submission; the integer form is what gets signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    raw: String,
    value: U256,
}

impl Amount {
    /// Parse an amount from its decimal string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AmountError> {
        let raw = raw.into();
        let value = parse_amount(&raw)?;
        Ok(Self { raw, value })
    }

    /// Scale a human-readable amount (e.g. `"30"` USDC) by the token decimals.
    ///
    /// Negative amounts and amounts with more fractional digits than the
    /// token has are rejected rather than folded or truncated.
    pub fn from_units(human: &str, decimals: u8) -> Result<Self, AmountError> {
        let trimmed = human.trim();
        if trimmed.starts_with('-') {
            return Err(AmountError::Negative(trimmed.to_owned()));
        }
        if trimmed.split_once('.').is_some_and(|(_, frac)| frac.len() > decimals as usize) {
            return Err(AmountError::Fractional(trimmed.to_owned()));
        }
        let value: U256 = parse_units(trimmed, decimals)
            .map_err(|error| AmountError::Units {
                input: human.to_owned(),
                decimals,
                reason: error.to_string(),
            })?
            .into();
        Ok(Self::from(value))
    }

    /// The decimal string as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The exact integer value.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// The value rendered as a plain decimal integer.
    pub fn to_plain_string(&self) -> String {
        self.value.to_string()
    }

    /// The value as a `u128`, the width of amount fields in the signed order.
    pub fn to_u128(&self) -> Result<u128, AmountError> {
        u128::try_from(self.value).map_err(|_| AmountError::Overflow(self.raw.clone(), 128))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self { raw: value.to_string(), value }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::from(U256::from(value))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = crate::serde_ext::string_or_number(deserializer)?;
        Self::parse(raw).map_err(de::Error::custom)
    }
}
