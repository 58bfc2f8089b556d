use crate::{serde_ext::string_or_number, Amount, AmountError};
use alloy::primitives::Address;
use bigdecimal::{num_bigint::Sign, BigDecimal};
use core::fmt;
use rfq_mint_bindings::{ORDER_TYPE_MINT, ORDER_TYPE_REDEEM};
use rfq_mint_constants::DEFAULT_QUOTE_KIND;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of an order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Deposit collateral, receive the minted token.
    #[default]
    Mint,
    /// Return the minted token, receive collateral.
    Redeem,
}

impl Side {
    /// The `order_type` value signed into the order.
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Mint => ORDER_TYPE_MINT,
            Self::Redeem => ORDER_TYPE_REDEEM,
        }
    }

    /// The wire form used by the RFQ endpoint.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "MINT",
            Self::Redeem => "REDEEM",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MINT" => Ok(Self::Mint),
            "REDEEM" => Ok(Self::Redeem),
            other => Err(format!("unknown order side: {other}")),
        }
    }
}

/// A priced quote returned by the RFQ endpoint.
///
/// The relay names the identifier `rfq_id` and the minted amount after the
/// deployment's token (`usdtb_amount`, `ustb_amount`). Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote identifier. Becomes the order id.
    #[serde(alias = "rfq_id", deserialize_with = "string_or_number")]
    pub quote_id: String,
    /// Collateral amount in smallest units.
    pub collateral_amount: Amount,
    /// Minted token amount in smallest units.
    #[serde(alias = "usdtb_amount", alias = "ustb_amount")]
    pub minted_amount: Amount,
    /// Side, when the relay echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

/// Query parameters for a quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Pair, e.g. `USDC/USDtb`.
    pub pair: String,
    /// Quote kind, sent as `type_`.
    pub kind: String,
    /// Order side.
    pub side: Side,
    /// Size in whole collateral units.
    pub size: String,
    /// Benefactor the quote is for, if known.
    pub benefactor: Option<Address>,
}

impl QuoteRequest {
    /// Create a request, checking that `size` is a positive decimal.
    pub fn new(
        pair: impl Into<String>,
        side: Side,
        size: impl Into<String>,
    ) -> Result<Self, AmountError> {
        let size = size.into();
        validate_size(&size)?;
        Ok(Self {
            pair: pair.into(),
            kind: DEFAULT_QUOTE_KIND.to_owned(),
            side,
            size: size.trim().to_owned(),
            benefactor: None,
        })
    }

    /// Set the quote kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the benefactor.
    pub const fn with_benefactor(mut self, benefactor: Address) -> Self {
        self.benefactor = Some(benefactor);
        self
    }

    /// Query pairs in the order the endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pair", self.pair.clone()),
            ("type_", self.kind.clone()),
            ("side", self.side.to_string()),
            ("size", self.size.clone()),
        ];
        if let Some(benefactor) = self.benefactor {
            pairs.push(("benefactor", benefactor.to_string()));
        }
        pairs
    }
}

fn validate_size(size: &str) -> Result<(), AmountError> {
    let trimmed = size.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let decimal =
        BigDecimal::from_str(trimmed).map_err(|_| AmountError::Invalid(trimmed.to_owned()))?;
    match decimal.sign() {
        Sign::Plus => Ok(()),
        _ => Err(AmountError::Negative(trimmed.to_owned())),
    }
}
