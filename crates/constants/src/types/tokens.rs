use crate::tokens::{BUIDL_RECORD, USDC_RECORD};
use alloy::primitives::Address;
use core::fmt;
use std::{borrow::Cow, str::FromStr};

/// An ERC-20 token record: address, ticker and decimals.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct TokenRecord {
    /// Token contract address.
    address: Address,
    /// Ticker of the token.
    ticker: Cow<'static, str>,
    /// Decimals of the token.
    decimals: u8,
}

impl TokenRecord {
    /// Create a new token record.
    pub const fn new(address: Address, ticker: Cow<'static, str>, decimals: u8) -> Self {
        Self { address, ticker, decimals }
    }

    /// Get the token address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the ticker.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Get the decimals.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Error returned when a collateral ticker is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("collateral {0} is not supported. supported collateral: USDC, BUIDL")]
pub struct ParseCollateralError(String);

/// Collateral assets accepted by the minting contracts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Collateral {
    /// USDC.
    #[default]
    Usdc,
    /// BUIDL.
    Buidl,
}

impl Collateral {
    /// Get the token record for this collateral.
    pub const fn record(&self) -> TokenRecord {
        match self {
            Self::Usdc => USDC_RECORD,
            Self::Buidl => BUIDL_RECORD,
        }
    }

    /// Get the token address for this collateral.
    pub fn address(&self) -> Address {
        self.record().address
    }

    /// Get the ticker for this collateral.
    pub const fn ticker(&self) -> &'static str {
        match self {
            Self::Usdc => "USDC",
            Self::Buidl => "BUIDL",
        }
    }

    /// The RFQ pair string, e.g. `USDC/USDtb`.
    pub fn pair(&self, minted: &str) -> String {
        format!("{}/{minted}", self.ticker())
    }
}

impl fmt::Display for Collateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Collateral {
    type Err = ParseCollateralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USDC" => Ok(Self::Usdc),
            "BUIDL" => Ok(Self::Buidl),
            _ => Err(ParseCollateralError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collateral_pair() {
        assert_eq!(Collateral::Usdc.pair("USDtb"), "USDC/USDtb");
        assert_eq!("buidl".parse::<Collateral>().unwrap(), Collateral::Buidl);
        assert_eq!(Collateral::Buidl.record().decimals(), 6);
        assert!("DAI".parse::<Collateral>().is_err());
    }
}
