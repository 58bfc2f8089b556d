use core::fmt;
use std::str::FromStr;

/// Layout of the minting contract's `Order` struct.
///
/// Deployments share one canonical order. They only differ in the name of
/// the minted amount field, which is part of the EIP-712 type string and of
/// the JSON body accepted by the relay.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSchema {
    /// `uint128 usdtb_amount`.
    #[default]
    Usdtb,
    /// `uint128 ustb_amount`.
    Ustb,
}

impl OrderSchema {
    /// Name of the minted amount field.
    pub const fn minted_amount_field(&self) -> &'static str {
        match self {
            Self::Usdtb => "usdtb_amount",
            Self::Ustb => "ustb_amount",
        }
    }
}

impl fmt::Display for OrderSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usdtb => f.write_str("usdtb"),
            Self::Ustb => f.write_str("ustb"),
        }
    }
}

impl FromStr for OrderSchema {
    type Err = crate::ParseDeploymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usdtb" => Ok(Self::Usdtb),
            "ustb" => Ok(Self::Ustb),
            other => Err(crate::ParseDeploymentError::UnknownSchema(other.to_owned())),
        }
    }
}
