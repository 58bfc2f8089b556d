//! Constants for the USTB minting contracts.

use crate::{Deployment, Environment, OrderSchema};
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// Ticker of the minted token.
pub const TOKEN_NAME: &str = "USTB";
/// EIP-712 domain name of the minting contract.
pub const DOMAIN_NAME: &str = "USTBMinting";
/// EIP-712 domain version of the minting contract.
pub const DOMAIN_VERSION: &str = "1";
/// Chain ID the minting contracts are deployed on.
pub const CHAIN_ID: u64 = 1;

/// Staging minting contract.
pub const STAGING_MINTING: Address = address!("0x4a6B08f7d49a507778Af6FB7eebaE4ce108C981E");
/// Staging public RFQ endpoint.
pub const STAGING_RFQ_URL: &str = "https://public.api.staging.ustb.money/";
/// Production public RFQ endpoint. The production contract address must be
/// supplied through configuration.
pub const PRODUCTION_RFQ_URL: &str = "https://public.api.ustb.money/";

/// USTB staging deployment.
pub const STAGING: Deployment = Deployment::new(
    Cow::Borrowed(TOKEN_NAME),
    Environment::Staging,
    CHAIN_ID,
    STAGING_MINTING,
    Cow::Borrowed(DOMAIN_NAME),
    Cow::Borrowed(DOMAIN_VERSION),
    Cow::Borrowed(STAGING_RFQ_URL),
    None,
    OrderSchema::Ustb,
);
