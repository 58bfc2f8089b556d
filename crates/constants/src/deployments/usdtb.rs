//! Constants for the USDtb minting contracts.

use crate::{Deployment, Environment, OrderSchema};
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// Ticker of the minted token.
pub const TOKEN_NAME: &str = "USDtb";
/// EIP-712 domain name of the minting contract.
pub const DOMAIN_NAME: &str = "USDtbMinting";
/// EIP-712 domain version of the minting contract.
pub const DOMAIN_VERSION: &str = "1";
/// Chain ID the minting contracts are deployed on.
pub const CHAIN_ID: u64 = 1;

/// USDtb token contract.
pub const USDTB: Address = address!("0xC139190F447e929f090Edeb554D95AbB8b18aC1C");

/// Production minting contract.
pub const PRODUCTION_MINTING: Address = address!("0xa3DDBf92077b850E29C4805Df0a2459Ae048416a");
/// Production public RFQ endpoint.
pub const PRODUCTION_RFQ_URL: &str = "https://public.api.usdtb.money/";

/// Staging minting contract.
pub const STAGING_MINTING: Address = address!("0xdD7Ca5B25B2A857012537aA0393B4667B9824a72");
/// Staging public RFQ endpoint.
pub const STAGING_RFQ_URL: &str = "https://public.api.staging.usdtb.money/";

/// USDtb production deployment.
pub const PRODUCTION: Deployment = Deployment::new(
    Cow::Borrowed(TOKEN_NAME),
    Environment::Production,
    CHAIN_ID,
    PRODUCTION_MINTING,
    Cow::Borrowed(DOMAIN_NAME),
    Cow::Borrowed(DOMAIN_VERSION),
    Cow::Borrowed(PRODUCTION_RFQ_URL),
    Some(USDTB),
    OrderSchema::Usdtb,
);

/// USDtb staging deployment.
pub const STAGING: Deployment = Deployment::new(
    Cow::Borrowed(TOKEN_NAME),
    Environment::Staging,
    CHAIN_ID,
    STAGING_MINTING,
    Cow::Borrowed(DOMAIN_NAME),
    Cow::Borrowed(DOMAIN_VERSION),
    Cow::Borrowed(STAGING_RFQ_URL),
    None,
    OrderSchema::Usdtb,
);
