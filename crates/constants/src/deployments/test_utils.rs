//! Constants for local tests.

use crate::{Deployment, Environment, OrderSchema, TokenRecord};
use alloy::primitives::Address;
use std::borrow::Cow;

/// Test chain id.
pub const TEST_CHAIN_ID: u64 = 1;
/// Test minting contract.
pub const TEST_MINTING: Address = Address::repeat_byte(0x11);
/// Test minted token.
pub const TEST_MINTED_TOKEN: Address = Address::repeat_byte(0x22);
/// Test collateral token.
pub const TEST_COLLATERAL: Address = Address::repeat_byte(0x33);
/// Test RFQ endpoint. Tests that talk HTTP override this with a local relay.
pub const TEST_RFQ_URL: &str = "http://127.0.0.1:8080/";

/// Test collateral record.
pub const TEST_COLLATERAL_RECORD: TokenRecord =
    TokenRecord::new(TEST_COLLATERAL, Cow::Borrowed("TUSD"), 6);

/// Deployment used throughout the test suite.
pub const TEST_DEPLOYMENT: Deployment = Deployment::new(
    Cow::Borrowed("USDtb"),
    Environment::Staging,
    TEST_CHAIN_ID,
    TEST_MINTING,
    Cow::Borrowed("USDtbMinting"),
    Cow::Borrowed("1"),
    Cow::Borrowed(TEST_RFQ_URL),
    Some(TEST_MINTED_TOKEN),
    OrderSchema::Usdtb,
);
