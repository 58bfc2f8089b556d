//! Mainnet collateral tokens.

use crate::TokenRecord;
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// USDC on Ethereum mainnet.
pub const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// BlackRock BUIDL on Ethereum mainnet.
pub const BUIDL: Address = address!("0x7712c34205737192402172409a8F7ccef8aA2AEc");

/// USDC token record.
pub const USDC_RECORD: TokenRecord = TokenRecord::new(USDC, Cow::Borrowed("USDC"), 6);
/// BUIDL token record.
pub const BUIDL_RECORD: TokenRecord = TokenRecord::new(BUIDL, Cow::Borrowed("BUIDL"), 6);

/// Tokens offered by the mint form, in display order.
pub const PAIR_TOKENS: &[TokenRecord] = &[USDC_RECORD];
