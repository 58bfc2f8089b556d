//! Solidity bindings for the minting contracts.
//!
//! Each deployment schema gets its own contract module, since the name of the
//! minted amount field is part of the EIP-712 type string of `Order`.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{UsdtbMinting, UstbMinting, IERC20};

/// `order_type` value for a mint order.
pub const ORDER_TYPE_MINT: u8 = 0;

/// `order_type` value for a redeem order.
pub const ORDER_TYPE_REDEEM: u8 = 1;

/// `signature_type` value for an EIP-712 signature.
pub const SIGNATURE_TYPE_EIP712: u8 = 0;

/// `signature_type` value for an EIP-1271 signature.
pub const SIGNATURE_TYPE_EIP1271: u8 = 1;
