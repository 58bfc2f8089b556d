//! RFQ mint deployment constants.
//!
//! This crate contains the per-environment deployment records for the minting
//! contracts (contract address, EIP-712 domain, RFQ endpoint, order schema)
//! and the collateral tokens they accept.

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
#![cfg_attr(docsrs, feature(doc_cfg))]

mod deployments;
pub use deployments::{tokens, usdtb, ustb};

#[cfg(any(test, feature = "test-utils"))]
pub use deployments::test_utils;

mod types;
pub use types::{
    Collateral, Deployment, Environment, KnownDeployments, OrderSchema, ParseCollateralError,
    ParseDeploymentError, TokenRecord,
};

/// Default number of seconds an order stays valid after it is built.
pub const DEFAULT_EXPIRY_OFFSET: u64 = 60;

/// Default quote kind requested from the RFQ endpoint.
pub const DEFAULT_QUOTE_KIND: &str = "ALGO";
