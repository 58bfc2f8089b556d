//! RFQ relay client.
//!
//! Fetches quotes from the relay and submits signed orders to it. The relay
//! executes accepted orders on-chain and answers with the transaction
//! identifier.

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

mod client;
pub use client::RfqClient;

mod error;
pub use error::{Result, RfqError};

/// Response types for the relay.
pub mod types;
