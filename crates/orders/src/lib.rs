//! RFQ mint workflow.
//!
//! Contains the seams the workflow talks through (quotes, allowances,
//! verification, submission), their RFQ relay and alloy provider
//! implementations, the order builder, and the [`MintFlow`] and
//! [`AutoMinter`] drivers.

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

mod allowance;
pub use allowance::{approval_target, ensure_allowance, AllowanceOutcome, ApprovalError};

mod auto;
pub use auto::{AutoMintConfig, AutoMintError, AutoMintReport, AutoMintStep, AutoMinter};

mod builder;
pub use builder::{NonceStrategy, OrderBuilder};

mod flow;
pub use flow::{MintFlow, MintFlowError, MintReceipt, MintRequest};

mod impls;
pub use impls::{ChainError, NoVerification, ProviderApprovals, ProviderVerifier};

mod traits;
pub use traits::{Erc20Approvals, OrderSubmitter, OrderVerifier, QuoteSource};
