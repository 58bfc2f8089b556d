//! Types shared by the RFQ mint client: quotes, orders, amounts, signatures
//! and the environment-loaded configuration.

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

mod amount;
pub use amount::{parse_amount, Amount, AmountError};

mod config;
pub use config::{env_utils, ConfigError, MintConfig, DEFAULT_RFQ_TIMEOUT};

mod order;
pub use order::{OrderError, OrderPayload, UnsignedOrder};

mod policy;
pub use policy::{ApprovalAmount, ApprovalPolicy};

mod quote;
pub use quote::{Quote, QuoteRequest, Side};

mod serde_ext;

mod signing;
pub use signing::{
    MintingOrder, OrderSignature, SignatureType, SignedOrder, SigningDomain, SigningError,
    SigningOrder,
};

mod utils;
pub use utils::{now_unix, parse_address, AddressError};
