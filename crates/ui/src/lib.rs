//! Headless state for the mint web app.
//!
//! The app is a connect-wallet gate, a whitelist gate, and a mint form with
//! an Approve/Mint button. This crate holds that logic as plain state
//! machines, leaving rendering to the host:
//!
//! - [`Gate`] decides which screen to show.
//! - [`MintForm`] owns the amount input, token selection, and button state,
//!   and drives allowance reads, approvals, and mints.
//! - [`WhitelistSource`] answers whether a wallet may mint.

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

mod form;
pub use form::{Button, ButtonAction, MintForm, Phase};

mod gate;
pub use gate::{Gate, GateEvent};

mod input;
pub use input::{clean_input, remove_commas, trim_leading_zero};

mod notify;
pub use notify::{Notification, NotificationKind};

mod whitelist;
pub use whitelist::{ChainWhitelist, WhitelistSource};
