//! Common utilities for testing the RFQ mint client.

pub mod mocks;
pub mod provider;
pub mod relay;
pub mod users;

pub use rfq_mint_constants::test_utils as test_constants;

use rfq_mint_types::{Amount, Quote};

/// Install a test tracing subscriber honouring `RUST_LOG`. Safe to call
/// from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A quote with equal collateral and minted amounts.
pub fn test_quote(quote_id: &str, amount: u64) -> Quote {
    Quote {
        quote_id: quote_id.to_owned(),
        collateral_amount: Amount::from(amount),
        minted_amount: Amount::from(amount),
        side: None,
    }
}
