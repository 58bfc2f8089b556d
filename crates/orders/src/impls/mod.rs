mod provider;
pub use provider::{ChainError, ProviderApprovals, ProviderVerifier};

mod rfq;

mod noop;
pub use noop::NoVerification;
