use crate::OrderVerifier;
use core::convert::Infallible;
use rfq_mint_types::SignedOrder;

/// An [`OrderVerifier`] that accepts every order. Used when on-chain
/// verification is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVerification;

impl OrderVerifier for NoVerification {
    type Error = Infallible;

    async fn verify_order(&self, _order: &SignedOrder) -> Result<(), Self::Error> {
        Ok(())
    }
}
