use crate::{Gate, GateEvent};
use alloy::{primitives::Address, providers::Provider};
use core::future::Future;
use rfq_mint_bindings::{UsdtbMinting, UstbMinting};
use rfq_mint_constants::{Deployment, OrderSchema};
use tracing::{debug, instrument, warn};

/// Answers whether an address may mint.
pub trait WhitelistSource {
    /// The error type returned by lookups.
    type Error: core::fmt::Display;

    /// Check whether `benefactor` is whitelisted.
    fn is_whitelisted(
        &self,
        benefactor: Address,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Resolve a pending whitelist check on `gate`.
    ///
    /// A failed lookup counts as not whitelisted. Gates that are not
    /// checking are returned unchanged.
    fn resolve(&self, gate: Gate) -> impl Future<Output = Gate> + Send
    where
        Self: Sync,
    {
        async move {
            let Gate::CheckingWhitelist { address } = gate else {
                return gate;
            };
            let whitelisted = self.is_whitelisted(address).await.unwrap_or_else(|error| {
                warn!(%error, %address, "Whitelist check failed");
                false
            });
            gate.on(GateEvent::WhitelistResolved(whitelisted))
        }
    }
}

/// [`WhitelistSource`] calling `isWhitelistedBenefactor` on the minting
/// contract.
#[derive(Debug, Clone)]
pub struct ChainWhitelist<P> {
    provider: P,
    deployment: Deployment,
}

impl<P> ChainWhitelist<P> {
    /// Create a whitelist reader for the deployment's minting contract.
    pub const fn new(provider: P, deployment: Deployment) -> Self {
        Self { provider, deployment }
    }

    /// Get a reference to the deployment.
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }
}

impl<P> WhitelistSource for ChainWhitelist<P>
where
    P: Provider + Clone + Send + Sync,
{
    type Error = alloy::contract::Error;

    #[instrument(skip_all, fields(%benefactor))]
    async fn is_whitelisted(&self, benefactor: Address) -> Result<bool, Self::Error> {
        let minting = self.deployment.minting();
        let whitelisted = match self.deployment.schema() {
            OrderSchema::Usdtb => {
                UsdtbMinting::new(minting, self.provider.clone())
                    .isWhitelistedBenefactor(benefactor)
                    .call()
                    .await?
            }
            OrderSchema::Ustb => {
                UstbMinting::new(minting, self.provider.clone())
                    .isWhitelistedBenefactor(benefactor)
                    .call()
                    .await?
            }
        };
        debug!(whitelisted, "Whitelist checked");
        Ok(whitelisted)
    }
}
