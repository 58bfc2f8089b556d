use crate::{Erc20Approvals, OrderVerifier};
use alloy::{
    primitives::{Address, TxHash, B256, U256},
    providers::{PendingTransactionError, Provider},
};
use rfq_mint_bindings::{UsdtbMinting, UstbMinting, IERC20};
use rfq_mint_constants::Deployment;
use rfq_mint_types::{MintingOrder, SignedOrder, SigningError};
use tracing::{debug, instrument, warn};

/// Errors from chain calls made through a [`Provider`].
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// A contract call or transaction failed, including reverts.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    /// Waiting for a transaction failed.
    #[error(transparent)]
    Pending(#[from] PendingTransactionError),
    /// The order could not be shaped for the contract.
    #[error(transparent)]
    Signing(#[from] SigningError),
    /// The contract computed a different order digest.
    #[error("order hash mismatch: local {local}, contract {contract}")]
    HashMismatch {
        /// Digest computed locally.
        local: B256,
        /// Digest returned by `hashOrder`.
        contract: B256,
    },
}

/// [`Erc20Approvals`] backed by an alloy [`Provider`].
///
/// Approvals are sent from the provider's wallet, so the provider must be
/// built with the benefactor's signer.
#[derive(Debug, Clone)]
pub struct ProviderApprovals<P> {
    provider: P,
    spender: Address,
}

impl<P> ProviderApprovals<P> {
    /// Create approvals against `spender`.
    pub const fn new(provider: P, spender: Address) -> Self {
        Self { provider, spender }
    }

    /// Create approvals against the deployment's minting contract.
    pub const fn for_deployment(provider: P, deployment: &Deployment) -> Self {
        Self::new(provider, deployment.minting())
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> Erc20Approvals for ProviderApprovals<P>
where
    P: Provider + Clone + Send + Sync,
{
    type Error = ChainError;

    fn spender(&self) -> Address {
        self.spender
    }

    async fn allowance(&self, token: Address, owner: Address) -> Result<U256, Self::Error> {
        IERC20::new(token, self.provider.clone())
            .allowance(owner, self.spender)
            .call()
            .await
            .inspect_err(|e| warn!(%e, %token, "Failed to read allowance"))
            .map_err(Into::into)
    }

    #[instrument(skip_all, fields(%token, %amount))]
    async fn approve(
        &self,
        token: Address,
        amount: U256,
        confirmations: Option<u64>,
    ) -> Result<TxHash, Self::Error> {
        let pending = IERC20::new(token, self.provider.clone())
            .approve(self.spender, amount)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to send approval"))?;
        let tx_hash = *pending.tx_hash();
        debug!(%tx_hash, "Approval sent");

        if let Some(confirmations) = confirmations {
            pending.with_required_confirmations(confirmations).watch().await?;
            debug!(%tx_hash, confirmations, "Approval confirmed");
        }
        Ok(tx_hash)
    }

    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, Self::Error> {
        IERC20::new(token, self.provider.clone())
            .balanceOf(owner)
            .call()
            .await
            .map_err(Into::into)
    }

    async fn decimals(&self, token: Address) -> Result<u8, Self::Error> {
        IERC20::new(token, self.provider.clone()).decimals().call().await.map_err(Into::into)
    }
}

/// [`OrderVerifier`] calling `hashOrder` and `verifyOrder` on the minting
/// contract.
#[derive(Debug, Clone)]
pub struct ProviderVerifier<P> {
    provider: P,
    deployment: Deployment,
}

impl<P> ProviderVerifier<P> {
    /// Create a verifier for the deployment's minting contract.
    pub const fn new(provider: P, deployment: Deployment) -> Self {
        Self { provider, deployment }
    }
}

impl<P> ProviderVerifier<P>
where
    P: Provider + Clone + Send + Sync,
{
    /// Read the contract's digest for the order.
    pub async fn contract_hash(&self, order: &SignedOrder) -> Result<B256, ChainError> {
        let minting = self.deployment.minting();
        let hash = match order.order().to_minting_order(self.deployment.schema())? {
            MintingOrder::Usdtb(order) => {
                UsdtbMinting::new(minting, self.provider.clone()).hashOrder(order).call().await?
            }
            MintingOrder::Ustb(order) => {
                UstbMinting::new(minting, self.provider.clone()).hashOrder(order).call().await?
            }
        };
        Ok(hash)
    }
}

impl<P> OrderVerifier for ProviderVerifier<P>
where
    P: Provider + Clone + Send + Sync,
{
    type Error = ChainError;

    #[instrument(skip_all, fields(order_id = %order.order().order_id))]
    async fn verify_order(&self, order: &SignedOrder) -> Result<(), Self::Error> {
        let contract = self.contract_hash(order).await?;
        let local = order.signing_hash();
        if contract != local {
            warn!(%local, %contract, "Order hash mismatch");
            return Err(ChainError::HashMismatch { local, contract });
        }

        let minting = self.deployment.minting();
        let signature = order.signature();
        match order.order().to_minting_order(self.deployment.schema())? {
            MintingOrder::Usdtb(order) => {
                let signature = UsdtbMinting::Signature {
                    signature_type: signature.signature_type.as_u8(),
                    signature_bytes: signature.signature_bytes.clone(),
                };
                UsdtbMinting::new(minting, self.provider.clone())
                    .verifyOrder(order, signature)
                    .call()
                    .await?;
            }
            MintingOrder::Ustb(order) => {
                let signature = UstbMinting::Signature {
                    signature_type: signature.signature_type.as_u8(),
                    signature_bytes: signature.signature_bytes.clone(),
                };
                UstbMinting::new(minting, self.provider.clone())
                    .verifyOrder(order, signature)
                    .call()
                    .await?;
            }
        }
        debug!("Order verified on chain");
        Ok(())
    }
}
