use crate::Erc20Approvals;
use alloy::primitives::{Address, TxHash, U256};
use rfq_mint_constants::Deployment;
use rfq_mint_types::{ApprovalPolicy, Side, UnsignedOrder};
use tracing::{debug, info, instrument, warn};

type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Errors returned by [`ensure_allowance`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApprovalError {
    /// Reading the allowance failed.
    #[error("failed to read allowance: {0}")]
    Read(#[source] BoxError),
    /// Sending or confirming the approval failed.
    #[error("failed to approve: {0}")]
    Approve(#[source] BoxError),
    /// A redeem needs the minted token address, and the deployment has none.
    #[error("deployment {0} has no minted token address; cannot approve a redeem")]
    MissingMintedToken(String),
    /// The owner's allowance is too low and the approving account is a
    /// different address, so an approval would not raise it.
    #[error("allowance of {owner} is below {requested} and {approver} cannot approve for it")]
    ForeignOwner {
        /// The account the tokens are pulled from.
        owner: Address,
        /// The account approvals are sent from.
        approver: Address,
        /// The owner's current allowance.
        allowance: U256,
        /// The amount the order needs.
        requested: U256,
    },
}

/// The result of [`ensure_allowance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceOutcome {
    /// The existing allowance covered the request. No transaction was sent.
    Sufficient {
        /// The allowance read from the token.
        allowance: U256,
    },
    /// An approval was sent.
    Approved {
        /// The allowance before the approval.
        previous: U256,
        /// The amount approved.
        amount: U256,
        /// The approval transaction.
        tx_hash: TxHash,
    },
}

impl AllowanceOutcome {
    /// The approval transaction, if one was sent.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::Sufficient { .. } => None,
            Self::Approved { tx_hash, .. } => Some(*tx_hash),
        }
    }
}

/// The token and amount an order needs approved.
///
/// Mints pull collateral from the benefactor. Redeems pull the minted token.
pub fn approval_target(
    order: &UnsignedOrder,
    deployment: &Deployment,
) -> Result<(Address, U256), ApprovalError> {
    match order.order_type {
        Side::Mint => Ok((order.collateral_asset, order.collateral_amount.value())),
        Side::Redeem => {
            let token = deployment.minted_token().ok_or_else(|| {
                ApprovalError::MissingMintedToken(deployment.token_name().to_owned())
            })?;
            Ok((token, order.minted_amount.value()))
        }
    }
}

/// Make sure `owner` has approved at least `requested` of `token` to the
/// spender.
///
/// Approvals are sent from `approver`. Sends at most one approval, for
/// `requested` or `2^256 - 1` according to the policy, and only when
/// `approver` is the owner. Running it again after a successful approval is
/// a no-op.
#[instrument(skip_all, fields(%token, %owner, %requested))]
pub async fn ensure_allowance<A>(
    approvals: &A,
    token: Address,
    owner: Address,
    approver: Address,
    requested: U256,
    policy: &ApprovalPolicy,
) -> Result<AllowanceOutcome, ApprovalError>
where
    A: Erc20Approvals,
    A::Error: core::error::Error + Send + Sync + 'static,
{
    let allowance = approvals
        .allowance(token, owner)
        .await
        .map_err(|error| ApprovalError::Read(Box::new(error)))?;

    if allowance >= requested {
        debug!(%allowance, "Allowance sufficient");
        return Ok(AllowanceOutcome::Sufficient { allowance });
    }
    if owner != approver {
        warn!(%allowance, %approver, "Allowance insufficient and owner is not the approver");
        return Err(ApprovalError::ForeignOwner { owner, approver, allowance, requested });
    }

    let amount = policy.approval_amount(requested);
    info!(%allowance, %amount, "Allowance insufficient, approving");
    let tx_hash = approvals
        .approve(token, amount, policy.confirmations)
        .await
        .map_err(|error| ApprovalError::Approve(Box::new(error)))?;

    Ok(AllowanceOutcome::Approved { previous: allowance, amount, tx_hash })
}
