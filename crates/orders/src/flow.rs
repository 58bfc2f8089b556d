use crate::{
    allowance::{approval_target, ensure_allowance, AllowanceOutcome, ApprovalError},
    Erc20Approvals, NoVerification, OrderBuilder, OrderSubmitter, OrderVerifier, QuoteSource,
};
use alloy::signers::Signer;
use core::future::Future;
use rfq_mint_constants::{Deployment, TokenRecord};
use rfq_mint_types::{
    AmountError, ApprovalPolicy, OrderError, Quote, QuoteRequest, Side, SignedOrder, SigningError,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Errors returned by [`MintFlow`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MintFlowError {
    /// The run was cancelled.
    #[error("cancelled")]
    Cancelled,
    /// The requested size is not a positive decimal.
    #[error("invalid size: {0}")]
    Size(#[from] AmountError),
    /// The order failed validation.
    #[error("invalid order: {0}")]
    Order(#[from] OrderError),
    /// Fetching the quote failed.
    #[error("failed to get quote: {0}")]
    Quote(#[source] BoxError),
    /// Checking or granting the allowance failed.
    #[error(transparent)]
    Approval(#[from] ApprovalError),
    /// Signing the order failed.
    #[error("order signing error: {0}")]
    Signing(#[from] SigningError),
    /// The contract rejected the order or signature.
    #[error("on-chain verification failed: {0}")]
    Verification(#[source] BoxError),
    /// The relay rejected the order, or could not be reached.
    #[error("order submission error: {0}")]
    Submission(#[source] BoxError),
}

/// One mint or redeem to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    /// Mint or redeem.
    pub side: Side,
    /// The collateral token.
    pub collateral: TokenRecord,
    /// Size in whole collateral units.
    pub size: String,
}

impl MintRequest {
    /// A mint of `size` whole units of `collateral`.
    pub fn mint(collateral: TokenRecord, size: impl Into<String>) -> Self {
        Self { side: Side::Mint, collateral, size: size.into() }
    }

    /// A redeem of `size` whole units of `collateral`.
    pub fn redeem(collateral: TokenRecord, size: impl Into<String>) -> Self {
        Self { side: Side::Redeem, collateral, size: size.into() }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    /// The quote the order was built from.
    pub quote: Quote,
    /// The signed order that was submitted.
    pub order: SignedOrder,
    /// What happened to the allowance.
    pub approval: AllowanceOutcome,
    /// True if the order was checked against the contract.
    pub verified: bool,
    /// Transaction identifier reported by the relay.
    pub tx: String,
}

/// Runs the quote, build, approve, sign, verify, submit pipeline.
///
/// `MintFlow` is generic over:
/// - `Sign`: A [`Signer`] holding the benefactor key
/// - `Quotes`: A [`QuoteSource`] for fetching quotes
/// - `Approvals`: An [`Erc20Approvals`] for reading and granting allowances
/// - `Submit`: An [`OrderSubmitter`] for submitting signed orders
/// - `Verify`: An [`OrderVerifier`], used only when set with
///   [`MintFlow::with_verifier`]
///
/// Steps run strictly one after another. Nothing is retried.
#[derive(Debug, Clone)]
pub struct MintFlow<Sign, Quotes, Approvals, Submit, Verify = NoVerification> {
    signer: Sign,
    quotes: Quotes,
    approvals: Approvals,
    submitter: Submit,
    verifier: Option<Verify>,
    deployment: Deployment,
    builder: OrderBuilder,
    policy: ApprovalPolicy,
}

impl<Sign, Quotes, Approvals, Submit> MintFlow<Sign, Quotes, Approvals, Submit>
where
    Sign: Signer,
{
    /// Create a new flow. The signer's address is the benefactor and the
    /// beneficiary until overridden with [`MintFlow::with_builder`].
    pub fn new(
        signer: Sign,
        quotes: Quotes,
        approvals: Approvals,
        submitter: Submit,
        deployment: Deployment,
    ) -> Self {
        let builder = OrderBuilder::new(signer.address());
        Self {
            signer,
            quotes,
            approvals,
            submitter,
            verifier: None,
            deployment,
            builder,
            policy: ApprovalPolicy::default(),
        }
    }
}

impl<Sign, Quotes, Approvals, Submit, Verify> MintFlow<Sign, Quotes, Approvals, Submit, Verify> {
    /// Verify orders on chain before submitting them.
    pub fn with_verifier<V>(self, verifier: V) -> MintFlow<Sign, Quotes, Approvals, Submit, V> {
        MintFlow {
            signer: self.signer,
            quotes: self.quotes,
            approvals: self.approvals,
            submitter: self.submitter,
            verifier: Some(verifier),
            deployment: self.deployment,
            builder: self.builder,
            policy: self.policy,
        }
    }

    /// Set the order builder.
    pub fn with_builder(mut self, builder: OrderBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Set the approval policy.
    pub const fn with_policy(mut self, policy: ApprovalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get a reference to the signer.
    pub const fn signer(&self) -> &Sign {
        &self.signer
    }

    /// Get a reference to the quote source.
    pub const fn quotes(&self) -> &Quotes {
        &self.quotes
    }

    /// Get a reference to the approvals client.
    pub const fn approvals(&self) -> &Approvals {
        &self.approvals
    }

    /// Get a reference to the submitter.
    pub const fn submitter(&self) -> &Submit {
        &self.submitter
    }

    /// Get a reference to the deployment.
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Get a reference to the order builder.
    pub const fn builder(&self) -> &OrderBuilder {
        &self.builder
    }

    /// Get the approval policy.
    pub const fn policy(&self) -> ApprovalPolicy {
        self.policy
    }
}

impl<Sign, Quotes, Approvals, Submit, Verify> MintFlow<Sign, Quotes, Approvals, Submit, Verify>
where
    Sign: Signer + Send + Sync,
    Quotes: QuoteSource + Send + Sync,
    Quotes::Error: core::error::Error + Send + Sync + 'static,
    Approvals: Erc20Approvals + Send + Sync,
    Approvals::Error: core::error::Error + Send + Sync + 'static,
    Submit: OrderSubmitter + Send + Sync,
    Submit::Error: core::error::Error + Send + Sync + 'static,
    Verify: OrderVerifier + Send + Sync,
    Verify::Error: core::error::Error + Send + Sync + 'static,
{
    /// Run the pipeline once.
    pub async fn run(&self, request: MintRequest) -> Result<MintReceipt, MintFlowError> {
        self.run_with_cancel(request, &CancellationToken::new()).await
    }

    /// Run the pipeline once, stopping at the next await point after `cancel`
    /// fires. An approval that was already mined stays in place.
    #[instrument(skip_all, fields(side = %request.side, size = %request.size))]
    pub async fn run_with_cancel(
        &self,
        request: MintRequest,
        cancel: &CancellationToken,
    ) -> Result<MintReceipt, MintFlowError> {
        let benefactor = self.builder.benefactor();
        let pair = format!("{}/{}", request.collateral.ticker(), self.deployment.token_name());
        let quote_request =
            QuoteRequest::new(pair, request.side, request.size)?.with_benefactor(benefactor);

        let quote = until_cancelled(cancel, self.quotes.get_quote(&quote_request))
            .await?
            .map_err(|error| MintFlowError::Quote(Box::new(error)))?;
        info!(quote_id = %quote.quote_id, "Received quote");

        let order = self.builder.build(request.side, quote.clone(), request.collateral.address())?;

        let (token, requested) = approval_target(&order, &self.deployment)?;
        let approval = until_cancelled(
            cancel,
            ensure_allowance(
                &self.approvals,
                token,
                benefactor,
                self.signer.address(),
                requested,
                &self.policy,
            ),
        )
        .await??;

        check_cancelled(cancel)?;
        let signed = order.sign(&self.deployment, &self.signer).await?;

        let verified = match &self.verifier {
            Some(verifier) => {
                until_cancelled(cancel, verifier.verify_order(&signed)).await?.map_err(|error| {
                    warn!(%error, "Order failed on-chain verification");
                    MintFlowError::Verification(Box::new(error))
                })?;
                true
            }
            None => false,
        };

        let tx = until_cancelled(cancel, self.submitter.submit_order(&signed))
            .await?
            .map_err(|error| MintFlowError::Submission(Box::new(error)))?;
        info!(%tx, order_id = %signed.order().order_id, "Order submitted");

        Ok(MintReceipt { quote, order: signed, approval, verified, tx })
    }
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), MintFlowError> {
    if cancel.is_cancelled() {
        return Err(MintFlowError::Cancelled);
    }
    Ok(())
}

async fn until_cancelled<F: Future>(
    cancel: &CancellationToken,
    fut: F,
) -> Result<F::Output, MintFlowError> {
    check_cancelled(cancel)?;
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(MintFlowError::Cancelled),
        output = fut => Ok(output),
    }
}
