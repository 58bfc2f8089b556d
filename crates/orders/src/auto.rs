use crate::{
    Erc20Approvals, MintFlow, MintFlowError, MintReceipt, MintRequest, OrderSubmitter,
    OrderVerifier, QuoteSource,
};
use alloy::{
    primitives::{Address, U256},
    signers::Signer,
};
use rfq_mint_constants::TokenRecord;
use rfq_mint_types::Side;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Settings for [`AutoMinter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoMintConfig {
    /// Mint or redeem.
    pub side: Side,
    /// The collateral token.
    pub collateral: TokenRecord,
    /// Smallest size worth quoting, in whole units.
    pub min_size: u64,
    /// Largest size quoted in one order, in whole units.
    pub max_size: u64,
    /// Wait after a balance check that came up short.
    pub poll_interval: Duration,
    /// Wait after every attempt.
    pub cooldown: Duration,
    /// Stop after this many rounds. `None` runs until cancelled.
    pub max_rounds: Option<u64>,
}

impl AutoMintConfig {
    /// Mint settings for `collateral`: 66,000 to 5,000,000 units per order,
    /// balance polled every 10s, 13s between attempts.
    pub const fn mint(collateral: TokenRecord) -> Self {
        Self {
            side: Side::Mint,
            collateral,
            min_size: 66_000,
            max_size: 5_000_000,
            poll_interval: Duration::from_secs(10),
            cooldown: Duration::from_secs(13),
            max_rounds: None,
        }
    }

    /// Redeem settings for `collateral`: 25 to 9,900,000 units per order.
    pub const fn redeem(collateral: TokenRecord) -> Self {
        Self {
            side: Side::Redeem,
            collateral,
            min_size: 25,
            max_size: 9_900_000,
            poll_interval: Duration::from_secs(10),
            cooldown: Duration::from_secs(13),
            max_rounds: None,
        }
    }

    /// Set the size bounds.
    pub const fn with_sizes(mut self, min_size: u64, max_size: u64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the poll interval and cooldown.
    pub const fn with_intervals(mut self, poll_interval: Duration, cooldown: Duration) -> Self {
        self.poll_interval = poll_interval;
        self.cooldown = cooldown;
        self
    }

    /// Stop after `rounds` rounds.
    pub const fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

/// What one round of the loop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoMintStep {
    /// The balance, less one unit of headroom, was below the minimum size.
    BelowMinimum {
        /// Balance in whole units.
        balance: U256,
    },
    /// An order was placed.
    Submitted(Box<MintReceipt>),
}

/// Errors from a single round.
#[derive(Debug, thiserror::Error)]
pub enum AutoMintError {
    /// Reading the balance or decimals failed.
    #[error("failed to read balance: {0}")]
    Balance(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// A redeem needs the minted token address, and the deployment has none.
    #[error("deployment has no minted token address")]
    MissingMintedToken,
    /// The mint pipeline failed.
    #[error(transparent)]
    Flow(#[from] MintFlowError),
}

/// Totals reported when [`AutoMinter::run`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoMintReport {
    /// Rounds completed.
    pub rounds: u64,
    /// Transaction ids of submitted orders.
    pub submitted: Vec<String>,
    /// Rounds that ended in an error.
    pub failures: u64,
}

/// Places orders whenever the benefactor holds enough of the input token.
///
/// Each round reads the balance and keeps one whole unit back, so the
/// candidate size is `balance - 1`. Below `min_size` it waits `poll_interval`;
/// otherwise it quotes `min(max_size, balance - 1)` and runs the flow, then
/// waits `cooldown`. Errors are logged and the loop carries on.
#[derive(Debug, Clone)]
pub struct AutoMinter<Sign, Quotes, Approvals, Submit, Verify> {
    flow: MintFlow<Sign, Quotes, Approvals, Submit, Verify>,
    config: AutoMintConfig,
}

impl<Sign, Quotes, Approvals, Submit, Verify> AutoMinter<Sign, Quotes, Approvals, Submit, Verify> {
    /// Create a new auto minter.
    pub const fn new(
        flow: MintFlow<Sign, Quotes, Approvals, Submit, Verify>,
        config: AutoMintConfig,
    ) -> Self {
        Self { flow, config }
    }

    /// Get a reference to the flow.
    pub const fn flow(&self) -> &MintFlow<Sign, Quotes, Approvals, Submit, Verify> {
        &self.flow
    }

    /// Get a reference to the config.
    pub const fn config(&self) -> &AutoMintConfig {
        &self.config
    }

    fn rounds_done(&self, rounds: u64) -> bool {
        self.config.max_rounds.is_some_and(|max| rounds >= max)
    }

    fn input_token(&self) -> Result<Address, AutoMintError> {
        match self.config.side {
            Side::Mint => Ok(self.config.collateral.address()),
            Side::Redeem => {
                self.flow.deployment().minted_token().ok_or(AutoMintError::MissingMintedToken)
            }
        }
    }
}

impl<Sign, Quotes, Approvals, Submit, Verify> AutoMinter<Sign, Quotes, Approvals, Submit, Verify>
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
    /// Run one round: read the balance and place an order if it is large
    /// enough.
    #[instrument(skip_all)]
    pub async fn step(&self, cancel: &CancellationToken) -> Result<AutoMintStep, AutoMintError> {
        let token = self.input_token()?;
        let owner = self.flow.builder().benefactor();
        let approvals = self.flow.approvals();

        let raw = approvals
            .balance_of(token, owner)
            .await
            .map_err(|error| AutoMintError::Balance(Box::new(error)))?;
        let decimals = approvals
            .decimals(token)
            .await
            .map_err(|error| AutoMintError::Balance(Box::new(error)))?;
        let balance = raw / U256::from(10u64).pow(U256::from(decimals));
        let size = balance.saturating_sub(U256::from(1));

        if size < U256::from(self.config.min_size) {
            debug!(%balance, min_size = self.config.min_size, "Balance below minimum");
            return Ok(AutoMintStep::BelowMinimum { balance });
        }

        let size = size.min(U256::from(self.config.max_size));
        info!(%balance, %size, "Placing order");
        let request = MintRequest {
            side: self.config.side,
            collateral: self.config.collateral.clone(),
            size: size.to_string(),
        };
        let receipt = self.flow.run_with_cancel(request, cancel).await?;
        Ok(AutoMintStep::Submitted(Box::new(receipt)))
    }

    /// Run rounds until cancelled or `max_rounds` is reached.
    pub async fn run(&self, cancel: CancellationToken) -> AutoMintReport {
        let mut report = AutoMintReport::default();

        while !cancel.is_cancelled() && !self.rounds_done(report.rounds) {
            let wait = match self.step(&cancel).await {
                Ok(AutoMintStep::BelowMinimum { .. }) => self.config.poll_interval,
                Ok(AutoMintStep::Submitted(receipt)) => {
                    report.submitted.push(receipt.tx);
                    self.config.cooldown
                }
                Err(AutoMintError::Flow(MintFlowError::Cancelled)) => break,
                Err(error) => {
                    warn!(%error, "Auto mint round failed");
                    report.failures += 1;
                    self.config.cooldown
                }
            };
            report.rounds += 1;

            if self.rounds_done(report.rounds) {
                break;
            }
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        info!(
            rounds = report.rounds,
            submitted = report.submitted.len(),
            failures = report.failures,
            "Auto minter stopped"
        );
        report
    }
}
