use clap::{Args, Parser, Subcommand};
use rfq_mint_constants::Collateral;
use rfq_mint_types::Side;

/// Mint and redeem through an RFQ relay.
///
/// Configuration is read from the environment and `.env`.
#[derive(Debug, Parser)]
#[command(name = "rfq-mint", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Mint against collateral.
    Mint(OrderArgs),
    /// Redeem minted tokens for collateral.
    Redeem(OrderArgs),
    /// Print a quote without placing an order.
    Quote {
        /// MINT or REDEEM.
        #[arg(long, default_value = "MINT")]
        side: Side,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Place orders whenever the benefactor holds enough of the input token.
    Auto(AutoArgs),
    /// Check whether the benefactor may mint.
    Whitelist,
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Size in whole units of the input token.
    #[arg(long)]
    pub(crate) amount: String,
    /// Collateral token.
    #[arg(long, default_value = "USDC")]
    pub(crate) collateral: Collateral,
}

#[derive(Debug, Args)]
pub(crate) struct AutoArgs {
    /// Redeem instead of mint.
    #[arg(long)]
    pub(crate) redeem: bool,
    /// Collateral token.
    #[arg(long, default_value = "USDC")]
    pub(crate) collateral: Collateral,
    /// Smallest order, in whole units.
    #[arg(long)]
    pub(crate) min: Option<u64>,
    /// Largest order, in whole units.
    #[arg(long)]
    pub(crate) max: Option<u64>,
    /// Stop after this many rounds.
    #[arg(long)]
    pub(crate) rounds: Option<u64>,
    /// Seconds between balance checks.
    #[arg(long)]
    pub(crate) poll_secs: Option<u64>,
    /// Seconds to wait after each order.
    #[arg(long)]
    pub(crate) cooldown_secs: Option<u64>,
}
