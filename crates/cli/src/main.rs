//! `rfq-mint`: sign and submit RFQ mint and redeem orders.

mod args;
use args::{AutoArgs, Cli, Command, OrderArgs};

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use clap::Parser;
use eyre::{bail, WrapErr};
use rfq_mint_client::RfqClient;
use rfq_mint_orders::{
    AutoMintConfig, AutoMinter, MintFlow, MintFlowError, MintRequest, OrderBuilder,
    OrderVerifier, ProviderApprovals, ProviderVerifier,
};
use rfq_mint_types::{MintConfig, QuoteRequest, Side};
use rfq_mint_ui::{ChainWhitelist, WhitelistSource};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = MintConfig::from_env().wrap_err("failed to load configuration")?;
    info!(
        token = config.deployment().token_name(),
        environment = %config.deployment().environment(),
        minting = %config.deployment().minting(),
        benefactor = %config.benefactor(),
        "Loaded configuration"
    );

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(config.signer().clone()))
        .connect_http(config.rpc_url().clone());

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping");
                cancel.cancel();
            }
        }
    });

    let client =
        RfqClient::for_deployment(config.deployment())?.with_timeout(config.rfq_timeout());

    let job = match cli.command {
        Command::Quote { side, order } => return quote(&config, &client, side, order).await,
        Command::Whitelist => return whitelist(&config, provider).await,
        Command::Mint(args) => {
            Job::Once(MintRequest::mint(args.collateral.record(), args.amount))
        }
        Command::Redeem(args) => {
            Job::Once(MintRequest::redeem(args.collateral.record(), args.amount))
        }
        Command::Auto(args) => Job::Auto(args),
    };

    let flow = MintFlow::new(
        config.signer().clone(),
        client.clone(),
        ProviderApprovals::for_deployment(provider.clone(), config.deployment()),
        client,
        config.deployment().clone(),
    )
    .with_builder(OrderBuilder::new(config.benefactor()).with_beneficiary(config.beneficiary()))
    .with_policy(config.approval());

    if config.verify_on_chain() {
        let verifier = ProviderVerifier::new(provider, config.deployment().clone());
        execute(flow.with_verifier(verifier), job, cancel).await
    } else {
        execute(flow, job, cancel).await
    }
}

/// Work that goes through the [`MintFlow`].
#[derive(Debug)]
enum Job {
    Once(MintRequest),
    Auto(AutoArgs),
}

async fn quote(
    config: &MintConfig,
    client: &RfqClient,
    side: Side,
    args: OrderArgs,
) -> eyre::Result<()> {
    let pair = args.collateral.pair(config.deployment().token_name());
    let request = QuoteRequest::new(pair, side, args.amount)?.with_benefactor(config.benefactor());
    let quote = client.get_quote(&request).await?;
    info!(
        quote_id = %quote.quote_id,
        collateral_amount = quote.collateral_amount.as_str(),
        minted_amount = quote.minted_amount.as_str(),
        "Quote"
    );
    Ok(())
}

async fn whitelist<P>(config: &MintConfig, provider: P) -> eyre::Result<()>
where
    P: Provider + Clone + Send + Sync,
{
    let whitelist = ChainWhitelist::new(provider, config.deployment().clone());
    let whitelisted = whitelist.is_whitelisted(config.benefactor()).await?;
    info!(benefactor = %config.benefactor(), whitelisted, "Whitelist status");
    if !whitelisted {
        bail!("{} is not a whitelisted benefactor", config.benefactor());
    }
    Ok(())
}

async fn execute<Quotes, Approvals, Submit, Verify>(
    flow: MintFlow<PrivateKeySigner, Quotes, Approvals, Submit, Verify>,
    job: Job,
    cancel: CancellationToken,
) -> eyre::Result<()>
where
    Quotes: rfq_mint_orders::QuoteSource + Send + Sync,
    Quotes::Error: core::error::Error + Send + Sync + 'static,
    Approvals: rfq_mint_orders::Erc20Approvals + Send + Sync,
    Approvals::Error: core::error::Error + Send + Sync + 'static,
    Submit: rfq_mint_orders::OrderSubmitter + Send + Sync,
    Submit::Error: core::error::Error + Send + Sync + 'static,
    Verify: OrderVerifier + Send + Sync,
    Verify::Error: core::error::Error + Send + Sync + 'static,
{
    let request = match job {
        Job::Once(request) => request,
        Job::Auto(args) => return auto(flow, args, cancel).await,
    };

    match flow.run_with_cancel(request, &cancel).await {
        Ok(receipt) => {
            info!(
                tx = %receipt.tx,
                order_id = %receipt.order.order().order_id,
                approval_tx = ?receipt.approval.tx_hash(),
                verified = receipt.verified,
                "Order submitted"
            );
            Ok(())
        }
        Err(MintFlowError::Cancelled) => {
            warn!("Cancelled before submission");
            Ok(())
        }
        Err(error) => Err(error).wrap_err("order failed"),
    }
}

async fn auto<Quotes, Approvals, Submit, Verify>(
    flow: MintFlow<PrivateKeySigner, Quotes, Approvals, Submit, Verify>,
    args: AutoArgs,
    cancel: CancellationToken,
) -> eyre::Result<()>
where
    Quotes: rfq_mint_orders::QuoteSource + Send + Sync,
    Quotes::Error: core::error::Error + Send + Sync + 'static,
    Approvals: rfq_mint_orders::Erc20Approvals + Send + Sync,
    Approvals::Error: core::error::Error + Send + Sync + 'static,
    Submit: rfq_mint_orders::OrderSubmitter + Send + Sync,
    Submit::Error: core::error::Error + Send + Sync + 'static,
    Verify: OrderVerifier + Send + Sync,
    Verify::Error: core::error::Error + Send + Sync + 'static,
{
    let collateral = args.collateral.record();
    let mut config = if args.redeem {
        AutoMintConfig::redeem(collateral)
    } else {
        AutoMintConfig::mint(collateral)
    };
    let min_size = args.min.unwrap_or(config.min_size);
    let max_size = args.max.unwrap_or(config.max_size);
    config = config.with_sizes(min_size, max_size);
    let poll_interval = args.poll_secs.map(Duration::from_secs).unwrap_or(config.poll_interval);
    let cooldown = args.cooldown_secs.map(Duration::from_secs).unwrap_or(config.cooldown);
    config = config.with_intervals(poll_interval, cooldown);
    if let Some(rounds) = args.rounds {
        config = config.with_max_rounds(rounds);
    }
    if config.min_size > config.max_size {
        bail!("--min {} is above --max {}", config.min_size, config.max_size);
    }

    let report = AutoMinter::new(flow, config).run(cancel).await;
    info!(
        rounds = report.rounds,
        submitted = report.submitted.len(),
        failures = report.failures,
        "Done"
    );
    Ok(())
}
