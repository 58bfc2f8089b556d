//! Integration tests for [`AutoMinter`].
use alloy::primitives::U256;
use rfq_mint_constants::{test_utils::TEST_COLLATERAL_RECORD, Deployment};
use rfq_mint_orders::{AutoMintConfig, AutoMintStep, AutoMinter, MintFlow, NoVerification};
use rfq_mint_test_utils::{
    mocks::{MockApprovals, MockOrderSubmitter, MockQuoteSource},
    test_constants::{TEST_COLLATERAL, TEST_MINTING},
    test_quote,
    users::TEST_SIGNERS,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

type TestMinter = AutoMinter<
    alloy::signers::local::PrivateKeySigner,
    MockQuoteSource,
    MockApprovals,
    MockOrderSubmitter,
    NoVerification,
>;

fn minter(
    quotes: &MockQuoteSource,
    approvals: &MockApprovals,
    submitter: &MockOrderSubmitter,
    rounds: u64,
) -> TestMinter {
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        quotes.clone(),
        approvals.clone(),
        submitter.clone(),
        Deployment::test(),
    );
    let config = AutoMintConfig::mint(TEST_COLLATERAL_RECORD)
        .with_sizes(100, 1_000)
        .with_intervals(Duration::from_millis(1), Duration::from_millis(1))
        .with_max_rounds(rounds);
    AutoMinter::new(flow, config)
}

#[tokio::test]
async fn below_minimum_waits() {
    let quotes = MockQuoteSource::default();
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_balance(TEST_COLLATERAL, U256::from(99_999_999u64));
    let submitter = MockOrderSubmitter::default();
    let minter = minter(&quotes, &approvals, &submitter, 3);

    let step = minter.step(&CancellationToken::new()).await.unwrap();
    assert_eq!(step, AutoMintStep::BelowMinimum { balance: U256::from(99) });

    let report = minter.run(CancellationToken::new()).await;
    assert_eq!(report.rounds, 3);
    assert!(report.submitted.is_empty());
    assert!(quotes.requests().is_empty());
}

#[tokio::test]
async fn quotes_capped_balance() {
    let quotes = MockQuoteSource::new([test_quote("q1", 1_000_000_000)]);
    // 5,000 whole units at 6 decimals, capped to 1,000
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_balance(TEST_COLLATERAL, U256::from(5_000_000_000u64))
        .with_allowance(TEST_COLLATERAL, U256::MAX);
    let submitter = MockOrderSubmitter::new("0xfeed");
    let minter = minter(&quotes, &approvals, &submitter, 1);

    let report = minter.run(CancellationToken::new()).await;
    assert_eq!(report.rounds, 1);
    assert_eq!(report.submitted, vec!["0xfeed".to_owned()]);
    assert_eq!(quotes.requests()[0].size, "1000");

    // below the cap, whole units less one are quoted
    approvals.set_balance(TEST_COLLATERAL, U256::from(250_500_000u64));
    quotes.push_quote(test_quote("q2", 249_000_000));
    let step = minter.step(&CancellationToken::new()).await.unwrap();
    assert!(matches!(step, AutoMintStep::Submitted(ref receipt) if receipt.tx == "0xfeed"));
    assert_eq!(quotes.requests()[1].size, "249");
}

#[tokio::test]
async fn keeps_one_unit_back() {
    let quotes = MockQuoteSource::new([test_quote("q1", 149_000_000)]);
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_balance(TEST_COLLATERAL, U256::from(150_000_000u64))
        .with_allowance(TEST_COLLATERAL, U256::MAX);
    let submitter = MockOrderSubmitter::default();
    let minter = minter(&quotes, &approvals, &submitter, 1);

    let step = minter.step(&CancellationToken::new()).await.unwrap();
    assert!(matches!(step, AutoMintStep::Submitted(_)));
    assert_eq!(quotes.requests()[0].size, "149");

    // exactly the minimum leaves nothing once the unit is kept back
    approvals.set_balance(TEST_COLLATERAL, U256::from(100_000_000u64));
    let step = minter.step(&CancellationToken::new()).await.unwrap();
    assert_eq!(step, AutoMintStep::BelowMinimum { balance: U256::from(100) });

    // an empty balance does not underflow
    approvals.set_balance(TEST_COLLATERAL, U256::ZERO);
    let step = minter.step(&CancellationToken::new()).await.unwrap();
    assert_eq!(step, AutoMintStep::BelowMinimum { balance: U256::ZERO });
    assert_eq!(quotes.requests().len(), 1);
}

#[tokio::test]
async fn errors_do_not_stop_the_loop() {
    let quotes = MockQuoteSource::default();
    quotes.push_error("relay down");
    quotes.push_quote(test_quote("q2", 100_000_000));
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_balance(TEST_COLLATERAL, U256::from(101_000_000u64))
        .with_allowance(TEST_COLLATERAL, U256::MAX);
    let submitter = MockOrderSubmitter::default();
    let minter = minter(&quotes, &approvals, &submitter, 2);

    let report = minter.run(CancellationToken::new()).await;
    assert_eq!(report.rounds, 2);
    assert_eq!(report.failures, 1);
    assert_eq!(report.submitted.len(), 1);
    assert_eq!(submitter.submitted_orders()[0].order().order_id, "q2");
}

#[tokio::test]
async fn stops_on_cancel() {
    let quotes = MockQuoteSource::default();
    let approvals = MockApprovals::new(TEST_MINTING);
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        quotes,
        approvals,
        submitter,
        Deployment::test(),
    );
    let config = AutoMintConfig::mint(TEST_COLLATERAL_RECORD);
    let minter = AutoMinter::new(flow, config);

    let cancel = CancellationToken::new();
    let handle = {
        let cancel = cancel.clone();
        tokio::spawn(async move { minter.run(cancel).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    let report = tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    assert_eq!(report.rounds, 1);
    assert!(report.submitted.is_empty());
}
