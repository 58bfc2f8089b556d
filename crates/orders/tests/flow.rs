//! Integration tests for [`MintFlow`].
use alloy::primitives::{Address, U256};
use rfq_mint_constants::{test_utils::TEST_COLLATERAL_RECORD, Deployment};
use rfq_mint_orders::{
    AllowanceOutcome, ApprovalError, MintFlow, MintFlowError, MintRequest, OrderBuilder,
};
use rfq_mint_test_utils::{
    mocks::{ApprovalCall, MockApprovals, MockOrderSubmitter, MockQuoteSource, MockVerifier},
    test_constants::{TEST_COLLATERAL, TEST_MINTED_TOKEN, TEST_MINTING},
    test_quote,
    users::{TEST_SIGNERS, TEST_USERS},
};
use rfq_mint_types::{now_unix, ApprovalPolicy, Side};
use tokio_util::sync::CancellationToken;

fn request(size: &str) -> MintRequest {
    MintRequest::mint(TEST_COLLATERAL_RECORD, size)
}

#[tokio::test]
async fn mint_with_sufficient_allowance_submits_without_approval() {
    let quotes = MockQuoteSource::new([test_quote("q1", 30_000_000)]);
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_allowance(TEST_COLLATERAL, U256::from(30_000_000u64));
    let submitter = MockOrderSubmitter::new("0xabc");
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        quotes.clone(),
        approvals.clone(),
        submitter.clone(),
        Deployment::test(),
    );

    let before = now_unix();
    let receipt = flow.run(request("30")).await.unwrap();
    let after = now_unix();

    assert_eq!(receipt.tx, "0xabc");
    assert!(!receipt.verified);
    assert_eq!(
        receipt.approval,
        AllowanceOutcome::Sufficient { allowance: U256::from(30_000_000u64) }
    );
    assert!(approvals.approvals().is_empty());

    let order = receipt.order.order();
    assert_eq!(order.order_id, "q1");
    assert_eq!(order.order_type, Side::Mint);
    assert!(order.expiry >= before + 60 && order.expiry <= after + 60);
    assert_eq!(order.nonce, order.expiry);
    assert_eq!(order.benefactor, TEST_USERS[0]);
    assert_eq!(order.beneficiary, TEST_USERS[0]);
    assert_eq!(order.collateral_asset, TEST_COLLATERAL);
    assert_eq!(order.collateral_amount.value(), U256::from(30_000_000u64));
    assert_eq!(receipt.order.signer(), TEST_USERS[0]);

    let requests = quotes.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].pair, "TUSD/USDtb");
    assert_eq!(requests[0].size, "30");
    assert_eq!(requests[0].benefactor, Some(TEST_USERS[0]));
    assert_eq!(submitter.submitted_orders(), vec![receipt.order]);
}

#[tokio::test]
async fn insufficient_allowance_approves_exact_amount_once() {
    let approvals = MockApprovals::new(TEST_MINTING);
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 30_000_000), test_quote("q2", 30_000_000)]),
        approvals.clone(),
        MockOrderSubmitter::default(),
        Deployment::test(),
    );

    let receipt = flow.run(request("30")).await.unwrap();
    assert!(matches!(
        receipt.approval,
        AllowanceOutcome::Approved { previous, amount, .. }
            if previous == U256::ZERO && amount == U256::from(30_000_000u64)
    ));
    assert_eq!(
        approvals.approvals(),
        vec![ApprovalCall {
            token: TEST_COLLATERAL,
            amount: U256::from(30_000_000u64),
            confirmations: Some(1),
        }]
    );

    // the second run reads the approved allowance and does not approve again
    let receipt = flow.run(request("30")).await.unwrap();
    assert_eq!(receipt.approval.tx_hash(), None);
    assert_eq!(approvals.approvals().len(), 1);
    assert_eq!(approvals.allowance_reads(), 2);
}

#[tokio::test]
async fn unlimited_policy_approves_max() {
    let approvals = MockApprovals::new(TEST_MINTING);
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 30_000_000)]),
        approvals.clone(),
        MockOrderSubmitter::default(),
        Deployment::test(),
    )
    .with_policy(ApprovalPolicy::default().unlimited().with_confirmations(None));

    flow.run(request("30")).await.unwrap();
    let calls = approvals.approvals();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount, U256::MAX);
    assert_eq!(calls[0].confirmations, None);
}

#[tokio::test]
async fn redeem_approves_minted_token() {
    let approvals = MockApprovals::new(TEST_MINTING);
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 500)]),
        approvals.clone(),
        submitter.clone(),
        Deployment::test(),
    );

    let receipt = flow.run(MintRequest::redeem(TEST_COLLATERAL_RECORD, "25")).await.unwrap();
    assert_eq!(receipt.order.order().order_type, Side::Redeem);
    assert_eq!(approvals.approvals()[0].token, TEST_MINTED_TOKEN);
    assert_eq!(approvals.approvals()[0].amount, U256::from(500));
}

#[tokio::test]
async fn custom_builder_sets_parties() {
    let multisig = Address::repeat_byte(0x77);
    let beneficiary = Address::repeat_byte(0x78);
    let quotes = MockQuoteSource::new([test_quote("q1", 1)]);
    let flow = MintFlow::new(
        TEST_SIGNERS[1].clone(),
        quotes.clone(),
        MockApprovals::new(TEST_MINTING)
            .with_approver(TEST_USERS[1])
            .with_owner_allowance(TEST_COLLATERAL, multisig, U256::MAX),
        MockOrderSubmitter::default(),
        Deployment::test(),
    )
    .with_builder(OrderBuilder::new(multisig).with_beneficiary(beneficiary));

    let receipt = flow.run(request("1")).await.unwrap();
    assert_eq!(receipt.order.order().benefactor, multisig);
    assert_eq!(receipt.order.order().beneficiary, beneficiary);
    assert_eq!(receipt.order.signer(), TEST_USERS[1]);
    assert_eq!(quotes.requests()[0].benefactor, Some(multisig));
}

#[tokio::test]
async fn foreign_benefactor_is_never_approved_for() {
    let multisig = Address::repeat_byte(0x77);
    let approvals = MockApprovals::new(TEST_MINTING)
        .with_approver(TEST_USERS[1])
        .with_owner_allowance(TEST_COLLATERAL, multisig, U256::from(5))
        .with_allowance(TEST_COLLATERAL, U256::MAX);
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[1].clone(),
        MockQuoteSource::new([test_quote("q1", 30_000_000), test_quote("q2", 30_000_000)]),
        approvals.clone(),
        submitter.clone(),
        Deployment::test(),
    )
    .with_builder(OrderBuilder::new(multisig));

    // the signer's own allowance is irrelevant, the multisig's is read
    for _ in 0..2 {
        let err = flow.run(request("30")).await.unwrap_err();
        assert!(matches!(
            err,
            MintFlowError::Approval(ApprovalError::ForeignOwner { owner, approver, allowance, requested })
                if owner == multisig
                    && approver == TEST_USERS[1]
                    && allowance == U256::from(5)
                    && requested == U256::from(30_000_000u64)
        ));
    }
    assert!(approvals.approvals().is_empty());
    assert_eq!(approvals.allowance_reads(), 2);
    assert_eq!(approvals.allowance_of(TEST_COLLATERAL, multisig), U256::from(5));
    assert!(submitter.submitted_orders().is_empty());
}

#[tokio::test]
async fn approval_is_visible_to_the_next_read() {
    let approvals = MockApprovals::new(TEST_MINTING).with_approver(TEST_USERS[2]);
    let flow = MintFlow::new(
        TEST_SIGNERS[2].clone(),
        MockQuoteSource::new([test_quote("q1", 7), test_quote("q2", 7)]),
        approvals.clone(),
        MockOrderSubmitter::default(),
        Deployment::test(),
    );

    let first = flow.run(request("7")).await.unwrap();
    assert!(first.approval.tx_hash().is_some());
    assert_eq!(approvals.allowance_of(TEST_COLLATERAL, TEST_USERS[2]), U256::from(7));
    // a different owner's allowance is untouched
    assert_eq!(approvals.allowance_of(TEST_COLLATERAL, TEST_USERS[0]), U256::ZERO);

    let second = flow.run(request("7")).await.unwrap();
    assert_eq!(second.approval, AllowanceOutcome::Sufficient { allowance: U256::from(7) });
    assert_eq!(approvals.approvals().len(), 1);
}

#[tokio::test]
async fn verification_runs_before_submission() {
    let verifier = MockVerifier::accepting();
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 10)]),
        MockApprovals::new(TEST_MINTING).with_allowance(TEST_COLLATERAL, U256::MAX),
        submitter.clone(),
        Deployment::test(),
    )
    .with_verifier(verifier.clone());

    let receipt = flow.run(request("10")).await.unwrap();
    assert!(receipt.verified);
    assert_eq!(verifier.verified_orders(), submitter.submitted_orders());

    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 10)]),
        MockApprovals::new(TEST_MINTING).with_allowance(TEST_COLLATERAL, U256::MAX),
        submitter.clone(),
        Deployment::test(),
    )
    .with_verifier(MockVerifier::rejecting("InvalidSignature"));

    let err = flow.run(request("10")).await.unwrap_err();
    assert!(matches!(err, MintFlowError::Verification(_)));
    assert!(submitter.submitted_orders().is_empty());
}

#[tokio::test]
async fn failures_are_surfaced() {
    // invalid size never reaches the quote source
    let quotes = MockQuoteSource::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        quotes.clone(),
        MockApprovals::new(TEST_MINTING),
        MockOrderSubmitter::default(),
        Deployment::test(),
    );
    assert!(matches!(flow.run(request("-5")).await, Err(MintFlowError::Size(_))));
    assert!(quotes.requests().is_empty());

    quotes.push_error("relay down");
    assert!(matches!(flow.run(request("5")).await, Err(MintFlowError::Quote(_))));

    // approval failure stops before submission
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 10)]),
        MockApprovals::new(TEST_MINTING).failing_approvals("reverted"),
        submitter.clone(),
        Deployment::test(),
    );
    assert!(matches!(
        flow.run(request("10")).await,
        Err(MintFlowError::Approval(ApprovalError::Approve(_)))
    ));
    assert!(submitter.submitted_orders().is_empty());

    // relay rejection keeps the message
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        MockQuoteSource::new([test_quote("q1", 10)]),
        MockApprovals::new(TEST_MINTING).with_allowance(TEST_COLLATERAL, U256::MAX),
        MockOrderSubmitter::failing("Quote expired"),
        Deployment::test(),
    );
    let err = flow.run(request("10")).await.unwrap_err();
    assert!(matches!(err, MintFlowError::Submission(_)));
    assert!(err.to_string().contains("Quote expired"));
}

#[tokio::test]
async fn cancelled_runs_do_nothing() {
    let quotes = MockQuoteSource::new([test_quote("q1", 10)]);
    let submitter = MockOrderSubmitter::default();
    let flow = MintFlow::new(
        TEST_SIGNERS[0].clone(),
        quotes.clone(),
        MockApprovals::new(TEST_MINTING),
        submitter.clone(),
        Deployment::test(),
    );

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = flow.run_with_cancel(request("10"), &cancel).await.unwrap_err();
    assert!(matches!(err, MintFlowError::Cancelled));
    assert!(quotes.requests().is_empty());
    assert!(submitter.submitted_orders().is_empty());
}
