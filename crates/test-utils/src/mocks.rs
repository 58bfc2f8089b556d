//! Mock implementations of the workflow seams.
use alloy::primitives::{Address, TxHash, U256};
use crate::users::TEST_USERS;
use rfq_mint_orders::{Erc20Approvals, OrderSubmitter, OrderVerifier, QuoteSource};
use rfq_mint_types::{Quote, QuoteRequest, SignedOrder};
use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

/// Error returned by the mocks when told to fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

/// A mock [`QuoteSource`] that hands out queued quotes and records requests.
#[derive(Debug, Clone, Default)]
pub struct MockQuoteSource {
    quotes: Arc<Mutex<VecDeque<Result<Quote, MockError>>>>,
    requests: Arc<Mutex<Vec<QuoteRequest>>>,
}

impl MockQuoteSource {
    /// Create a source that returns `quotes` in order.
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        let source = Self::default();
        source.quotes.lock().unwrap().extend(quotes.into_iter().map(Ok));
        source
    }

    /// Queue a failure.
    pub fn push_error(&self, message: &str) {
        self.quotes.lock().unwrap().push_back(Err(MockError(message.to_owned())));
    }

    /// Queue a quote.
    pub fn push_quote(&self, quote: Quote) {
        self.quotes.lock().unwrap().push_back(Ok(quote));
    }

    /// Get all received requests.
    pub fn requests(&self) -> Vec<QuoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl QuoteSource for MockQuoteSource {
    type Error = MockError;

    async fn get_quote(&self, request: &QuoteRequest) -> Result<Quote, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());
        self.quotes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(MockError("no quote queued".to_owned())))
    }
}

/// A mock [`OrderSubmitter`] that captures submitted orders.
#[derive(Debug, Clone)]
pub struct MockOrderSubmitter {
    orders: Arc<Mutex<Vec<SignedOrder>>>,
    response: Arc<Mutex<Result<String, MockError>>>,
}

impl Default for MockOrderSubmitter {
    fn default() -> Self {
        Self::new("0xabc")
    }
}

impl MockOrderSubmitter {
    /// Create a submitter that answers with `tx`.
    pub fn new(tx: &str) -> Self {
        Self {
            orders: Default::default(),
            response: Arc::new(Mutex::new(Ok(tx.to_owned()))),
        }
    }

    /// Create a submitter that rejects every order with `message`.
    pub fn failing(message: &str) -> Self {
        let submitter = Self::default();
        *submitter.response.lock().unwrap() = Err(MockError(message.to_owned()));
        submitter
    }

    /// Get all submitted orders.
    pub fn submitted_orders(&self) -> Vec<SignedOrder> {
        self.orders.lock().unwrap().clone()
    }
}

impl OrderSubmitter for MockOrderSubmitter {
    type Error = MockError;

    async fn submit_order(&self, order: &SignedOrder) -> Result<String, Self::Error> {
        self.orders.lock().unwrap().push(order.clone());
        self.response.lock().unwrap().clone()
    }
}

/// A recorded approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalCall {
    /// Token approved.
    pub token: Address,
    /// Amount approved.
    pub amount: U256,
    /// Confirmations requested.
    pub confirmations: Option<u64>,
}

#[derive(Debug, Default)]
struct Ledger {
    allowances: HashMap<(Address, Address), U256>,
    balances: HashMap<Address, U256>,
    decimals: HashMap<Address, u8>,
    approvals: Vec<ApprovalCall>,
    allowance_reads: usize,
    fail_approve: Option<String>,
}

/// A mock [`Erc20Approvals`].
///
/// Allowances are kept per token and owner. Approvals are sent from the
/// approver, [`TEST_USERS[0]`](crate::users::TEST_USERS) unless changed, and
/// overwrite the approver's allowance, so a read after an approval sees the
/// approved amount.
#[derive(Debug, Clone)]
pub struct MockApprovals {
    spender: Address,
    approver: Address,
    ledger: Arc<Mutex<Ledger>>,
}

impl MockApprovals {
    /// Create a mock with zero allowances and balances.
    pub fn new(spender: Address) -> Self {
        Self { spender, approver: TEST_USERS[0], ledger: Default::default() }
    }

    /// Send approvals from `approver`.
    pub const fn with_approver(mut self, approver: Address) -> Self {
        self.approver = approver;
        self
    }

    /// Set the approver's allowance on `token`.
    pub fn with_allowance(self, token: Address, allowance: U256) -> Self {
        let owner = self.approver;
        self.with_owner_allowance(token, owner, allowance)
    }

    /// Set the allowance `owner` has granted on `token`.
    pub fn with_owner_allowance(self, token: Address, owner: Address, allowance: U256) -> Self {
        self.ledger.lock().unwrap().allowances.insert((token, owner), allowance);
        self
    }

    /// Set the balance of `token`.
    pub fn with_balance(self, token: Address, balance: U256) -> Self {
        self.set_balance(token, balance);
        self
    }

    /// Set the decimals of `token`. Unset tokens report 6.
    pub fn with_decimals(self, token: Address, decimals: u8) -> Self {
        self.ledger.lock().unwrap().decimals.insert(token, decimals);
        self
    }

    /// Make every approval fail with `message`.
    pub fn failing_approvals(self, message: &str) -> Self {
        self.ledger.lock().unwrap().fail_approve = Some(message.to_owned());
        self
    }

    /// The account approvals are sent from.
    pub const fn approver(&self) -> Address {
        self.approver
    }

    /// Change the balance of `token`.
    pub fn set_balance(&self, token: Address, balance: U256) {
        self.ledger.lock().unwrap().balances.insert(token, balance);
    }

    /// The allowance `owner` has granted on `token`.
    pub fn allowance_of(&self, token: Address, owner: Address) -> U256 {
        self.ledger.lock().unwrap().allowances.get(&(token, owner)).copied().unwrap_or_default()
    }

    /// Get all approvals sent.
    pub fn approvals(&self) -> Vec<ApprovalCall> {
        self.ledger.lock().unwrap().approvals.clone()
    }

    /// Number of allowance reads.
    pub fn allowance_reads(&self) -> usize {
        self.ledger.lock().unwrap().allowance_reads
    }
}

impl Erc20Approvals for MockApprovals {
    type Error = MockError;

    fn spender(&self) -> Address {
        self.spender
    }

    async fn allowance(&self, token: Address, owner: Address) -> Result<U256, Self::Error> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.allowance_reads += 1;
        Ok(ledger.allowances.get(&(token, owner)).copied().unwrap_or_default())
    }

    async fn approve(
        &self,
        token: Address,
        amount: U256,
        confirmations: Option<u64>,
    ) -> Result<TxHash, Self::Error> {
        let mut ledger = self.ledger.lock().unwrap();
        if let Some(message) = &ledger.fail_approve {
            return Err(MockError(message.clone()));
        }
        ledger.approvals.push(ApprovalCall { token, amount, confirmations });
        ledger.allowances.insert((token, self.approver), amount);
        Ok(TxHash::with_last_byte(ledger.approvals.len() as u8))
    }

    async fn balance_of(&self, token: Address, _owner: Address) -> Result<U256, Self::Error> {
        Ok(self.ledger.lock().unwrap().balances.get(&token).copied().unwrap_or_default())
    }

    async fn decimals(&self, token: Address) -> Result<u8, Self::Error> {
        Ok(self.ledger.lock().unwrap().decimals.get(&token).copied().unwrap_or(6))
    }
}

/// A mock [`OrderVerifier`] that records orders and accepts or rejects all
/// of them.
#[derive(Debug, Clone, Default)]
pub struct MockVerifier {
    verified: Arc<Mutex<Vec<SignedOrder>>>,
    reject: Option<String>,
}

impl MockVerifier {
    /// A verifier that accepts every order.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// A verifier that rejects every order with `message`.
    pub fn rejecting(message: &str) -> Self {
        Self { verified: Default::default(), reject: Some(message.to_owned()) }
    }

    /// Get all orders seen.
    pub fn verified_orders(&self) -> Vec<SignedOrder> {
        self.verified.lock().unwrap().clone()
    }
}

impl OrderVerifier for MockVerifier {
    type Error = MockError;

    async fn verify_order(&self, order: &SignedOrder) -> Result<(), Self::Error> {
        self.verified.lock().unwrap().push(order.clone());
        match &self.reject {
            Some(message) => Err(MockError(message.clone())),
            None => Ok(()),
        }
    }
}
