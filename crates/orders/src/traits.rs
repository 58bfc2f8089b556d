use alloy::primitives::{Address, TxHash, U256};
use core::future::Future;
use rfq_mint_types::{Quote, QuoteRequest, SignedOrder};

/// A trait for fetching quotes.
///
/// Implemented by the RFQ relay client.
pub trait QuoteSource {
    /// The error type returned by quote requests.
    type Error;

    /// Request a quote.
    fn get_quote(
        &self,
        request: &QuoteRequest,
    ) -> impl Future<Output = Result<Quote, Self::Error>> + Send;
}

/// A trait for submitting signed orders to a relay.
pub trait OrderSubmitter {
    /// The error type returned by submission operations.
    type Error;

    /// Submit a signed order, returning the transaction identifier reported
    /// by the relay.
    fn submit_order(
        &self,
        order: &SignedOrder,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// ERC-20 reads and approvals against a fixed spender.
///
/// The spender is the minting contract of the deployment. The owner of an
/// approval is whoever signs the approval transaction.
pub trait Erc20Approvals {
    /// The error type returned by chain calls.
    type Error;

    /// The address allowances are granted to.
    fn spender(&self) -> Address;

    /// Read `allowance(owner, spender)` on `token`.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;

    /// Send `approve(spender, amount)` on `token`. When `confirmations` is
    /// set, resolve only after the transaction has that many confirmations.
    fn approve(
        &self,
        token: Address,
        amount: U256,
        confirmations: Option<u64>,
    ) -> impl Future<Output = Result<TxHash, Self::Error>> + Send;

    /// Read `balanceOf(owner)` on `token`.
    fn balance_of(
        &self,
        token: Address,
        owner: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;

    /// Read `decimals()` on `token`.
    fn decimals(&self, token: Address) -> impl Future<Output = Result<u8, Self::Error>> + Send;
}

/// Checks a signed order against the minting contract before submission.
pub trait OrderVerifier {
    /// The error type returned by verification.
    type Error;

    /// Verify the order. `Ok` means the contract computes the same digest
    /// and accepts the signature.
    fn verify_order(
        &self,
        order: &SignedOrder,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
