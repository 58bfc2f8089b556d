use alloy::primitives::Address;
use chrono::Utc;
use rfq_mint_constants::DEFAULT_EXPIRY_OFFSET;
use rfq_mint_types::{now_unix, OrderError, Quote, Side, UnsignedOrder};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// How order nonces are assigned.
#[derive(Debug, Clone, Default)]
pub enum NonceStrategy {
    /// The nonce equals the expiry. Two orders built in the same second
    /// share a nonce.
    #[default]
    Expiry,
    /// Strictly increasing nonces derived from the current time in
    /// microseconds. Clones share the counter.
    Monotonic(Arc<AtomicU64>),
}

impl NonceStrategy {
    /// A fresh monotonic counter.
    pub fn monotonic() -> Self {
        Self::Monotonic(Arc::new(AtomicU64::new(0)))
    }

    fn next(&self, expiry: u64) -> u64 {
        match self {
            Self::Expiry => expiry,
            Self::Monotonic(last) => {
                let now = Utc::now().timestamp_micros() as u64;
                let prev = last
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                        Some(now.max(last + 1))
                    })
                    .unwrap_or_else(|prev| prev);
                now.max(prev + 1)
            }
        }
    }
}

/// Turns quotes into unsigned orders for a fixed pair of parties.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    benefactor: Address,
    beneficiary: Address,
    expiry_offset: u64,
    nonce: NonceStrategy,
}

impl OrderBuilder {
    /// Create a builder where the benefactor also receives the output.
    pub fn new(benefactor: Address) -> Self {
        Self {
            benefactor,
            beneficiary: benefactor,
            expiry_offset: DEFAULT_EXPIRY_OFFSET,
            nonce: NonceStrategy::default(),
        }
    }

    /// Create a builder from address strings, validating both.
    pub fn from_strs(benefactor: &str, beneficiary: &str) -> Result<Self, OrderError> {
        let benefactor = OrderError::address("benefactor", benefactor)?;
        let beneficiary = OrderError::address("beneficiary", beneficiary)?;
        Ok(Self::new(benefactor).with_beneficiary(beneficiary))
    }

    /// Set the beneficiary.
    pub const fn with_beneficiary(mut self, beneficiary: Address) -> Self {
        self.beneficiary = beneficiary;
        self
    }

    /// Set the number of seconds orders stay valid.
    pub const fn with_expiry_offset(mut self, expiry_offset: u64) -> Self {
        self.expiry_offset = expiry_offset;
        self
    }

    /// Set the nonce strategy.
    pub fn with_nonce_strategy(mut self, nonce: NonceStrategy) -> Self {
        self.nonce = nonce;
        self
    }

    /// Get the benefactor.
    pub const fn benefactor(&self) -> Address {
        self.benefactor
    }

    /// Get the beneficiary.
    pub const fn beneficiary(&self) -> Address {
        self.beneficiary
    }

    /// Get the expiry offset in seconds.
    pub const fn expiry_offset(&self) -> u64 {
        self.expiry_offset
    }

    /// Build a mint order.
    pub fn build_mint(
        &self,
        quote: Quote,
        collateral_asset: Address,
    ) -> Result<UnsignedOrder, OrderError> {
        self.build(Side::Mint, quote, collateral_asset)
    }

    /// Build a redeem order.
    pub fn build_redeem(
        &self,
        quote: Quote,
        collateral_asset: Address,
    ) -> Result<UnsignedOrder, OrderError> {
        self.build(Side::Redeem, quote, collateral_asset)
    }

    /// Build an order for `side`, expiring `expiry_offset` seconds from now.
    pub fn build(
        &self,
        side: Side,
        quote: Quote,
        collateral_asset: Address,
    ) -> Result<UnsignedOrder, OrderError> {
        self.build_at(side, quote, collateral_asset, now_unix())
    }

    /// Build an order as if the current time were `now`.
    pub fn build_at(
        &self,
        side: Side,
        quote: Quote,
        collateral_asset: Address,
        now: u64,
    ) -> Result<UnsignedOrder, OrderError> {
        let expiry = now + self.expiry_offset;
        let order = UnsignedOrder {
            order_id: quote.quote_id,
            order_type: side,
            expiry,
            nonce: self.nonce.next(expiry),
            benefactor: self.benefactor,
            beneficiary: self.beneficiary,
            collateral_asset,
            collateral_amount: quote.collateral_amount,
            minted_amount: quote.minted_amount,
        };
        order.validate()?;
        Ok(order)
    }
}
