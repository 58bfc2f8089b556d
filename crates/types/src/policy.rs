use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// How much allowance to grant when the current allowance is too low.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAmount {
    /// Approve exactly the amount the order needs.
    #[default]
    Exact,
    /// Approve `2^256 - 1`.
    Unlimited,
}

impl ApprovalAmount {
    /// The amount to approve for a request of `requested`.
    pub const fn resolve(&self, requested: U256) -> U256 {
        match self {
            Self::Exact => requested,
            Self::Unlimited => U256::MAX,
        }
    }
}

/// Allowance approval behaviour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalPolicy {
    /// Amount to approve.
    pub amount: ApprovalAmount,
    /// Confirmations to wait for after broadcasting the approval. `None`
    /// returns as soon as the transaction is accepted by the node.
    pub confirmations: Option<u64>,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self { amount: ApprovalAmount::Exact, confirmations: Some(1) }
    }
}

impl ApprovalPolicy {
    /// Approve `2^256 - 1` instead of the exact amount.
    pub const fn unlimited(mut self) -> Self {
        self.amount = ApprovalAmount::Unlimited;
        self
    }

    /// Set the number of confirmations to wait for.
    pub const fn with_confirmations(mut self, confirmations: Option<u64>) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// The amount to approve for a request of `requested`.
    pub const fn approval_amount(&self, requested: U256) -> U256 {
        self.amount.resolve(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_amounts() {
        let requested = U256::from(30_000_000u64);
        let policy = ApprovalPolicy::default();
        assert_eq!(policy.approval_amount(requested), requested);
        assert_eq!(policy.confirmations, Some(1));
        assert_eq!(policy.unlimited().approval_amount(requested), U256::MAX);
    }
}
