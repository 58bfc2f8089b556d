use crate::AmountError;

/// An error that can occur when signing an order.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The order has no id.
    #[error("order id is empty")]
    EmptyOrderId,
    /// An amount does not fit the width of its field in the signed struct.
    #[error("{field} out of range: {source}")]
    AmountOutOfRange {
        /// Name of the order field.
        field: &'static str,
        /// Underlying error.
        #[source]
        source: AmountError,
    },
    /// Error signing the order hash.
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
}
