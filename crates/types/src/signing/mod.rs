mod domain;
pub use domain::SigningDomain;

mod error;
pub use error::SigningError;

mod order;
pub use order::{MintingOrder, SignedOrder, SigningOrder};

mod signature;
pub use signature::{OrderSignature, SignatureType};
