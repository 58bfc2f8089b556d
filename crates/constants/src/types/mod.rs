mod environment;
pub use environment::Environment;

mod known;
pub use known::{KnownDeployments, ParseDeploymentError};

mod schema;
pub use schema::OrderSchema;

mod tokens;
pub use tokens::{Collateral, ParseCollateralError, TokenRecord};

use alloy::primitives::Address;
use std::borrow::Cow;

/// A minting deployment.
///
/// Everything the client needs to talk to one minting contract: where it
/// lives, the EIP-712 domain orders are signed under, the RFQ endpoint that
/// quotes and relays for it, and the shape of its `Order` struct. Variants
/// across environments are data, not code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Ticker of the minted token.
    token_name: Cow<'static, str>,
    /// Environment this deployment belongs to.
    environment: Environment,
    /// Chain ID of the minting contract.
    chain_id: u64,
    /// Minting contract address. Also the ERC-20 spender for approvals.
    minting: Address,
    /// EIP-712 domain name.
    domain_name: Cow<'static, str>,
    /// EIP-712 domain version.
    domain_version: Cow<'static, str>,
    /// Base URL of the RFQ service. Must end with a `/`.
    rfq_url: Cow<'static, str>,
    /// Address of the minted token, needed for redemptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minted_token: Option<Address>,
    /// Order struct layout expected by the minting contract.
    schema: OrderSchema,
}

impl Deployment {
    /// Create a new deployment record.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        token_name: Cow<'static, str>,
        environment: Environment,
        chain_id: u64,
        minting: Address,
        domain_name: Cow<'static, str>,
        domain_version: Cow<'static, str>,
        rfq_url: Cow<'static, str>,
        minted_token: Option<Address>,
        schema: OrderSchema,
    ) -> Self {
        Self {
            token_name,
            environment,
            chain_id,
            minting,
            domain_name,
            domain_version,
            rfq_url,
            minted_token,
            schema,
        }
    }

    /// Get the hard-coded local test deployment.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::test_utils::TEST_DEPLOYMENT
    }

    /// Get the minted token ticker.
    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    /// Get the environment.
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the minting contract address.
    pub const fn minting(&self) -> Address {
        self.minting
    }

    /// Get the EIP-712 domain name.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Get the EIP-712 domain version.
    pub fn domain_version(&self) -> &str {
        &self.domain_version
    }

    /// Get the RFQ base URL as a string.
    pub fn rfq_url_str(&self) -> &str {
        &self.rfq_url
    }

    /// Parse the RFQ base URL.
    pub fn rfq_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.rfq_url)
    }

    /// Get the minted token address, if known.
    pub const fn minted_token(&self) -> Option<Address> {
        self.minted_token
    }

    /// Get the order schema.
    pub const fn schema(&self) -> OrderSchema {
        self.schema
    }

    /// Override the minting contract address.
    pub const fn with_minting(mut self, minting: Address) -> Self {
        self.minting = minting;
        self
    }

    /// Override the RFQ base URL. A trailing `/` is appended if missing, so
    /// that endpoint paths join onto it rather than replacing its last
    /// segment.
    pub fn with_rfq_url(mut self, rfq_url: impl Into<String>) -> Self {
        let mut rfq_url = rfq_url.into();
        if !rfq_url.ends_with('/') {
            rfq_url.push('/');
        }
        self.rfq_url = Cow::Owned(rfq_url);
        self
    }

    /// Set the minted token address.
    pub const fn with_minted_token(mut self, minted_token: Address) -> Self {
        self.minted_token = Some(minted_token);
        self
    }
}

impl TryFrom<KnownDeployments> for Deployment {
    type Error = ParseDeploymentError;

    fn try_from(known: KnownDeployments) -> Result<Self, Self::Error> {
        match known {
            KnownDeployments::UsdtbProduction => Ok(crate::usdtb::PRODUCTION),
            KnownDeployments::UsdtbStaging => Ok(crate::usdtb::STAGING),
            KnownDeployments::UstbStaging => Ok(crate::ustb::STAGING),
            #[cfg(any(test, feature = "test-utils"))]
            KnownDeployments::Test => Ok(crate::test_utils::TEST_DEPLOYMENT),
        }
    }
}
