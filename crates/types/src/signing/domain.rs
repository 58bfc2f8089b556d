use alloy::{
    primitives::{Address, U256},
    sol_types::Eip712Domain,
};
use rfq_mint_constants::Deployment;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The EIP-712 domain orders are signed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningDomain {
    /// Chain id.
    pub chain_id: u64,
    /// Domain name, e.g. `USDtbMinting`.
    pub name: String,
    /// The minting contract.
    pub verifying_contract: Address,
    /// Domain version.
    pub version: String,
}

impl SigningDomain {
    /// Build the alloy domain used for hashing.
    pub fn to_eip712_domain(&self) -> Eip712Domain {
        Eip712Domain {
            name: Some(Cow::Owned(self.name.clone())),
            version: Some(Cow::Owned(self.version.clone())),
            chain_id: Some(U256::from(self.chain_id)),
            verifying_contract: Some(self.verifying_contract),
            salt: None,
        }
    }
}

impl From<&Deployment> for SigningDomain {
    fn from(deployment: &Deployment) -> Self {
        Self {
            chain_id: deployment.chain_id(),
            name: deployment.domain_name().to_owned(),
            verifying_contract: deployment.minting(),
            version: deployment.domain_version().to_owned(),
        }
    }
}

impl From<SigningDomain> for Eip712Domain {
    fn from(domain: SigningDomain) -> Self {
        domain.to_eip712_domain()
    }
}
