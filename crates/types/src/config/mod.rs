mod error;
pub use error::ConfigError;

pub mod env_utils;

use crate::ApprovalPolicy;
use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use env_utils::{parse_address_var, parse_bool, parse_u64, parse_url};
use rfq_mint_constants::{Deployment, Environment, KnownDeployments, OrderSchema};
use std::time::Duration;
use url::Url;

/// Default per-request timeout for RFQ calls.
pub const DEFAULT_RFQ_TIMEOUT: Duration = Duration::from_secs(60);

const PRIVATE_KEY: &str = "PRIVATE_KEY";
const RPC_URL: &str = "RPC_URL";
const MINT_ENV: &str = "MINT_ENV";
const MINT_DEPLOYMENT: &str = "MINT_DEPLOYMENT";
const RFQ_URL: &str = "RFQ_URL";
const MINTING_ADDRESS: &str = "MINTING_ADDRESS";
const BENEFACTOR: &str = "BENEFACTOR";
const BENEFICIARY: &str = "BENEFICIARY";
const ALLOW_INFINITE_APPROVALS: &str = "ALLOW_INFINITE_APPROVALS";
const APPROVAL_CONFIRMATIONS: &str = "APPROVAL_CONFIRMATIONS";
const VERIFY_ON_CHAIN: &str = "VERIFY_ON_CHAIN";
const RFQ_TIMEOUT_SECS: &str = "RFQ_TIMEOUT_SECS";

/// Everything a mint run needs, loaded once at startup.
///
/// Secrets live here and are handed to the components that need them.
#[derive(Debug, Clone)]
pub struct MintConfig {
    deployment: Deployment,
    rpc_url: Url,
    signer: PrivateKeySigner,
    benefactor: Address,
    beneficiary: Address,
    approval: ApprovalPolicy,
    verify_on_chain: bool,
    rfq_timeout: Duration,
}

impl MintConfig {
    /// Load from the process environment, reading `.env` first if present.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `PRIVATE_KEY` | required |
    /// | `RPC_URL` | required |
    /// | `MINT_ENV` | `staging` |
    /// | `MINT_DEPLOYMENT` | `usdtb` |
    /// | `RFQ_URL` | deployment relay |
    /// | `MINTING_ADDRESS` | deployment contract |
    /// | `BENEFACTOR` | signer address |
    /// | `BENEFICIARY` | benefactor |
    /// | `ALLOW_INFINITE_APPROVALS` | `false` |
    /// | `APPROVAL_CONFIRMATIONS` | `1`, `0` disables waiting |
    /// | `VERIFY_ON_CHAIN` | `false` |
    /// | `RFQ_TIMEOUT_SECS` | `60` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(env_utils::load_string_opt)
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| ConfigError::missing(key));

        let signer: PrivateKeySigner = required(PRIVATE_KEY)?.trim().parse()?;
        let rpc_url = parse_url(RPC_URL, &required(RPC_URL)?)?;

        let environment: Environment = get(MINT_ENV).as_deref().unwrap_or("staging").parse()?;
        let schema: OrderSchema = get(MINT_DEPLOYMENT).as_deref().unwrap_or("usdtb").parse()?;
        let mut deployment = Deployment::try_from(KnownDeployments::select(schema, environment)?)?;

        if let Some(rfq_url) = get(RFQ_URL) {
            parse_url(RFQ_URL, &rfq_url)?;
            deployment = deployment.with_rfq_url(rfq_url.trim());
        }
        if let Some(minting) = get(MINTING_ADDRESS) {
            deployment = deployment.with_minting(parse_address_var(MINTING_ADDRESS, &minting)?);
        }

        let benefactor = get(BENEFACTOR)
            .map(|v| parse_address_var(BENEFACTOR, &v))
            .transpose()?
            .unwrap_or_else(|| signer.address());
        let beneficiary = get(BENEFICIARY)
            .map(|v| parse_address_var(BENEFICIARY, &v))
            .transpose()?
            .unwrap_or(benefactor);

        let mut approval = ApprovalPolicy::default();
        if get(ALLOW_INFINITE_APPROVALS)
            .map(|v| parse_bool(ALLOW_INFINITE_APPROVALS, &v))
            .transpose()?
            .unwrap_or(false)
        {
            approval = approval.unlimited();
        }
        if let Some(confirmations) = get(APPROVAL_CONFIRMATIONS) {
            let confirmations = parse_u64(APPROVAL_CONFIRMATIONS, &confirmations)?;
            approval = approval.with_confirmations((confirmations > 0).then_some(confirmations));
        }

        let verify_on_chain = get(VERIFY_ON_CHAIN)
            .map(|v| parse_bool(VERIFY_ON_CHAIN, &v))
            .transpose()?
            .unwrap_or(false);
        let rfq_timeout = get(RFQ_TIMEOUT_SECS)
            .map(|v| parse_u64(RFQ_TIMEOUT_SECS, &v))
            .transpose()?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RFQ_TIMEOUT);

        Ok(Self {
            deployment,
            rpc_url,
            signer,
            benefactor,
            beneficiary,
            approval,
            verify_on_chain,
            rfq_timeout,
        })
    }

    /// Get the deployment.
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Get the chain RPC URL.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Get the signer.
    pub const fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Get the benefactor address.
    pub const fn benefactor(&self) -> Address {
        self.benefactor
    }

    /// Get the beneficiary address.
    pub const fn beneficiary(&self) -> Address {
        self.beneficiary
    }

    /// Get the approval policy.
    pub const fn approval(&self) -> ApprovalPolicy {
        self.approval
    }

    /// True if signatures should be checked against the contract before
    /// submission.
    pub const fn verify_on_chain(&self) -> bool {
        self.verify_on_chain
    }

    /// Get the RFQ request timeout.
    pub const fn rfq_timeout(&self) -> Duration {
        self.rfq_timeout
    }
}
