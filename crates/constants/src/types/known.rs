use crate::{Environment, OrderSchema};
use std::str::FromStr;

/// The list of known deployments as a string.
const KNOWN_DEPLOYMENTS: &str = "usdtb-production, usdtb-staging, ustb-staging";

/// Error type for resolving a deployment from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDeploymentError {
    /// The deployment name is not supported.
    #[error("deployment {0} is not known. supported deployments: {KNOWN_DEPLOYMENTS}")]
    NotSupported(String),
    /// The environment name is not supported.
    #[error("environment {0} is not known. expected production or staging")]
    UnknownEnvironment(String),
    /// The schema name is not supported.
    #[error("order schema {0} is not known. expected usdtb or ustb")]
    UnknownSchema(String),
}

/// Deployments with hard-coded constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KnownDeployments {
    /// USDtb on mainnet, production relay.
    UsdtbProduction,
    /// USDtb staging contract and relay.
    UsdtbStaging,
    /// USTB staging contract and relay.
    UstbStaging,
    /// Local test deployment.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownDeployments {
    /// Select a deployment from its schema and environment.
    pub fn select(
        schema: OrderSchema,
        environment: Environment,
    ) -> Result<Self, ParseDeploymentError> {
        match (schema, environment) {
            (OrderSchema::Usdtb, Environment::Production) => Ok(Self::UsdtbProduction),
            (OrderSchema::Usdtb, Environment::Staging) => Ok(Self::UsdtbStaging),
            (OrderSchema::Ustb, Environment::Staging) => Ok(Self::UstbStaging),
            (schema, environment) => {
                Err(ParseDeploymentError::NotSupported(format!("{schema}-{environment}")))
            }
        }
    }
}

impl FromStr for KnownDeployments {
    type Err = ParseDeploymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "usdtb-production" | "usdtb" => Ok(Self::UsdtbProduction),
            "usdtb-staging" => Ok(Self::UsdtbStaging),
            "ustb-staging" => Ok(Self::UstbStaging),
            _ => Err(ParseDeploymentError::NotSupported(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("USDtb-Staging".parse(), Ok(KnownDeployments::UsdtbStaging));
        assert_eq!(" ustb-staging ".parse(), Ok(KnownDeployments::UstbStaging));
        assert!("ethena".parse::<KnownDeployments>().is_err());
    }

    #[test]
    fn select_rejects_unknown_pairs() {
        assert_eq!(
            KnownDeployments::select(OrderSchema::Usdtb, Environment::Production),
            Ok(KnownDeployments::UsdtbProduction)
        );
        let err = KnownDeployments::select(OrderSchema::Ustb, Environment::Production).unwrap_err();
        assert_eq!(err, ParseDeploymentError::NotSupported("ustb-production".into()));
    }
}
