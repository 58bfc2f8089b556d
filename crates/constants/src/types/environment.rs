use core::fmt;
use std::str::FromStr;

/// Deployment environment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production contracts and the public production relay.
    Production,
    /// Staging contracts and the public staging relay.
    #[default]
    Staging,
}

impl Environment {
    /// True for [`Environment::Production`].
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Staging => f.write_str("staging"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::ParseDeploymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "mainnet" => Ok(Self::Production),
            "staging" | "stage" | "development" => Ok(Self::Staging),
            other => Err(crate::ParseDeploymentError::UnknownEnvironment(other.to_owned())),
        }
    }
}
