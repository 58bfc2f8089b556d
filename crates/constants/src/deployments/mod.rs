/// Collateral token records shared by every deployment.
pub mod tokens;

/// USDtb minting deployments.
pub mod usdtb;

/// USTB minting deployments.
pub mod ustb;

/// Deployment constants for local tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
