//! Environment-derived [`ChainContext`]. Mirrors the workspace's other
//! `from_env` configuration loaders: read required variables with
//! `anyhow::Context` attached, fall back to a documented default where one
//! makes sense.

use anyhow::{Context, Result};
use indexer_domain::chain_context::ChainContext;
use semver::Version;
use std::env;

/// Loads the chain parameters the parser needs from the environment:
///
/// - `ACCOUNT_ADDRESS_PREFIX` (required) — the bech32 human-readable part,
///   e.g. `cro`.
/// - `STAKING_DENOM` (required) — the bond denomination, e.g. `basecro`.
/// - `COSMOS_SDK_VERSION` (optional, default `0.43.0`) — gates the
///   `MsgRecvPacket` ICS-20 payload decoding strategy.
pub fn chain_context_from_env() -> Result<ChainContext> {
    dotenvy::dotenv().ok();

    let account_address_prefix =
        env::var("ACCOUNT_ADDRESS_PREFIX").context("ACCOUNT_ADDRESS_PREFIX not set")?;
    let staking_denom = env::var("STAKING_DENOM").context("STAKING_DENOM not set")?;
    let cosmos_sdk_version = env::var("COSMOS_SDK_VERSION").unwrap_or_else(|_| "0.43.0".to_string());
    let cosmos_sdk_version = Version::parse(&cosmos_sdk_version)
        .with_context(|| format!("COSMOS_SDK_VERSION `{cosmos_sdk_version}` is not valid semver"))?;

    Ok(ChainContext::new(
        account_address_prefix,
        staking_denom,
        cosmos_sdk_version,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_account_address_prefix_is_an_error() {
        std::env::remove_var("ACCOUNT_ADDRESS_PREFIX");
        std::env::remove_var("STAKING_DENOM");
        assert!(chain_context_from_env().is_err());
    }
}
