//! Network profile resolution for the deploy scripts
//!
//! A profile is resolved exactly once, at process start, and passed by
//! reference into the components that need it. Resolution itself never
//! fails: a live profile with missing or malformed values is resolved
//! as-is, and the bad value surfaces later as a client-initialization,
//! signer-binding, or submission failure.

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::cli::Cli;

/// The statically declared set of network profiles
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum NetworkSelector {
    /// In-process development network requiring no external connectivity
    Devnet,
    /// The Ropsten testnet
    Ropsten,
}

impl Display for NetworkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSelector::Devnet => write!(f, "devnet"),
            NetworkSelector::Ropsten => write!(f, "ropsten"),
        }
    }
}

/// The active network configuration for one deployment run
///
/// Immutable once resolved. The live-profile fields stay `None` when the
/// corresponding environment values are absent; whether that is an error
/// is decided by the component that consumes the field.
pub struct NetworkProfile {
    /// Which of the declared networks is active
    pub selector: NetworkSelector,
    /// RPC endpoint URL of the live network
    pub rpc_url: Option<String>,
    /// Private key material of the deployer
    pub signing_key: Option<String>,
    /// Block explorer API key, resolved but unused (no explorer
    /// verification is performed by these scripts)
    pub explorer_api_key: Option<String>,
}

impl NetworkProfile {
    /// Resolve the active profile from the parsed CLI arguments
    pub fn resolve(cli: &Cli) -> Self {
        Self {
            selector: cli.network,
            rpc_url: cli.rpc_url.clone(),
            signing_key: cli.priv_key.clone(),
            explorer_api_key: cli.api_key.clone(),
        }
    }
}
