//! Definitions of CLI arguments for the deploy scripts
//!
//! Every argument has an environment variable fallback, so the script can be
//! driven entirely from the environment (or a `.env` file) with no flags.

use clap::Parser;

use crate::config::NetworkSelector;

/// Deploy the LiquidInno token contract and print its address
#[derive(Parser)]
pub struct Cli {
    /// The network profile to deploy to
    #[arg(short, long, value_enum, env = "DEPLOY_NETWORK", default_value_t = NetworkSelector::Devnet)]
    pub network: NetworkSelector,

    /// RPC URL of the live network
    ///
    /// Unused when the devnet profile is selected
    #[arg(short, long, env = "INFURA_API_KEY")]
    pub rpc_url: Option<String>,

    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PRI_KEY")]
    pub priv_key: Option<String>,

    /// Block explorer API key
    ///
    /// Resolved for parity with the deployment environment, but never used:
    /// these scripts do not submit contracts for explorer verification
    #[arg(short, long, env = "API_KEY")]
    pub api_key: Option<String>,

    /// Name of the compiled contract artifact to deploy
    #[arg(short, long, default_value = "LiquidInno")]
    pub contract: String,
}
