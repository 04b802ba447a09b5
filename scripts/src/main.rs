//! Entry point for the deploy scripts

use clap::Parser;
use scripts::{cli::Cli, commands::deploy_token, config::NetworkProfile, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load a `.env` file if one is present, then let the CLI's
    // env-backed arguments pick the values up
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().pretty().init();

    let cli = Cli::parse();
    let profile = NetworkProfile::resolve(&cli);

    deploy_token(&cli.contract, &profile).await
}
