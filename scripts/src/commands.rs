//! Implementation of the deploy-token command

use crate::{
    config::NetworkProfile,
    deployer::deploy,
    errors::ScriptError,
    factory::{ContractId, DeployableHandle},
};

/// Deploy the named token contract on the active network and print the
/// deployed address.
///
/// Runs the full sequence once: registry lookup, signer binding,
/// submission, confirmation wait. Any failure propagates unmodified and
/// nothing is printed to stdout.
pub async fn deploy_token(
    contract_name: &str,
    profile: &NetworkProfile,
) -> Result<(), ScriptError> {
    let contract = ContractId::from_name(contract_name)?;
    let handle = DeployableHandle::bind(contract, profile)?;

    let result = deploy(&handle, profile).await?;

    tracing::info!(
        tx_hash = %result.transaction_hash,
        "deployment confirmed"
    );

    println!("token deployed to address {:#x}", result.contract_address);

    Ok(())
}
