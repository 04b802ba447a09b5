//! Binding of compiled contract artifacts to a network profile's signer
//!
//! Binding is pure: the artifact is decoded and the signer constructed
//! without any network I/O. The first round-trip happens in the deployer.

use std::fmt::{self, Display};

use alloy::signers::{local::PrivateKeySigner, Signer};
use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;

use crate::{
    config::{NetworkProfile, NetworkSelector},
    constants::{DEVNET_CHAIN_ID, LIQUID_INNO_ABI, LIQUID_INNO_BYTECODE},
    errors::ScriptError,
};

/// The statically registered set of deployable contracts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContractId {
    /// The LiquidInno token contract
    LiquidInno,
}

impl ContractId {
    /// Resolve a contract name against the registry
    pub fn from_name(name: &str) -> Result<Self, ScriptError> {
        match name {
            "LiquidInno" => Ok(ContractId::LiquidInno),
            _ => Err(ScriptError::ArtifactNotFound(name.to_string())),
        }
    }

    /// Decode the embedded compilation artifact for this contract
    pub fn artifact(self) -> Result<ContractArtifact, ScriptError> {
        let (abi_str, bytecode_hex) = match self {
            ContractId::LiquidInno => (LIQUID_INNO_ABI, LIQUID_INNO_BYTECODE),
        };

        let abi: JsonAbi = serde_json::from_str(abi_str)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        let bytecode = hex::decode(bytecode_hex.trim())
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        Ok(ContractArtifact {
            contract: self,
            abi,
            bytecode: Bytes::from(bytecode),
        })
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractId::LiquidInno => write!(f, "LiquidInno"),
        }
    }
}

/// A decoded compilation artifact: creation bytecode plus interface
pub struct ContractArtifact {
    /// Which registered contract this artifact belongs to
    pub contract: ContractId,
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

/// An artifact bound to the signer of the active network profile,
/// ready for one deployment attempt
pub struct DeployableHandle {
    /// The decoded artifact to deploy
    pub artifact: ContractArtifact,
    /// The signer authorizing the deployment transaction
    pub signer: PrivateKeySigner,
}

impl DeployableHandle {
    /// Bind a registered contract to the active profile's signer.
    ///
    /// The devnet profile binds a fresh ephemeral signer and ignores any
    /// configured key; live profiles require a well-formed private key in
    /// the profile. Fails before any transaction is submitted.
    pub fn bind(contract: ContractId, profile: &NetworkProfile) -> Result<Self, ScriptError> {
        let artifact = contract.artifact()?;

        let signer = match profile.selector {
            NetworkSelector::Devnet => {
                PrivateKeySigner::random().with_chain_id(Some(DEVNET_CHAIN_ID))
            }
            NetworkSelector::Ropsten => {
                let key = profile.signing_key.as_deref().ok_or_else(|| {
                    ScriptError::SignerBinding("no signing key configured".to_string())
                })?;
                let key = key.strip_prefix("0x").unwrap_or(key);
                key.parse::<PrivateKeySigner>()
                    .map_err(|e| ScriptError::SignerBinding(e.to_string()))?
            }
        };

        tracing::debug!(
            contract = %artifact.contract,
            deployer = %signer.address(),
            abi_functions = artifact.abi.functions().count(),
            "bound deployable handle"
        );

        Ok(Self { artifact, signer })
    }
}
