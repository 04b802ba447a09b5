//! Definitions of errors that can occur during contract deployment

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during contract deployment
#[derive(Debug)]
pub enum ScriptError {
    /// No compiled artifact is registered under the requested contract name
    ArtifactNotFound(String),
    /// Error decoding a compiled contract artifact
    ArtifactParsing(String),
    /// Error binding the configured signing key to a transaction signer
    SignerBinding(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The network rejected the contract-creation transaction
    Submission(String),
    /// No confirmation was observed within the expected inclusion window
    ConfirmationTimeout(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactNotFound(s) => write!(f, "no artifact for contract: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::SignerBinding(s) => write!(f, "error binding signer: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::Submission(s) => write!(f, "error submitting deployment: {}", s),
            ScriptError::ConfirmationTimeout(s) => {
                write!(f, "timed out awaiting confirmation: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
