//! Constants used in the deploy scripts

use std::time::Duration;

/// The ABI of the LiquidInno token contract, as emitted by solc 0.8.12
pub const LIQUID_INNO_ABI: &str = include_str!("../artifacts/LiquidInno.abi");

/// The creation bytecode of the LiquidInno token contract, hex-encoded
/// without a `0x` prefix, as emitted by solc 0.8.12
pub const LIQUID_INNO_BYTECODE: &str = include_str!("../artifacts/LiquidInno.bin");

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// Deadline for observing the deployment confirmation on a live network.
///
/// The underlying network's block-inclusion latency is unbounded from the
/// script's perspective, so the wait is cut off here instead.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(180);

/// The chain ID reported for the in-process devnet profile
pub const DEVNET_CHAIN_ID: u64 = 31337;
