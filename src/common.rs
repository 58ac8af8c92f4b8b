use ethereum_types::{Address, H160, H256};
use hex_literal::hex;

/// Keccak-256 of empty input; code hash of accounts without code.
pub const EMPTY_HASH: H256 = H256(hex!(
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
));

/// Base of the placeholder range; the low-order two bytes carry the
/// assignment index.
pub const DEAD_ADDRESS_BASE: Address = H160(hex!("00000000000000000000000000000000dead0000"));

/// Canonical home of the execution manager contract.
pub const EXECUTION_MGR_ADDRESS: Address = H160(hex!("00000000000000000000000000000000dead0000"));

/// Canonical home of the state manager contract.
pub const STATE_MGR_ADDRESS: Address = H160(hex!("00000000000000000000000000000000dead0001"));

/// Well-known home of the L2-to-L1 message passer, recognized by code hash.
pub const L2_TO_L1_MESSAGE_PASSER_ADDRESS: Address =
    H160(hex!("4200000000000000000000000000000000000000"));

/// Well-known home of the L1 message sender, recognized by code hash.
pub const L1_MESSAGE_SENDER_ADDRESS: Address =
    H160(hex!("4200000000000000000000000000000000000001"));

/// Gas allotted to each deployment call.
pub const DEPLOYMENT_GAS_LIMIT: u64 = 15_000_000;
