use ethereum_types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account state as captured in a dump.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpAccount {
    pub balance: U256,
    pub nonce: u64,
    pub code_hash: H256,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub storage: BTreeMap<H256, H256>,
}

/// Full account state captured at one point in time.
///
/// Accounts are keyed in a `BTreeMap` so that iteration order is a pure
/// function of the address set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDump {
    pub root: H256,
    pub accounts: BTreeMap<Address, DumpAccount>,
}
