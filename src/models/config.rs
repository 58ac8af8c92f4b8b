use crate::{
    common::{
        DEPLOYMENT_GAS_LIMIT, EXECUTION_MGR_ADDRESS, L1_MESSAGE_SENDER_ADDRESS,
        L2_TO_L1_MESSAGE_PASSER_ADDRESS, STATE_MGR_ADDRESS,
    },
    models::{SimplifiedCall, StateDump},
    remap::ReservedPin,
};
use derive_more::Constructor;
use ethereum_types::{Address, H256};
use serde::Deserialize;
use std::collections::HashMap;

/// Operator-supplied description of a genesis deployment.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisInput {
    pub simplified_txs: Vec<SimplifiedCall>,
    pub wallet_address: Address,
    pub execution_manager_address: Address,
    pub state_manager_address: Address,
    #[serde(default)]
    pub code_hashes: HashMap<String, H256>,
}

/// Engine parameters for the deployment run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainParams {
    pub chain_id: u64,
    pub gas_limit: u64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            chain_id: 1,
            gas_limit: DEPLOYMENT_GAS_LIMIT,
        }
    }
}

/// Pins any account whose code hash matches to a fixed target address.
#[derive(Clone, Copy, Debug, Constructor, PartialEq, Eq)]
pub struct CodePin {
    pub code_hash: H256,
    pub target: Address,
}

/// Everything one dump-building run needs; never process-global.
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    pub chain: ChainParams,
    pub deployer: Address,
    pub execution_manager: Address,
    pub state_manager: Address,
    pub code_pins: Vec<CodePin>,
}

impl GenesisConfig {
    pub fn from_input(input: &GenesisInput) -> Self {
        let mut code_pins = Vec::new();
        for (name, code_hash) in &input.code_hashes {
            match name.as_str() {
                "l1MessageSender" => {
                    code_pins.push(CodePin::new(*code_hash, L1_MESSAGE_SENDER_ADDRESS))
                }
                "l2ToL1MessagePasser" => {
                    code_pins.push(CodePin::new(*code_hash, L2_TO_L1_MESSAGE_PASSER_ADDRESS))
                }
                _ => tracing::warn!("Ignoring unknown code hash fingerprint: {}", name),
            }
        }
        // The fingerprint map has no stable order.
        code_pins.sort_by_key(|pin| pin.target);

        Self {
            chain: ChainParams::default(),
            deployer: input.wallet_address,
            execution_manager: input.execution_manager_address,
            state_manager: input.state_manager_address,
            code_pins,
        }
    }

    /// Reserved pins for this run: the two manager contracts, plus every
    /// account of the dump whose code hash matches a configured fingerprint.
    pub fn reserved_pins(&self, dump: &StateDump) -> Vec<ReservedPin> {
        let mut pins = vec![
            ReservedPin::new(self.execution_manager, EXECUTION_MGR_ADDRESS),
            ReservedPin::new(self.state_manager, STATE_MGR_ADDRESS),
        ];
        for (address, account) in &dump.accounts {
            for code_pin in &self.code_pins {
                if account.code_hash == code_pin.code_hash {
                    pins.push(ReservedPin::new(*address, code_pin.target));
                }
            }
        }
        pins
    }
}
