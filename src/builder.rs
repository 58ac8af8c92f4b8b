use crate::{
    engine::{ExecutionEngine, Message},
    models::{GenesisConfig, SimplifiedCall, StateDump},
    remap::remap_dump,
};

/// Drives one full dump-building run: sequential replay, state capture,
/// reserved pinning and canonical remapping.
#[derive(Debug)]
pub struct GenesisBuilder<E> {
    engine: E,
    config: GenesisConfig,
}

impl<E> GenesisBuilder<E>
where
    E: ExecutionEngine,
{
    pub fn new(engine: E, config: GenesisConfig) -> Self {
        Self { engine, config }
    }

    pub async fn build(mut self, calls: &[SimplifiedCall]) -> anyhow::Result<StateDump> {
        tracing::info!(
            "Replaying {} deployment calls, wallet {:?}",
            calls.len(),
            self.config.deployer
        );
        for call in calls {
            let payload = call.payload()?;
            let outcome = self
                .engine
                .apply_message(Message {
                    sender: call.from,
                    action: call.action(),
                    gas_limit: self.config.chain.gas_limit,
                    payload,
                })
                .await?;
            if outcome.failed {
                // A failed scripted call is not fatal; the resulting state is
                // still captured and inspectable.
                tracing::warn!(
                    "Call from {:?} failed, gas used: {}",
                    call.from,
                    outcome.gas_used
                );
            } else {
                tracing::info!(
                    "Applied call from {:?}, gas used: {}",
                    call.from,
                    outcome.gas_used
                );
            }
        }

        let dump = self.engine.dump_state().await?;
        tracing::info!("Dump root: {:?}", dump.root);

        let pins = self.config.reserved_pins(&dump);
        Ok(remap_dump(&dump, &pins)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::{EMPTY_HASH, EXECUTION_MGR_ADDRESS, STATE_MGR_ADDRESS},
        engine::CallOutcome,
        models::{CallAction, ChainParams, DumpAccount},
        remap::placeholder_address,
    };
    use async_trait::async_trait;
    use bytes::Bytes;
    use ethereum_types::Address;
    use std::sync::{Arc, Mutex};

    /// Engine stand-in: records applied messages and returns a canned dump.
    struct ScriptedEngine {
        applied: Arc<Mutex<Vec<Message>>>,
        fail_from: Option<Address>,
        dump: StateDump,
    }

    #[async_trait]
    impl ExecutionEngine for ScriptedEngine {
        async fn apply_message(&mut self, message: Message) -> anyhow::Result<CallOutcome> {
            let failed = self.fail_from == Some(message.sender);
            self.applied.lock().unwrap().push(message);
            Ok(CallOutcome {
                output: Bytes::new(),
                gas_used: 21_000,
                failed,
            })
        }

        async fn dump_state(&self) -> anyhow::Result<StateDump> {
            Ok(self.dump.clone())
        }
    }

    fn config() -> GenesisConfig {
        GenesisConfig {
            chain: ChainParams::default(),
            deployer: Address::repeat_byte(0xaa),
            execution_manager: Address::repeat_byte(1),
            state_manager: Address::repeat_byte(2),
            code_pins: vec![],
        }
    }

    fn deployed_dump(config: &GenesisConfig) -> StateDump {
        let mut dump = StateDump::default();
        dump.accounts.insert(
            config.execution_manager,
            DumpAccount {
                nonce: 1,
                ..Default::default()
            },
        );
        dump.accounts.insert(
            config.state_manager,
            DumpAccount {
                nonce: 2,
                ..Default::default()
            },
        );
        dump.accounts.insert(
            Address::repeat_byte(3),
            DumpAccount {
                nonce: 3,
                code_hash: EMPTY_HASH,
                ..Default::default()
            },
        );
        dump
    }

    fn calls() -> Vec<SimplifiedCall> {
        vec![
            SimplifiedCall {
                from: Address::repeat_byte(0xaa),
                to: Address::zero(),
                data: "0x6000".into(),
            },
            SimplifiedCall {
                from: Address::repeat_byte(0xbb),
                to: Address::repeat_byte(1),
                data: "0x".into(),
            },
        ]
    }

    #[tokio::test]
    async fn replays_calls_in_order_and_remaps_the_dump() {
        let config = config();
        let applied = Arc::new(Mutex::new(Vec::new()));
        let engine = ScriptedEngine {
            applied: applied.clone(),
            fail_from: None,
            dump: deployed_dump(&config),
        };

        let remapped = GenesisBuilder::new(engine, config.clone())
            .build(&calls())
            .await
            .unwrap();

        let applied = applied.lock().unwrap();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].action, CallAction::Create);
        assert_eq!(applied[0].payload.as_ref(), &[0x60, 0x00]);
        assert_eq!(applied[0].gas_limit, config.chain.gas_limit);
        assert_eq!(applied[1].action, CallAction::Call(Address::repeat_byte(1)));

        // Managers are pinned onto the two reserved dead slots, which they
        // already occupy in sorted order; the third account follows.
        assert_eq!(remapped.accounts[&EXECUTION_MGR_ADDRESS].nonce, 1);
        assert_eq!(remapped.accounts[&STATE_MGR_ADDRESS].nonce, 2);
        assert_eq!(remapped.accounts[&placeholder_address(2)].nonce, 3);
    }

    #[tokio::test]
    async fn failed_call_does_not_abort_the_run() {
        let config = config();
        let engine = ScriptedEngine {
            applied: Arc::new(Mutex::new(Vec::new())),
            fail_from: Some(Address::repeat_byte(0xbb)),
            dump: deployed_dump(&config),
        };

        let remapped = GenesisBuilder::new(engine, config)
            .build(&calls())
            .await
            .unwrap();
        assert_eq!(remapped.accounts.len(), 3);
    }

    #[tokio::test]
    async fn malformed_call_data_aborts_before_execution() {
        let config = config();
        let applied = Arc::new(Mutex::new(Vec::new()));
        let engine = ScriptedEngine {
            applied: applied.clone(),
            fail_from: None,
            dump: deployed_dump(&config),
        };

        let mut calls = calls();
        calls[0].data = "6000".into();

        let result = GenesisBuilder::new(engine, config).build(&calls).await;
        assert!(result.is_err());
        assert!(applied.lock().unwrap().is_empty());
    }
}
