use crate::models::{CallAction, StateDump};
use async_trait::async_trait;
use bytes::Bytes;
use ethereum_types::Address;

/// One call to apply against the engine's state.
#[derive(Clone, Debug)]
pub struct Message {
    pub sender: Address,
    pub action: CallAction,
    pub gas_limit: u64,
    pub payload: Bytes,
}

/// Result of applying a single message.
#[derive(Clone, Debug, Default)]
pub struct CallOutcome {
    pub output: Bytes,
    pub gas_used: u64,
    pub failed: bool,
}

/// Boundary to the transaction-execution collaborator.
///
/// Messages are applied strictly in order; later calls may depend on state
/// mutated by earlier ones.
#[async_trait]
pub trait ExecutionEngine {
    /// Applies one message to the underlying state, committing its effects.
    async fn apply_message(&mut self, message: Message) -> anyhow::Result<CallOutcome>;

    /// Captures the full account state accumulated so far.
    async fn dump_state(&self) -> anyhow::Result<StateDump>;
}
