use bytes::Bytes;
use ethereum_types::Address;
use serde::{Deserialize, Serialize};

/// Destination of a deployment call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallAction {
    Call(Address),
    Create,
}

/// One scripted deployment call, as supplied by the operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedCall {
    pub from: Address,
    /// The zero address means contract creation.
    pub to: Address,
    /// 0x-prefixed hex of the call data or init code.
    pub data: String,
}

impl SimplifiedCall {
    pub fn action(&self) -> CallAction {
        if self.to.is_zero() {
            CallAction::Create
        } else {
            CallAction::Call(self.to)
        }
    }

    pub fn payload(&self) -> anyhow::Result<Bytes> {
        let data = self.data.strip_prefix("0x").ok_or_else(|| {
            anyhow::Error::msg(format!("call data is not 0x-prefixed: {}", self.data))
        })?;
        Ok(hex::decode(data)?.into())
    }
}
