use crate::models::StateDump;

/// Serialized forms of the final dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedDump {
    /// Plain JSON.
    pub json: String,
    /// Hex of the JSON bytes, for embedding as a constant downstream.
    pub hex: String,
}

/// Encodes a dump into its JSON and hex-of-JSON forms.
pub fn encode_dump(dump: &StateDump) -> anyhow::Result<EncodedDump> {
    let json = serde_json::to_string(dump)?;
    let hex = hex::encode(json.as_bytes());
    Ok(EncodedDump { json, hex })
}
