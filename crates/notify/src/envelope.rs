use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::NotifyError;

/// Wire-format envelope for artifact announcements.
///
/// Serialized with MessagePack. The `topic` drives PUB/SUB prefix
/// filtering; `key` lets consumers deduplicate and partition without
/// decoding the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Routing topic (e.g. "harvest.artifact.stored.miso_fuel_mix").
    pub topic: String,

    /// Message key: `{source_group}:{artifact_id}`.
    pub key: String,

    /// MessagePack-encoded payload bytes.
    #[serde(with = "serde_bytes")]
    pub payload: Vec<u8>,

    /// When this envelope was created.
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for tracing an announcement back to its run.
    pub correlation_id: Uuid,

    /// Schema version for forward-compatible evolution.
    #[serde(default = "default_version")]
    pub version: u16,
}

/// Default version for envelopes that omit the field (backward compat).
fn default_version() -> u16 {
    1
}

impl Envelope {
    /// Create a new envelope, serializing the payload with MessagePack.
    pub fn new<T: Serialize>(
        topic: impl Into<String>,
        key: impl Into<String>,
        payload: &T,
    ) -> Result<Self, NotifyError> {
        Ok(Self {
            topic: topic.into(),
            key: key.into(),
            payload: rmp_serde::to_vec(payload)?,
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            version: 1,
        })
    }

    /// Deserialize the payload into the expected type.
    pub fn decode<T: for<'de> Deserialize<'de>>(&self) -> Result<T, NotifyError> {
        Ok(rmp_serde::from_slice(&self.payload)?)
    }

    /// Serialize this entire envelope to MessagePack bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, NotifyError> {
        Ok(rmp_serde::to_vec(self)?)
    }

    /// Deserialize an envelope from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NotifyError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

/// Helper module for serde to handle `Vec<u8>` as raw bytes in MessagePack.
mod serde_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(bytes)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let bytes: &[u8] = Deserialize::deserialize(d)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_envelope_bytes() {
        let env = Envelope::new("harvest.artifact.stored.grp", "grp:a.json", &42u64).unwrap();
        let bytes = env.to_bytes().unwrap();
        let decoded = Envelope::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.topic, "harvest.artifact.stored.grp");
        assert_eq!(decoded.key, "grp:a.json");
        assert_eq!(decoded.correlation_id, env.correlation_id);
        assert_eq!(decoded.decode::<u64>().unwrap(), 42);
    }
}
