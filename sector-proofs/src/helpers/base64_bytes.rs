//! Byte strings encoded as standard base64, matching Go's `encoding/json`
//! treatment of `[]byte`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    // Go encodes a nil slice as `null`.
    let encoded: Option<String> = Option::deserialize(deserializer)?;

    match encoded {
        Some(s) => STANDARD.decode(s.as_bytes()).map_err(D::Error::custom),
        None => Ok(Vec::new()),
    }
}
