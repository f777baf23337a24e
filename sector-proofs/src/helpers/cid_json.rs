//! Serializes a `Cid` as an IPLD link object, `{"/": "<multibase string>"}`,
//! which is how CIDs appear in JSON produced by the Go node.

use std::convert::TryFrom;

use cid::Cid;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct CidJson {
    #[serde(rename = "/")]
    link: String,
}

pub fn serialize<S>(cid: &Cid, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    CidJson {
        link: cid.to_string(),
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Cid, D::Error>
where
    D: Deserializer<'de>,
{
    let CidJson { link } = CidJson::deserialize(deserializer)?;

    Cid::try_from(link.as_str()).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::commcid::replica_commitment_v1_to_cid;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper(#[serde(with = "crate::helpers::cid_json")] Cid);

    #[test]
    fn test_link_object_roundtrip() {
        let cid = replica_commitment_v1_to_cid(&[7; 32]).unwrap();
        let json = serde_json::to_string(&Wrapper(cid)).unwrap();

        assert_eq!(format!("{{\"/\":\"{}\"}}", cid), json);
        assert_eq!(Wrapper(cid), serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn test_rejects_garbage_link() {
        assert!(serde_json::from_str::<Wrapper>("{\"/\":\"not-a-cid\"}").is_err());
        assert!(serde_json::from_str::<Wrapper>("\"bare string\"").is_err());
    }
}
