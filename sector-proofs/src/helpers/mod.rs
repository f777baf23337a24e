pub(crate) mod base64_bytes;
pub(crate) mod cid_json;
