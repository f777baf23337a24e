//! Conversions between 32-byte sector commitments and the CIDs which carry
//! them on chain.

use std::convert::TryFrom;

use cid::Cid;

use crate::error::CommitmentError;
use crate::types::Commitment;

/// Multicodec for a sealed sector replica commitment (`comm_r`).
pub const FIL_COMMITMENT_SEALED: u64 = 0xf102;

/// Multicodec for an unsealed sector data commitment (`comm_d`).
pub const FIL_COMMITMENT_UNSEALED: u64 = 0xf101;

/// Multihash code of the Poseidon hash used to build replica commitments.
pub const POSEIDON_BLS12_381_A1_FC1: u64 = 0xb401;

/// Multihash code of the truncated SHA-256 used to build data commitments.
pub const SHA2_256_TRUNC254_PADDED: u64 = 0x1012;

const CID_VERSION_1: u64 = 1;

pub fn replica_commitment_v1_to_cid(comm_r: &Commitment) -> Result<Cid, CommitmentError> {
    commitment_to_cid(FIL_COMMITMENT_SEALED, POSEIDON_BLS12_381_A1_FC1, comm_r)
}

pub fn data_commitment_v1_to_cid(comm_d: &Commitment) -> Result<Cid, CommitmentError> {
    commitment_to_cid(FIL_COMMITMENT_UNSEALED, SHA2_256_TRUNC254_PADDED, comm_d)
}

pub fn cid_to_replica_commitment_v1(cid: &Cid) -> Result<Commitment, CommitmentError> {
    cid_to_commitment(cid, FIL_COMMITMENT_SEALED, POSEIDON_BLS12_381_A1_FC1)
}

pub fn cid_to_data_commitment_v1(cid: &Cid) -> Result<Commitment, CommitmentError> {
    cid_to_commitment(cid, FIL_COMMITMENT_UNSEALED, SHA2_256_TRUNC254_PADDED)
}

fn commitment_to_cid(
    codec: u64,
    hash_code: u64,
    commitment: &Commitment,
) -> Result<Cid, CommitmentError> {
    let mut bytes = Vec::with_capacity(commitment.len() + 16);

    push_uvarint(&mut bytes, CID_VERSION_1);
    push_uvarint(&mut bytes, codec);
    push_uvarint(&mut bytes, hash_code);
    push_uvarint(&mut bytes, commitment.len() as u64);
    bytes.extend_from_slice(commitment);

    Cid::try_from(bytes).map_err(|err| CommitmentError::InvalidCid(err.to_string()))
}

fn cid_to_commitment(
    cid: &Cid,
    expected_codec: u64,
    expected_hash: u64,
) -> Result<Commitment, CommitmentError> {
    if cid.codec() != expected_codec {
        return Err(CommitmentError::UnexpectedCodec {
            actual: cid.codec(),
            expected: expected_codec,
        });
    }

    let hash = cid.hash();

    if hash.code() != expected_hash {
        return Err(CommitmentError::UnexpectedHash {
            actual: hash.code(),
            expected: expected_hash,
        });
    }

    let digest = hash.digest();

    if digest.len() != 32 {
        return Err(CommitmentError::InvalidDigestLength(digest.len()));
    }

    let mut commitment: Commitment = Default::default();
    commitment.copy_from_slice(digest);

    Ok(commitment)
}

fn push_uvarint(bytes: &mut Vec<u8>, n: u64) {
    let mut buf = unsigned_varint::encode::u64_buffer();
    bytes.extend_from_slice(unsigned_varint::encode::u64(n, &mut buf));
}
