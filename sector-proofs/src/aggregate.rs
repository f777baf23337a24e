use std::convert::TryInto;

use cid::Cid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::commcid::{cid_to_data_commitment_v1, cid_to_replica_commitment_v1};
use crate::error::{err_verification_failure, err_verification_fault, AggregateVerifyErr};
use crate::types::{
    ActorId, Commitment, ProverId, RegisteredAggregationProof, RegisteredSealProof, SectorNumber,
    Ticket,
};

/// One sector's claim within an aggregate seal proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSealVerifyInfo {
    #[serde(rename = "Number")]
    pub number: SectorNumber,
    #[serde(rename = "Randomness", with = "crate::helpers::base64_bytes")]
    pub randomness: Vec<u8>,
    #[serde(rename = "InteractiveRandomness", with = "crate::helpers::base64_bytes")]
    pub interactive_randomness: Vec<u8>,
    #[serde(rename = "SealedCID", with = "crate::helpers::cid_json")]
    pub sealed_cid: Cid,
    #[serde(rename = "UnsealedCID", with = "crate::helpers::cid_json")]
    pub unsealed_cid: Cid,
}

/// An aggregate seal proof together with every sector claim it attests to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSealVerifyProofAndInfos {
    #[serde(rename = "Miner")]
    pub miner: ActorId,
    #[serde(rename = "SealProof")]
    pub seal_proof: RegisteredSealProof,
    #[serde(rename = "AggregateProof")]
    pub aggregate_proof: RegisteredAggregationProof,
    #[serde(rename = "Proof", with = "crate::helpers::base64_bytes")]
    pub proof: Vec<u8>,
    #[serde(rename = "Infos")]
    pub infos: Vec<AggregateSealVerifyInfo>,
}

/// Public inputs of a single sector's seal commitment, as consumed by the
/// proof system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealCommitInputs {
    pub sector_id: SectorNumber,
    pub comm_r: Commitment,
    pub comm_d: Commitment,
    pub ticket: Ticket,
    pub seed: Ticket,
}

/// The verifying context of the native proof system: holds whatever key
/// material is needed to check aggregate seal proofs.
///
/// `Ok(false)` means the proof was checked and is invalid for the given
/// inputs. `Err` means the proof system could not perform the check.
pub trait AggregateSealVerifier: Send + Sync {
    fn verify_aggregate_seal_commit_proofs(
        &self,
        registered_proof: RegisteredSealProof,
        registered_aggregation: RegisteredAggregationProof,
        prover_id: &ProverId,
        aggregate_proof: &[u8],
        inputs: &[SealCommitInputs],
    ) -> std::result::Result<bool, failure::Error>;
}

/// Verifies an aggregate seal proof against the sector claims it carries.
///
/// Returns `VerificationFailure` if the proof is invalid for its claims and
/// `VerificationFault` if the record could not be checked at all.
pub fn verify_aggregate_seals<V>(
    verifier: &V,
    aggregate: &AggregateSealVerifyProofAndInfos,
) -> Result<(), AggregateVerifyErr>
where
    V: AggregateSealVerifier + ?Sized,
{
    debug!(
        "verify_aggregate_seals: start (miner {}, {} sectors)",
        aggregate.miner,
        aggregate.infos.len()
    );

    if aggregate.infos.is_empty() {
        return Err(err_verification_fault("no seal verify infos"));
    }

    let inputs = aggregate
        .infos
        .iter()
        .map(seal_commit_inputs)
        .collect::<Result<Vec<_>, _>>()?;

    let prover_id = to_prover_id(aggregate.miner);

    let is_valid = verifier
        .verify_aggregate_seal_commit_proofs(
            aggregate.seal_proof,
            aggregate.aggregate_proof,
            &prover_id,
            &aggregate.proof,
            &inputs,
        )
        .map_err(|err| err_verification_fault(err.to_string()))?;

    debug!("verify_aggregate_seals: finish (valid: {})", is_valid);

    if is_valid {
        Ok(())
    } else {
        Err(err_verification_failure(format!(
            "aggregate proof for miner {} does not verify against {} sector claims",
            aggregate.miner,
            inputs.len()
        )))
    }
}

/// Verifies independent aggregates in parallel. Results are returned in
/// input order.
pub fn verify_aggregate_seals_batch<V>(
    verifier: &V,
    aggregates: &[AggregateSealVerifyProofAndInfos],
) -> Vec<Result<(), AggregateVerifyErr>>
where
    V: AggregateSealVerifier + ?Sized,
{
    aggregates
        .par_iter()
        .map(|aggregate| verify_aggregate_seals(verifier, aggregate))
        .collect()
}

/// The prover id of a miner is the payload of its ID address (the unsigned
/// LEB128 encoding of the actor id), zero-padded to 32 bytes.
pub fn to_prover_id(miner: ActorId) -> ProverId {
    let mut buf = unsigned_varint::encode::u64_buffer();
    let payload = unsigned_varint::encode::u64(miner, &mut buf);

    let mut prover_id: ProverId = Default::default();
    prover_id[..payload.len()].copy_from_slice(payload);

    prover_id
}

fn seal_commit_inputs(
    info: &AggregateSealVerifyInfo,
) -> Result<SealCommitInputs, AggregateVerifyErr> {
    let fault = |what: &str, detail: String| {
        err_verification_fault(format!("sector {}: {}: {}", info.number, what, detail))
    };

    let comm_r = cid_to_replica_commitment_v1(&info.sealed_cid)
        .map_err(|err| fault("sealed CID", err.to_string()))?;
    let comm_d = cid_to_data_commitment_v1(&info.unsealed_cid)
        .map_err(|err| fault("unsealed CID", err.to_string()))?;
    let ticket = to_ticket(&info.randomness).map_err(|len| {
        fault(
            "randomness",
            format!("expected 32 bytes, got {}", len),
        )
    })?;
    let seed = to_ticket(&info.interactive_randomness).map_err(|len| {
        fault(
            "interactive randomness",
            format!("expected 32 bytes, got {}", len),
        )
    })?;

    Ok(SealCommitInputs {
        sector_id: info.number,
        comm_r,
        comm_d,
        ticket,
        seed,
    })
}

fn to_ticket(bytes: &[u8]) -> Result<Ticket, usize> {
    bytes.try_into().map_err(|_| bytes.len())
}
