use std::path::PathBuf;

use cid::Cid;
use serde::{Deserialize, Serialize};

use crate::types::{RegisteredPoStProof, RegisteredSealProof, SectorNumber};

/// On-chain information about a sealed sector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorInfo {
    #[serde(rename = "SealProof")]
    pub seal_proof: RegisteredSealProof,
    #[serde(rename = "SectorNumber")]
    pub sector_number: SectorNumber,
    #[serde(rename = "SealedCID", with = "crate::helpers::cid_json")]
    pub sealed_cid: Cid,
}

/// The public inputs of a sector needed to verify a proof-of-spacetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicSectorInfo {
    #[serde(rename = "PoStProofType")]
    pub post_proof_type: RegisteredPoStProof,
    #[serde(rename = "SealedCID", with = "crate::helpers::cid_json")]
    pub sealed_cid: Cid,
    #[serde(rename = "SectorNum")]
    pub sector_num: SectorNumber,
}

/// A sector's public info plus the locations of its replica and cache on
/// the local filesystem. The files themselves are owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivateSectorInfo {
    #[serde(flatten)]
    pub sector_info: SectorInfo,
    #[serde(rename = "CacheDirPath")]
    pub cache_dir_path: PathBuf,
    #[serde(rename = "PoStProofType")]
    pub post_proof_type: RegisteredPoStProof,
    #[serde(rename = "SealedSectorPath")]
    pub sealed_sector_path: PathBuf,
}

impl PublicSectorInfo {
    pub fn new(
        post_proof_type: RegisteredPoStProof,
        sealed_cid: Cid,
        sector_num: SectorNumber,
    ) -> PublicSectorInfo {
        PublicSectorInfo {
            post_proof_type,
            sealed_cid,
            sector_num,
        }
    }

    /// Sort key: the canonical byte encoding of the sealed CID.
    pub fn sealed_cid_bytes(&self) -> Vec<u8> {
        self.sealed_cid.to_bytes()
    }
}

impl PrivateSectorInfo {
    pub fn sector_number(&self) -> SectorNumber {
        self.sector_info.sector_number
    }

    pub fn sealed_cid(&self) -> &Cid {
        &self.sector_info.sealed_cid
    }

    pub fn to_public(&self) -> PublicSectorInfo {
        PublicSectorInfo {
            post_proof_type: self.post_proof_type,
            sealed_cid: self.sector_info.sealed_cid,
            sector_num: self.sector_info.sector_number,
        }
    }
}
