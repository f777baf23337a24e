use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a sector within a single miner's storage.
pub type SectorNumber = u64;

/// Numeric id of the miner actor which owns a sector.
pub type ActorId = u64;

/// Size of a sector, in bytes.
pub type SectorSize = u64;

/// A 32-byte replica (`comm_r`) or data (`comm_d`) commitment.
pub type Commitment = [u8; 32];

/// Chain randomness (ticket or interactive seed) mixed into a seal proof.
pub type Ticket = [u8; 32];

/// Miner identity as fed into the proof system.
pub type ProverId = [u8; 32];

// BLS

/// Length of a BLS signature.
pub const SIGNATURE_BYTES: usize = 96;

/// Length of a BLS private key.
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Length of a BLS public key.
pub const PUBLIC_KEY_BYTES: usize = 48;

/// Length of a BLS message hash/digest.
pub const DIGEST_BYTES: usize = 96;

/// Compressed affine signature.
pub type Signature = [u8; SIGNATURE_BYTES];

/// Compressed affine private key.
pub type PrivateKey = [u8; PRIVATE_KEY_BYTES];

/// Compressed affine public key.
pub type PublicKey = [u8; PUBLIC_KEY_BYTES];

/// Raw bytes to be signed.
pub type Message = Vec<u8>;

/// Compressed affine message digest.
pub type Digest = [u8; DIGEST_BYTES];

/// Used when generating a private key deterministically.
pub type PrivateKeyGenSeed = [u8; 32];

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProofTag {
    kind: &'static str,
    tag: i64,
}

impl fmt::Display for UnknownProofTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} tag {}", self.kind, self.tag)
    }
}

impl std::error::Error for UnknownProofTag {}

// Generates an integer-tagged proof enum which (de)serializes as its tag.
macro_rules! registered_proof {
    ($(#[$meta:meta])* $name:ident, $kind:expr, { $($variant:ident = $tag:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        #[allow(non_camel_case_types)]
        pub enum $name {
            $($variant = $tag,)*
        }

        impl From<$name> for i64 {
            fn from(proof: $name) -> Self {
                proof as i64
            }
        }

        impl TryFrom<i64> for $name {
            type Error = UnknownProofTag;

            fn try_from(tag: i64) -> Result<Self, Self::Error> {
                match tag {
                    $($tag => Ok($name::$variant),)*
                    _ => Err(UnknownProofTag { kind: $kind, tag }),
                }
            }
        }
    };
}

registered_proof!(
    /// Seal (PoRep) proof variant a sector was sealed with.
    RegisteredSealProof, "seal proof", {
        StackedDrg2KiBV1 = 0,
        StackedDrg8MiBV1 = 1,
        StackedDrg512MiBV1 = 2,
        StackedDrg32GiBV1 = 3,
        StackedDrg64GiBV1 = 4,
        StackedDrg2KiBV1_1 = 5,
        StackedDrg8MiBV1_1 = 6,
        StackedDrg512MiBV1_1 = 7,
        StackedDrg32GiBV1_1 = 8,
        StackedDrg64GiBV1_1 = 9,
    }
);

registered_proof!(
    /// Proof-of-spacetime variant used to prove a sector.
    RegisteredPoStProof, "PoSt proof", {
        StackedDrgWinning2KiBV1 = 0,
        StackedDrgWinning8MiBV1 = 1,
        StackedDrgWinning512MiBV1 = 2,
        StackedDrgWinning32GiBV1 = 3,
        StackedDrgWinning64GiBV1 = 4,
        StackedDrgWindow2KiBV1 = 5,
        StackedDrgWindow8MiBV1 = 6,
        StackedDrgWindow512MiBV1 = 7,
        StackedDrgWindow32GiBV1 = 8,
        StackedDrgWindow64GiBV1 = 9,
    }
);

registered_proof!(
    /// Scheme used to aggregate many seal proofs into one.
    RegisteredAggregationProof, "aggregation proof", {
        SnarkPackV1 = 0,
        SnarkPackV2 = 1,
    }
);

impl RegisteredSealProof {
    pub fn sector_size(self) -> SectorSize {
        use RegisteredSealProof::*;

        match self {
            StackedDrg2KiBV1 | StackedDrg2KiBV1_1 => 2 * KIB,
            StackedDrg8MiBV1 | StackedDrg8MiBV1_1 => 8 * MIB,
            StackedDrg512MiBV1 | StackedDrg512MiBV1_1 => 512 * MIB,
            StackedDrg32GiBV1 | StackedDrg32GiBV1_1 => 32 * GIB,
            StackedDrg64GiBV1 | StackedDrg64GiBV1_1 => 64 * GIB,
        }
    }

    /// Winning PoSt proof type for sectors sealed with this proof.
    pub fn registered_winning_post_proof(self) -> RegisteredPoStProof {
        use RegisteredPoStProof::*;
        use RegisteredSealProof::*;

        match self {
            StackedDrg2KiBV1 | StackedDrg2KiBV1_1 => StackedDrgWinning2KiBV1,
            StackedDrg8MiBV1 | StackedDrg8MiBV1_1 => StackedDrgWinning8MiBV1,
            StackedDrg512MiBV1 | StackedDrg512MiBV1_1 => StackedDrgWinning512MiBV1,
            StackedDrg32GiBV1 | StackedDrg32GiBV1_1 => StackedDrgWinning32GiBV1,
            StackedDrg64GiBV1 | StackedDrg64GiBV1_1 => StackedDrgWinning64GiBV1,
        }
    }

    /// Window PoSt proof type for sectors sealed with this proof.
    pub fn registered_window_post_proof(self) -> RegisteredPoStProof {
        use RegisteredPoStProof::*;
        use RegisteredSealProof::*;

        match self {
            StackedDrg2KiBV1 | StackedDrg2KiBV1_1 => StackedDrgWindow2KiBV1,
            StackedDrg8MiBV1 | StackedDrg8MiBV1_1 => StackedDrgWindow8MiBV1,
            StackedDrg512MiBV1 | StackedDrg512MiBV1_1 => StackedDrgWindow512MiBV1,
            StackedDrg32GiBV1 | StackedDrg32GiBV1_1 => StackedDrgWindow32GiBV1,
            StackedDrg64GiBV1 | StackedDrg64GiBV1_1 => StackedDrgWindow64GiBV1,
        }
    }
}

impl RegisteredPoStProof {
    pub fn sector_size(self) -> SectorSize {
        use RegisteredPoStProof::*;

        match self {
            StackedDrgWinning2KiBV1 | StackedDrgWindow2KiBV1 => 2 * KIB,
            StackedDrgWinning8MiBV1 | StackedDrgWindow8MiBV1 => 8 * MIB,
            StackedDrgWinning512MiBV1 | StackedDrgWindow512MiBV1 => 512 * MIB,
            StackedDrgWinning32GiBV1 | StackedDrgWindow32GiBV1 => 32 * GIB,
            StackedDrgWinning64GiBV1 | StackedDrgWindow64GiBV1 => 64 * GIB,
        }
    }
}
