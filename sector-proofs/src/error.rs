#[derive(Debug, thiserror::Error)]
pub enum SectorInfoErr {
    #[error("malformed sector info encoding: {}", _0)]
    DecodeError(#[source] serde_json::Error),

    #[error("could not encode sector infos: {}", _0)]
    EncodeError(#[source] serde_json::Error),

    #[error(
        "invalid range [{}, {}) for collection of length {}",
        start,
        end,
        len
    )]
    RangeError { start: usize, end: usize, len: usize },

    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommitmentError {
    #[error("unexpected codec {:#x} (expected {:#x})", actual, expected)]
    UnexpectedCodec { actual: u64, expected: u64 },

    #[error("unexpected multihash code {:#x} (expected {:#x})", actual, expected)]
    UnexpectedHash { actual: u64, expected: u64 },

    #[error("commitment digest must be 32 bytes, got {}", _0)]
    InvalidDigestLength(usize),

    #[error("invalid commitment CID: {}", _0)]
    InvalidCid(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AggregateVerifyErr {
    /// The proof was checked and rejected.
    #[error("aggregate seal proof is invalid: {}", _0)]
    VerificationFailure(String),

    /// Verification could not be attempted.
    #[error("aggregate seal verification could not run: {}", _0)]
    VerificationFault(String),
}

impl AggregateVerifyErr {
    pub fn is_failure(&self) -> bool {
        match self {
            AggregateVerifyErr::VerificationFailure(_) => true,
            AggregateVerifyErr::VerificationFault(_) => false,
        }
    }

    pub fn is_fault(&self) -> bool {
        !self.is_failure()
    }
}

pub fn err_decode(err: serde_json::Error) -> SectorInfoErr {
    SectorInfoErr::DecodeError(err)
}

pub fn err_encode(err: serde_json::Error) -> SectorInfoErr {
    SectorInfoErr::EncodeError(err)
}

pub fn err_range(start: usize, end: usize, len: usize) -> SectorInfoErr {
    SectorInfoErr::RangeError { start, end, len }
}

pub fn err_verification_failure<T: Into<String>>(msg: T) -> AggregateVerifyErr {
    AggregateVerifyErr::VerificationFailure(msg.into())
}

pub fn err_verification_fault<T: Into<String>>(msg: T) -> AggregateVerifyErr {
    AggregateVerifyErr::VerificationFault(msg.into())
}
