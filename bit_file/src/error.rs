use bit_array::BitArrayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input does not contain BitArray data")]
    InvalidMagic,

    #[error("length field {0} does not fit in memory on this platform")]
    LengthOverflow(u64),

    #[error("payload truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: u64, found: u64 },

    #[error(transparent)]
    BitArray(#[from] BitArrayError),
}
