use raw_bytes::StorageError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("Bit index {index} is out of range for length {len}")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("Invalid hex digit {digit:?} at position {position}")
    )]
    InvalidHexDigit { digit: char, position: usize },

    #[cfg_attr(
        feature = "std",
        error("Invalid binary digit {digit:?} at position {position}")
    )]
    InvalidBinDigit { digit: char, position: usize },

    #[cfg_attr(feature = "std", error("Invalid argument: {0}"))]
    InvalidArgument(&'static str),

    #[cfg_attr(
        feature = "std",
        error("Length mismatch: {left} bits vs {right} bits")
    )]
    LengthMismatch { left: usize, right: usize },

    #[cfg_attr(
        feature = "std",
        error("{len} bits need {expected} bytes, got {found}")
    )]
    ByteLengthMismatch {
        len: usize,
        expected: usize,
        found: usize,
    },

    #[cfg_attr(feature = "std", error("Failed to allocate {bytes} bytes"))]
    AllocationFailed { bytes: usize },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for BitArrayError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AllocationFailed { bytes } => BitArrayError::AllocationFailed { bytes },
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::IndexOutOfBounds { index, len } => {
                write!(f, "Bit index {} is out of range for length {}", index, len)
            }
            BitArrayError::InvalidHexDigit { digit, position } => {
                write!(f, "Invalid hex digit {:?} at position {}", digit, position)
            }
            BitArrayError::InvalidBinDigit { digit, position } => {
                write!(f, "Invalid binary digit {:?} at position {}", digit, position)
            }
            BitArrayError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BitArrayError::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: {} bits vs {} bits", left, right)
            }
            BitArrayError::ByteLengthMismatch {
                len,
                expected,
                found,
            } => write!(f, "{} bits need {} bytes, got {}", len, expected, found),
            BitArrayError::AllocationFailed { bytes } => {
                write!(f, "Failed to allocate {} bytes", bytes)
            }
        }
    }
}
