#[cfg(feature = "std")]
use thiserror::Error;

/// Storage errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The allocator refused a request for `bytes` bytes.
    #[cfg_attr(feature = "std", error("failed to allocate {bytes} bytes"))]
    AllocationFailed { bytes: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {} bytes", bytes)
            }
        }
    }
}
