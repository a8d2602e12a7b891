use alloc::vec::Vec;
use core::ops::Range;

use crate::StorageError;

type Result<T> = core::result::Result<T, StorageError>;

/// Owned, contiguous byte storage with fallible allocation.
///
/// Every constructor that has to obtain memory goes through
/// [`Vec::try_reserve_exact`], so an impossible request is reported as
/// [`StorageError::AllocationFailed`] instead of aborting the process.
///
/// # Examples
///
/// ```
/// use raw_bytes::ByteBuffer;
///
/// let mut buf = ByteBuffer::try_zeroed(4).unwrap();
/// buf.fill(1..3, 0xFF);
/// assert_eq!(buf.as_slice(), &[0x00, 0xFF, 0xFF, 0x00]);
///
/// buf.invert(0..4);
/// assert_eq!(buf.as_slice(), &[0xFF, 0x00, 0x00, 0xFF]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Allocates `len` zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AllocationFailed`] if the allocator cannot
    /// satisfy the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::{ByteBuffer, StorageError};
    ///
    /// let buf = ByteBuffer::try_zeroed(3).unwrap();
    /// assert_eq!(buf.as_slice(), &[0, 0, 0]);
    ///
    /// assert!(matches!(
    ///     ByteBuffer::try_zeroed(usize::MAX),
    ///     Err(StorageError::AllocationFailed { .. })
    /// ));
    /// ```
    pub fn try_zeroed(len: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        reserve(&mut bytes, len)?;
        bytes.resize(len, 0);
        Ok(ByteBuffer { bytes })
    }

    /// Takes ownership of an existing vector.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        ByteBuffer { bytes }
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut bytes = Vec::new();
        reserve(&mut bytes, self.bytes.len())?;
        bytes.extend_from_slice(&self.bytes);
        Ok(ByteBuffer { bytes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Grows (zero-filling) or shrinks the buffer to `new_len` bytes.
    ///
    /// On failure the buffer is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from_vec(vec![0xAB]);
    /// buf.try_resize(3).unwrap();
    /// assert_eq!(buf.as_slice(), &[0xAB, 0, 0]);
    ///
    /// buf.try_resize(1).unwrap();
    /// assert_eq!(buf.as_slice(), &[0xAB]);
    /// ```
    pub fn try_resize(&mut self, new_len: usize) -> Result<()> {
        let old_len = self.bytes.len();
        if new_len > old_len {
            reserve(&mut self.bytes, new_len - old_len).map_err(|_| {
                StorageError::AllocationFailed { bytes: new_len }
            })?;
            self.bytes.resize(new_len, 0);
        } else {
            self.bytes.truncate(new_len);
            self.bytes.shrink_to_fit();
        }
        Ok(())
    }

    /// Overwrites every byte in `range` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the buffer.
    #[inline]
    pub fn fill(&mut self, range: Range<usize>, value: u8) {
        self.bytes[range].fill(value);
    }

    /// Flips every bit of every byte in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the buffer.
    #[inline]
    pub fn invert(&mut self, range: Range<usize>) {
        for byte in &mut self.bytes[range] {
            *byte ^= 0xFF;
        }
    }
}

fn reserve(bytes: &mut Vec<u8>, additional: usize) -> Result<()> {
    bytes.try_reserve_exact(additional).map_err(|_| {
        log::debug!("allocation of {} bytes refused", additional);
        StorageError::AllocationFailed { bytes: additional }
    })
}
