//! Resizable array of individually addressable bits packed into bytes.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new(12).expect("failed to allocate");
//! bits.set_bit(0).unwrap();
//! bits.set_bits(&[3, 11]).unwrap();
//!
//! assert!(bits.check_bit(3).unwrap());
//! assert_eq!(bits.count_set(), 3);
//! assert_eq!(bits.to_bin(), "100100000001");
//! ```
//!
//! ## Raw byte image
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let bits = BitArray::from_bin("1010111").unwrap();
//! // Bit 0 is the most significant bit of byte 0.
//! assert_eq!(bits.as_bytes()[0] & 0xFE, 0b1010_1110);
//!
//! let restored = BitArray::from_raw_parts(7, bits.as_bytes().to_vec()).unwrap();
//! assert_eq!(restored, bits);
//! ```
use crate::BitArrayError;
use crate::bit_ops::{self, SET_BITS_PER_BYTE};
use crate::index::BitIndex;
use crate::region::BitOp;
use alloc::vec::Vec;
use raw_bytes::ByteBuffer;

type Result<T> = core::result::Result<T, BitArrayError>;

/// State of a single bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BitState {
    Clear,
    Set,
}

impl BitState {
    #[inline]
    pub fn is_set(self) -> bool {
        self == BitState::Set
    }

    /// The byte value in which no bit is in this state.
    #[inline]
    pub(crate) fn absent_byte(self) -> u8 {
        match self {
            BitState::Set => 0x00,
            BitState::Clear => 0xFF,
        }
    }
}

impl From<bool> for BitState {
    #[inline]
    fn from(set: bool) -> Self {
        if set { BitState::Set } else { BitState::Clear }
    }
}

/// A fixed-length sequence of bits stored in `⌈len / 8⌉` bytes.
///
/// Bits beyond `len` in the final byte (pad bits) carry no meaning. They are
/// ignored by every read, by equality and by the text forms, but are kept
/// verbatim in [`as_bytes`](Self::as_bytes).
#[derive(Debug, Clone)]
pub struct BitArray {
    storage: ByteBuffer,
    len: usize,
}

impl BitArray {
    /// Creates an array of `len` clear bits. `len == 0` is allowed.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::AllocationFailed`] if the bytes cannot be obtained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::new(10).expect("failed to allocate");
    /// assert_eq!(bits.len(), 10);
    /// assert_eq!(bits.to_bin(), "0000000000");
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        let storage = ByteBuffer::try_zeroed(bit_ops::bytes_for_bits(len)).inspect_err(|e| {
            log::debug!("failed to allocate a {}-bit array: {:?}", len, e);
        })?;
        Ok(Self { storage, len })
    }

    /// Creates an array of `len` bits all in `state`.
    pub fn filled(len: usize, state: BitState) -> Result<Self> {
        let mut array = Self::new(len)?;
        if state.is_set() {
            let n = array.storage.len();
            array.storage.fill(0..n, 0xFF);
        }
        Ok(array)
    }

    /// Wraps an existing byte image of a `len` bit array.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::ByteLengthMismatch`] unless `bytes.len() == ⌈len / 8⌉`.
    pub fn from_raw_parts(len: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = bit_ops::bytes_for_bits(len);
        if bytes.len() != expected {
            return Err(BitArrayError::ByteLengthMismatch {
                len,
                expected,
                found: bytes.len(),
            });
        }
        Ok(Self {
            storage: ByteBuffer::from_vec(bytes),
            len,
        })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            storage: self.storage.try_clone()?,
            len: self.len,
        })
    }

    /// Changes the length to `new_len` bits.
    ///
    /// The first `min(len, new_len)` bits are kept. When growing, every newly
    /// exposed bit is clear, including any stale pad bits of the old final
    /// byte.
    ///
    /// # Errors
    ///
    /// - [`BitArrayError::InvalidArgument`] when `new_len == 0`
    /// - [`BitArrayError::AllocationFailed`], leaving the array unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::from_bin("101").unwrap();
    /// bits.resize(6).unwrap();
    /// assert_eq!(bits.to_bin(), "101000");
    /// bits.resize(2).unwrap();
    /// assert_eq!(bits.to_bin(), "10");
    /// assert!(bits.resize(0).is_err());
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len == 0 {
            return Err(BitArrayError::InvalidArgument(
                "cannot resize a bit array to zero bits",
            ));
        }
        let old_len = self.len;
        self.storage
            .try_resize(bit_ops::bytes_for_bits(new_len))
            .inspect_err(|e| {
                log::debug!("unable to resize bit array to {} bits: {:?}", new_len, e);
            })?;
        self.len = new_len;
        log::trace!("resized bit array from {} to {} bits", old_len, new_len);

        if new_len > old_len {
            self.apply_region(old_len, new_len - 1, BitOp::Clear);
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw packed bytes, pad bits included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }

    /// Mutable raw packed bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.storage.as_mut_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.storage.into_vec()
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut ByteBuffer {
        &mut self.storage
    }

    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if cfg!(not(feature = "fast")) && index >= self.len {
            return Err(BitArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        let at = BitIndex(index);
        self.storage.as_slice()[at.byte()] & at.mask() != 0
    }

    #[inline]
    pub(crate) fn apply_bit(&mut self, index: usize, op: BitOp) {
        let at = BitIndex(index);
        let byte = &mut self.storage.as_mut_slice()[at.byte()];
        match op {
            BitOp::Set => *byte |= at.mask(),
            BitOp::Clear => *byte &= !at.mask(),
            BitOp::Toggle => *byte ^= at.mask(),
        }
    }

    /// Returns whether bit `index` is set.
    pub fn check_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.operate_bit(index, BitOp::Set)
    }

    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.operate_bit(index, BitOp::Clear)
    }

    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        self.operate_bit(index, BitOp::Toggle)
    }

    /// Applies `op` to bit `index`.
    pub fn operate_bit(&mut self, index: usize, op: BitOp) -> Result<()> {
        self.check_index(index)?;
        self.apply_bit(index, op);
        Ok(())
    }

    /// Sets every bit listed in `indices`.
    ///
    /// All indices are validated first: on error no bit has been changed.
    pub fn set_bits(&mut self, indices: &[usize]) -> Result<()> {
        self.operate_bits(indices, BitOp::Set)
    }

    pub fn clear_bits(&mut self, indices: &[usize]) -> Result<()> {
        self.operate_bits(indices, BitOp::Clear)
    }

    /// Toggles every bit listed in `indices`. Duplicates cancel pairwise.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(4).unwrap();
    /// bits.toggle_bits(&[1, 2, 2]).unwrap();
    /// assert_eq!(bits.to_bin(), "0100");
    /// ```
    pub fn toggle_bits(&mut self, indices: &[usize]) -> Result<()> {
        self.operate_bits(indices, BitOp::Toggle)
    }

    fn operate_bits(&mut self, indices: &[usize], op: BitOp) -> Result<()> {
        for &index in indices {
            self.check_index(index)?;
        }
        for &index in indices {
            self.apply_bit(index, op);
        }
        Ok(())
    }

    /// Number of set bits.
    ///
    /// Whole bytes go through a 256-entry lookup table; the bits of a partial
    /// final byte are checked one by one so pad bits never count.
    pub fn count_set(&self) -> usize {
        let full_bytes = self.len / 8;
        let bytes = self.storage.as_slice();

        let mut count: usize = bytes[..full_bytes]
            .iter()
            .map(|&b| SET_BITS_PER_BYTE[b as usize] as usize)
            .sum();

        let tail_start = full_bytes * 8;
        for index in tail_start..self.len {
            if self.bit(index) {
                count += 1;
            }
        }
        count
    }

    #[inline]
    pub fn count_clear(&self) -> usize {
        self.len - self.count_set()
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let full_bytes = self.len / 8;
        let (a, b) = (self.as_bytes(), other.as_bytes());
        if a[..full_bytes] != b[..full_bytes] {
            return false;
        }
        if self.len % 8 == 0 {
            return true;
        }
        let mask = bit_ops::tail_mask(self.len);
        a[full_bytes] & mask == b[full_bytes] & mask
    }
}

impl Eq for BitArray {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fresh_array_is_clear() -> Result<()> {
        let bits = BitArray::new(26)?;
        assert_eq!(bits.len(), 26);
        assert_eq!(bits.as_bytes().len(), 4);
        assert_eq!(bits.count_set(), 0);
        assert_eq!(bits.count_clear(), 26);
        Ok(())
    }

    #[test]
    fn zero_length() -> Result<()> {
        let bits = BitArray::new(0)?;
        assert!(bits.is_empty());
        assert!(bits.as_bytes().is_empty());
        assert_eq!(bits.count_set(), 0);
        assert_eq!(bits.count_clear(), 0);
        if cfg!(not(feature = "fast")) {
            assert!(matches!(
                bits.check_bit(0),
                Err(BitArrayError::IndexOutOfBounds { index: 0, len: 0 })
            ));
        }
        Ok(())
    }

    #[test]
    fn impossible_allocation_is_reported() {
        assert!(matches!(
            BitArray::new(usize::MAX),
            Err(BitArrayError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn single_bit_ops_use_msb_first_layout() -> Result<()> {
        let mut bits = BitArray::new(24)?;
        bits.set_bit(23)?;
        assert_eq!(bits.as_bytes(), &[0x00, 0x00, 0x01]);
        bits.set_bit(0)?;
        assert_eq!(bits.as_bytes(), &[0x80, 0x00, 0x01]);
        bits.set_bit(9)?;
        assert_eq!(bits.as_bytes(), &[0x80, 0x40, 0x01]);

        assert!(bits.check_bit(9)?);
        assert!(!bits.check_bit(10)?);

        bits.clear_bit(0)?;
        assert!(!bits.check_bit(0)?);
        bits.toggle_bit(0)?;
        assert!(bits.check_bit(0)?);
        bits.toggle_bit(0)?;
        assert!(!bits.check_bit(0)?);
        Ok(())
    }

    #[cfg(not(feature = "fast"))]
    #[test]
    fn out_of_range_index_is_rejected() -> Result<()> {
        let mut bits = BitArray::new(24)?;
        assert!(matches!(
            bits.set_bit(24),
            Err(BitArrayError::IndexOutOfBounds { index: 24, len: 24 })
        ));
        assert!(bits.clear_bit(100).is_err());
        assert!(bits.toggle_bit(24).is_err());
        assert!(bits.check_bit(24).is_err());
        Ok(())
    }

    #[cfg(not(feature = "fast"))]
    #[test]
    fn bulk_ops_validate_before_mutating() -> Result<()> {
        let mut bits = BitArray::new(10)?;
        assert!(bits.set_bits(&[1, 2, 10]).is_err());
        assert_eq!(bits.count_set(), 0);

        bits.set_bits(&[1, 2, 9])?;
        assert_eq!(bits.count_set(), 3);
        bits.clear_bits(&[2, 9])?;
        assert_eq!(bits.count_set(), 1);
        bits.toggle_bits(&[0, 0, 5])?;
        assert!(!bits.check_bit(0)?);
        assert!(bits.check_bit(5)?);
        Ok(())
    }

    #[test]
    fn count_ignores_pad_bits() -> Result<()> {
        // 21 bits, final byte fully set including 3 pad bits
        let mut bits = BitArray::from_raw_parts(21, vec![0xFF, 0xFF, 0xFF])?;
        assert_eq!(bits.count_set(), 21);
        bits.clear_bit(10)?;
        assert_eq!(bits.count_set(), 20);
        assert_eq!(bits.count_clear(), 1);
        Ok(())
    }

    #[test]
    fn filled_with_set_bits() -> Result<()> {
        let bits = BitArray::filled(13, BitState::Set)?;
        assert_eq!(bits.count_set(), 13);
        let bits = BitArray::filled(13, BitState::Clear)?;
        assert_eq!(bits.count_set(), 0);
        Ok(())
    }

    #[test]
    fn raw_parts_length_is_checked() {
        assert!(matches!(
            BitArray::from_raw_parts(9, vec![0]),
            Err(BitArrayError::ByteLengthMismatch {
                len: 9,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn equality_ignores_pad_bits() -> Result<()> {
        let a = BitArray::from_raw_parts(4, vec![0b1010_0000])?;
        let b = BitArray::from_raw_parts(4, vec![0b1010_1111])?;
        let c = BitArray::from_raw_parts(5, vec![0b1010_0000])?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a.as_bytes(), b.as_bytes());
        Ok(())
    }

    #[test]
    fn copy_is_independent() -> Result<()> {
        let mut original = BitArray::new(16)?;
        original.set_bits(&[3, 15])?;
        let mut copy = original.try_clone()?;
        assert_eq!(copy, original);
        copy.clear_bit(3)?;
        assert!(original.check_bit(3)?);
        assert!(!copy.check_bit(3)?);
        Ok(())
    }

    #[test]
    fn resize_clears_exposed_pad_bits() -> Result<()> {
        // 5 real bits, 3 stale pad bits set in the final byte
        let mut bits = BitArray::from_raw_parts(5, vec![0b1000_0111])?;
        bits.resize(12)?;
        assert_eq!(bits.len(), 12);
        assert_eq!(bits.as_bytes().len(), 2);
        assert_eq!(bits.count_set(), 1);
        assert!(bits.check_bit(0)?);
        Ok(())
    }

    #[test]
    fn resize_rejects_zero_and_survives_failure() -> Result<()> {
        let mut bits = BitArray::new(9)?;
        bits.set_bit(8)?;
        assert!(matches!(
            bits.resize(0),
            Err(BitArrayError::InvalidArgument(_))
        ));
        assert!(matches!(
            bits.resize(usize::MAX),
            Err(BitArrayError::AllocationFailed { .. })
        ));
        assert_eq!(bits.len(), 9);
        assert!(bits.check_bit(8)?);
        Ok(())
    }
}
