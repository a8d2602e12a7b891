//! Operations over inclusive ranges of bits.
//!
//! A region is split into a partial head byte, a run of whole body bytes and
//! a partial tail byte. Head and tail go bit by bit, the body is handled a
//! byte at a time.

use crate::array::BitArray;
use crate::index::BitIndex;
use crate::BitArrayError;

type Result<T> = core::result::Result<T, BitArrayError>;

/// Elementary bit mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BitOp {
    Set,
    Clear,
    Toggle,
}

impl BitArray {
    /// Applies `op` to every bit in `[min(lo, hi), max(lo, hi)]`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfBounds`] if either bound is `>= len`; the
    /// array is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::{BitArray, BitOp};
    ///
    /// let mut bits = BitArray::new(24).unwrap();
    /// bits.operate_region(11, 9, BitOp::Set).unwrap();
    /// assert_eq!(bits.to_bin(), "000000000111000000000000");
    /// ```
    pub fn operate_region(&mut self, lo: usize, hi: usize, op: BitOp) -> Result<()> {
        self.check_index(lo)?;
        self.check_index(hi)?;
        self.apply_region(lo.min(hi), lo.max(hi), op);
        Ok(())
    }

    pub fn set_region(&mut self, lo: usize, hi: usize) -> Result<()> {
        self.operate_region(lo, hi, BitOp::Set)
    }

    pub fn clear_region(&mut self, lo: usize, hi: usize) -> Result<()> {
        self.operate_region(lo, hi, BitOp::Clear)
    }

    pub fn toggle_region(&mut self, lo: usize, hi: usize) -> Result<()> {
        self.operate_region(lo, hi, BitOp::Toggle)
    }

    /// Sets every bit. No-op on an empty array.
    pub fn set_all(&mut self) {
        self.operate_all(BitOp::Set);
    }

    pub fn clear_all(&mut self) {
        self.operate_all(BitOp::Clear);
    }

    pub fn toggle_all(&mut self) {
        self.operate_all(BitOp::Toggle);
    }

    fn operate_all(&mut self, op: BitOp) {
        if !self.is_empty() {
            self.apply_region(0, self.len() - 1, op);
        }
    }

    /// Unchecked region kernel; requires `lo <= hi < len`.
    pub(crate) fn apply_region(&mut self, mut lo: usize, mut hi: usize, op: BitOp) {
        debug_assert!(lo <= hi && hi < self.len());

        let mut head_byte = BitIndex(lo).byte();
        let mut tail_byte = BitIndex(hi).byte();

        if head_byte == tail_byte {
            for index in lo..=hi {
                self.apply_bit(index, op);
            }
            return;
        }

        if BitIndex(lo).offset() != 0 {
            let head_end = BitIndex::of_byte(head_byte + 1).0;
            while lo < head_end {
                self.apply_bit(lo, op);
                lo += 1;
            }
            head_byte += 1;
        }

        if BitIndex(hi).offset() != 7 {
            let tail_start = BitIndex::of_byte(tail_byte).0;
            loop {
                self.apply_bit(hi, op);
                if hi == tail_start {
                    break;
                }
                hi -= 1;
            }
            tail_byte -= 1;
        }

        // Head and tail were adjacent partial bytes
        if head_byte > tail_byte {
            return;
        }

        let body = head_byte..tail_byte + 1;
        match op {
            BitOp::Set => self.storage_mut().fill(body, 0xFF),
            BitOp::Clear => self.storage_mut().fill(body, 0x00),
            BitOp::Toggle => self.storage_mut().invert(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_inside_one_byte() -> Result<()> {
        let mut bits = BitArray::new(24)?;
        bits.set_region(9, 11)?;
        assert_eq!(bits.to_bin(), "000000000111000000000000");
        Ok(())
    }

    #[test]
    fn region_with_unaligned_head_and_tail() -> Result<()> {
        let mut bits = BitArray::new(24)?;
        bits.set_region(9, 11)?;
        bits.toggle_region(8, 13)?;
        assert_eq!(bits.to_bin(), "000000001000110000000000");
        bits.clear_region(9, 15)?;
        assert_eq!(bits.to_bin(), "000000001000000000000000");
        Ok(())
    }

    #[test]
    fn region_with_body_bytes() -> Result<()> {
        let mut bits = BitArray::new(40)?;
        bits.set_region(3, 36)?;
        assert_eq!(bits.as_bytes(), &[0x1F, 0xFF, 0xFF, 0xFF, 0xF8]);
        bits.toggle_region(0, 39)?;
        assert_eq!(bits.as_bytes(), &[0xE0, 0x00, 0x00, 0x00, 0x07]);
        bits.clear_region(39, 0)?;
        assert_eq!(bits.count_set(), 0);
        Ok(())
    }

    #[test]
    fn adjacent_partial_bytes_without_body() -> Result<()> {
        let mut bits = BitArray::new(16)?;
        bits.set_region(6, 9)?;
        assert_eq!(bits.to_bin(), "0000001111000000");
        Ok(())
    }

    #[test]
    fn aligned_region_is_all_body() -> Result<()> {
        let mut bits = BitArray::new(24)?;
        bits.set_region(8, 15)?;
        assert_eq!(bits.as_bytes(), &[0x00, 0xFF, 0x00]);
        Ok(())
    }

    #[test]
    fn whole_array_ops() -> Result<()> {
        let mut bits = BitArray::new(20)?;
        bits.set_all();
        assert_eq!(bits.to_bin(), "11111111111111111111");
        bits.clear_all();
        assert_eq!(bits.to_bin(), "00000000000000000000");
        bits.set_bits(&[0, 19])?;
        bits.toggle_all();
        assert_eq!(bits.to_bin(), "01111111111111111110");

        let mut empty = BitArray::new(0)?;
        empty.set_all();
        empty.toggle_all();
        empty.clear_all();
        assert_eq!(empty.count_set(), 0);
        Ok(())
    }

    #[cfg(not(feature = "fast"))]
    #[test]
    fn out_of_range_region_is_rejected() -> Result<()> {
        let mut bits = BitArray::new(8)?;
        assert!(matches!(
            bits.set_region(2, 8),
            Err(BitArrayError::IndexOutOfBounds { index: 8, len: 8 })
        ));
        assert!(bits.toggle_region(8, 0).is_err());
        assert_eq!(bits.count_set(), 0);
        Ok(())
    }
}
