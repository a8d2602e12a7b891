//! Directional search for set or clear bits.
//!
//! Bytes in which no bit can match (`0x00` when looking for a set bit,
//! `0xFF` when looking for a clear one) are skipped whole.

use crate::BitArrayError;
use crate::array::{BitArray, BitState};
use crate::index::BitIndex;

type Result<T> = core::result::Result<T, BitArrayError>;

impl BitArray {
    /// Smallest index `j >= start` whose bit is in `state`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfBounds`] if `start >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::{BitArray, BitState};
    ///
    /// let mut bits = BitArray::new(1000).unwrap();
    /// bits.set_bits(&[69, 420]).unwrap();
    ///
    /// assert_eq!(bits.find_next(BitState::Set, 0).unwrap(), Some(69));
    /// assert_eq!(bits.find_next(BitState::Set, 70).unwrap(), Some(420));
    /// assert_eq!(bits.find_next(BitState::Set, 421).unwrap(), None);
    /// ```
    pub fn find_next(&self, state: BitState, start: usize) -> Result<Option<usize>> {
        self.check_index(start)?;
        Ok(self.scan_forward(state, start))
    }

    /// Largest index `j <= start` whose bit is in `state`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfBounds`] if `start >= len`.
    pub fn find_prev(&self, state: BitState, start: usize) -> Result<Option<usize>> {
        self.check_index(start)?;
        Ok(self.scan_backward(state, start))
    }

    pub fn first_set(&self) -> Option<usize> {
        self.first(BitState::Set)
    }

    pub fn first_clear(&self) -> Option<usize> {
        self.first(BitState::Clear)
    }

    pub fn last_set(&self) -> Option<usize> {
        self.last(BitState::Set)
    }

    pub fn last_clear(&self) -> Option<usize> {
        self.last(BitState::Clear)
    }

    fn first(&self, state: BitState) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.scan_forward(state, 0)
    }

    fn last(&self, state: BitState) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.scan_backward(state, self.len() - 1)
    }

    /// Requires `start < len`.
    pub(crate) fn scan_forward(&self, state: BitState, start: usize) -> Option<usize> {
        let bytes = self.as_bytes();
        let absent = state.absent_byte();
        let first_byte = BitIndex(start).byte();

        for (byte, &value) in bytes.iter().enumerate().skip(first_byte) {
            if value == absent {
                continue;
            }
            let from = if byte == first_byte {
                BitIndex(start).offset()
            } else {
                0
            };
            for offset in from..8 {
                let index = BitIndex::of_byte(byte).0 + offset;
                if index >= self.len() {
                    return None;
                }
                if (value & BitIndex(index).mask() != 0) == state.is_set() {
                    return Some(index);
                }
            }
        }
        None
    }

    /// Requires `start < len`.
    pub(crate) fn scan_backward(&self, state: BitState, start: usize) -> Option<usize> {
        let bytes = self.as_bytes();
        let absent = state.absent_byte();
        let last_byte = BitIndex(start).byte();

        for byte in (0..=last_byte).rev() {
            let value = bytes[byte];
            if value == absent {
                continue;
            }
            let to = if byte == last_byte {
                BitIndex(start).offset()
            } else {
                7
            };
            for offset in (0..=to).rev() {
                let index = BitIndex::of_byte(byte).0 + offset;
                if (value & BitIndex(index).mask() != 0) == state.is_set() {
                    return Some(index);
                }
            }
        }
        None
    }
}
