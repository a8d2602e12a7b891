//! Bit index to byte position translation.
//!
//! Bits are packed most-significant first: bit 0 is the high bit of byte 0,
//! bit 7 its low bit, bit 8 the high bit of byte 1.

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitIndex(pub usize);

impl BitIndex {
    /// Index of the byte holding this bit.
    #[inline]
    pub const fn byte(self) -> usize {
        self.0 / 8
    }

    /// Position inside the byte, 0 being the most significant bit.
    #[inline]
    pub const fn offset(self) -> usize {
        self.0 % 8
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        0x80 >> self.offset()
    }

    /// First bit of `byte`.
    #[inline]
    pub const fn of_byte(byte: usize) -> Self {
        BitIndex(byte * 8)
    }
}
