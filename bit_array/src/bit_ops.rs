//! Byte-level helpers shared by the bit array operations.

/// Number of set bits for every possible byte value.
pub(crate) const SET_BITS_PER_BYTE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = (i & 1) as u8 + table[i >> 1];
        i += 1;
    }
    table
};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes needed to hold `num_bits` bits.
#[inline]
pub const fn bytes_for_bits(num_bits: usize) -> usize {
    num_bits.div_ceil(8)
}

/// Mask selecting the real bits of the final byte of a `num_bits` long
/// array, or `0xFF` when the final byte is full.
#[inline]
pub(crate) const fn tail_mask(num_bits: usize) -> u8 {
    match num_bits % 8 {
        0 => 0xFF,
        r => !(0xFF >> r),
    }
}

/// Upper-case hex digit for the low nibble of `nibble`.
#[inline]
pub(crate) fn hex_digit(nibble: u8) -> char {
    HEX_DIGITS[(nibble & 0x0F) as usize] as char
}

/// Value of a hex digit in either case.
#[inline]
pub(crate) fn hex_value(digit: char) -> Option<u8> {
    digit.to_digit(16).map(|v| v as u8)
}
