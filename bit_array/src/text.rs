//! Hexadecimal and binary text forms.
//!
//! Hex text packs four bits per digit, most significant first. When the
//! length is not a multiple of four, the final digit holds only the
//! remaining bits, right-aligned: the 7-bit array `1010111` prints as `A7`.
//! Parsing always yields `4 × digits` bits, so `A7` reads back as the 8-bit
//! array `10100111`.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::BitArrayError;
use crate::array::BitArray;
use crate::bit_ops;

type Result<T> = core::result::Result<T, BitArrayError>;

impl BitArray {
    /// Parses hex digits (either case, no prefix) into a `4 × len` bit array.
    ///
    /// # Errors
    ///
    /// - [`BitArrayError::InvalidHexDigit`] on the first character outside
    ///   `0-9 a-f A-F`
    /// - [`BitArrayError::InvalidArgument`] if `4 × len` overflows `usize`
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::from_hex("a7").unwrap();
    /// assert_eq!(bits.len(), 8);
    /// assert_eq!(bits.to_bin(), "10100111");
    /// assert!(BitArray::from_hex("0x12").is_err());
    /// ```
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut array = Self::new(hex_bit_len(text.len())?)?;
        let bytes = array.as_bytes_mut();

        for (position, digit) in text.chars().enumerate() {
            let value = bit_ops::hex_value(digit)
                .ok_or(BitArrayError::InvalidHexDigit { digit, position })?;
            // even positions are the high nibble
            let shift = if position % 2 == 0 { 4 } else { 0 };
            bytes[position / 2] |= value << shift;
        }
        Ok(array)
    }

    /// Parses `0`/`1` characters; character `i` becomes bit `i`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::InvalidBinDigit`] on any other character.
    pub fn from_bin(text: &str) -> Result<Self> {
        let mut array = Self::new(text.len())?;
        for (position, digit) in text.chars().enumerate() {
            match digit {
                '0' => {}
                '1' => array.set_bit(position)?,
                _ => return Err(BitArrayError::InvalidBinDigit { digit, position }),
            }
        }
        Ok(array)
    }

    /// Buffer size a C-style NUL-terminated hex string would need.
    #[inline]
    pub fn min_hex_str_len(&self) -> usize {
        self.num_nibbles() + 1
    }

    #[inline]
    pub fn min_bin_str_len(&self) -> usize {
        self.len() + 1
    }

    /// Upper-case hex form; empty for an empty array.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::from_bin("1010111").unwrap();
    /// assert_eq!(bits.to_hex(), "A7");
    /// ```
    pub fn to_hex(&self) -> String {
        self.hex_digits().collect()
    }

    /// One `0`/`1` character per bit, bit 0 first.
    pub fn to_bin(&self) -> String {
        self.bin_digits().collect()
    }

    #[inline]
    fn num_nibbles(&self) -> usize {
        self.len().div_ceil(4)
    }

    /// Value of nibble `k` (zero-based), right-aligning a partial last one.
    fn nibble(&self, k: usize) -> u8 {
        let byte = self.as_bytes()[k / 2];
        let raw = if k % 2 == 0 { byte >> 4 } else { byte & 0x0F };

        let real_bits = self.len() % 4;
        if real_bits != 0 && k + 1 == self.num_nibbles() {
            raw >> (4 - real_bits)
        } else {
            raw
        }
    }

    fn hex_digits(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        (0..self.num_nibbles()).map(|k| bit_ops::hex_digit(self.nibble(k)))
    }

    fn bin_digits(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        (0..self.len()).map(|i| if self.bit(i) { '1' } else { '0' })
    }

    /// Writes the hex digits separated by `", "`, breaking the line after
    /// every `columns` digits and after the last one.
    ///
    /// Writes nothing for an empty array.
    ///
    /// # Errors
    ///
    /// - [`BitArrayError::InvalidArgument`] when `columns == 0`
    /// - [`BitArrayError::Io`] if the writer fails
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::from_hex("0123456").unwrap();
    /// let mut out = Vec::new();
    /// bits.print_hex(&mut out, 3).unwrap();
    /// assert_eq!(out, b"0, 1, 2\n3, 4, 5\n6\n");
    /// ```
    #[cfg(feature = "std")]
    pub fn print_hex<W: std::io::Write>(&self, out: &mut W, columns: usize) -> Result<()> {
        if columns == 0 {
            return Err(BitArrayError::InvalidArgument("column count must be positive"));
        }
        print_columns(out, self.hex_digits(), columns)?;
        Ok(())
    }

    /// Binary counterpart of [`print_hex`](Self::print_hex). An empty array
    /// prints a lone newline.
    #[cfg(feature = "std")]
    pub fn print_bin<W: std::io::Write>(&self, out: &mut W, columns: usize) -> Result<()> {
        if columns == 0 {
            return Err(BitArrayError::InvalidArgument("column count must be positive"));
        }
        if self.is_empty() {
            out.write_all(b"\n")?;
            return Ok(());
        }
        print_columns(out, self.bin_digits(), columns)?;
        Ok(())
    }
}

/// Bits produced by parsing `digits` hex digits.
fn hex_bit_len(digits: usize) -> Result<usize> {
    digits
        .checked_mul(4)
        .ok_or(BitArrayError::InvalidArgument("hex string too long for a bit array"))
}

#[cfg(feature = "std")]
fn print_columns<W: std::io::Write>(
    out: &mut W,
    digits: impl ExactSizeIterator<Item = char>,
    columns: usize,
) -> std::io::Result<()> {
    let total = digits.len();
    for (i, digit) in digits.enumerate() {
        let n = i + 1;
        let sep = if n == total || n % columns == 0 { "\n" } else { ", " };
        write!(out, "{}{}", digit, sep)?;
    }
    Ok(())
}

/// Binary text.
impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.bin_digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.hex_digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.hex_digits() {
            write!(f, "{}", digit.to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Parses binary text, see [`BitArray::from_bin`].
impl FromStr for BitArray {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bin(s)
    }
}
