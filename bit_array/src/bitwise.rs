//! Bitwise combination of equal-length arrays.

use core::ops::Not;

use crate::BitArrayError;
use crate::array::BitArray;

type Result<T> = core::result::Result<T, BitArrayError>;

impl BitArray {
    fn combine_assign(&mut self, other: &BitArray, f: impl Fn(u8, u8) -> u8) -> Result<()> {
        if self.len() != other.len() {
            return Err(BitArrayError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        for (a, &b) in self.as_bytes_mut().iter_mut().zip(other.as_bytes()) {
            *a = f(*a, b);
        }
        Ok(())
    }

    /// `self &= other`, bit by bit.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::LengthMismatch`] if the lengths differ; `self` is
    /// unchanged.
    pub fn and_assign(&mut self, other: &BitArray) -> Result<()> {
        self.combine_assign(other, |a, b| a & b)
    }

    pub fn or_assign(&mut self, other: &BitArray) -> Result<()> {
        self.combine_assign(other, |a, b| a | b)
    }

    pub fn xor_assign(&mut self, other: &BitArray) -> Result<()> {
        self.combine_assign(other, |a, b| a ^ b)
    }

    /// New array holding `self & other`.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let a = BitArray::from_bin("1100").unwrap();
    /// let b = BitArray::from_bin("1010").unwrap();
    /// assert_eq!(a.and(&b).unwrap().to_bin(), "1000");
    /// assert_eq!(a.or(&b).unwrap().to_bin(), "1110");
    /// assert_eq!(a.xor(&b).unwrap().to_bin(), "0110");
    /// ```
    pub fn and(&self, other: &BitArray) -> Result<BitArray> {
        let mut out = self.try_clone()?;
        out.and_assign(other)?;
        Ok(out)
    }

    pub fn or(&self, other: &BitArray) -> Result<BitArray> {
        let mut out = self.try_clone()?;
        out.or_assign(other)?;
        Ok(out)
    }

    pub fn xor(&self, other: &BitArray) -> Result<BitArray> {
        let mut out = self.try_clone()?;
        out.xor_assign(other)?;
        Ok(out)
    }
}

impl Not for BitArray {
    type Output = BitArray;

    fn not(mut self) -> BitArray {
        self.toggle_all();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_equal_lengths() -> Result<()> {
        let mut a = BitArray::from_bin("110011001")?;
        let b = BitArray::from_bin("101010101")?;
        a.xor_assign(&b)?;
        assert_eq!(a.to_bin(), "011001100");
        a.or_assign(&b)?;
        assert_eq!(a.to_bin(), "111011101");
        a.and_assign(&b)?;
        assert_eq!(a.to_bin(), "101010101");
        Ok(())
    }

    #[test]
    fn length_mismatch_leaves_target_unchanged() -> Result<()> {
        let mut a = BitArray::from_bin("1111")?;
        let b = BitArray::from_bin("00000")?;
        assert!(matches!(
            a.and_assign(&b),
            Err(BitArrayError::LengthMismatch { left: 4, right: 5 })
        ));
        assert_eq!(a.to_bin(), "1111");
        assert!(a.or(&b).is_err());
        Ok(())
    }

    #[test]
    fn not_inverts_every_bit() -> Result<()> {
        let a = BitArray::from_bin("1001101")?;
        let inverted = !a;
        assert_eq!(inverted.to_bin(), "0110010");
        assert_eq!(inverted.count_set(), 3);
        Ok(())
    }
}
