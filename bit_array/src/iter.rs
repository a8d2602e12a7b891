use crate::array::{BitArray, BitState};

impl BitArray {
    /// Iterates over every bit as a `bool`, bit 0 first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }

    /// Iterates over the indices of set bits in ascending order.
    ///
    /// Runs of clear bytes are skipped whole, so sparse arrays are cheap.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(300).unwrap();
    /// bits.set_bits(&[4, 5, 299]).unwrap();
    /// assert_eq!(bits.ones().collect::<Vec<_>>(), vec![4, 5, 299]);
    /// ```
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            array: self,
            next: 0,
        }
    }
}

pub struct Iter<'a> {
    array: &'a BitArray,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.array.len() {
            None
        } else {
            let bit = self.array.bit(self.index);
            self.index += 1;
            Some(bit)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Ones<'a> {
    array: &'a BitArray,
    next: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.array.len() {
            return None;
        }
        match self.array.scan_forward(BitState::Set, self.next) {
            Some(found) => {
                self.next = found + 1;
                Some(found)
            }
            None => {
                self.next = self.array.len();
                None
            }
        }
    }
}
