//! A representation-agnostic view of a bit-vector.

use crate::bits::Bits;

/// Anything that can be read and written one bit at a time.
///
/// Instruction-semantics helpers written against this trait work for both
/// the packed [`Bits`] container and a plain `Vec<bool>`.
pub trait BitVector {
    /// Number of bits.
    fn len(&self) -> u32;

    /// Reads bit `index` (0 is the least significant bit).
    fn bit(&self, index: u32) -> bool;

    /// Writes bit `index`.
    fn set_bit(&mut self, index: u32, value: bool);

    /// Returns `true` if the vector has no bits.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of set bits.
    fn count_ones(&self) -> u32 {
        (0..self.len()).filter(|&i| self.bit(i)).count() as u32
    }

    /// The bits as `0`/`1` characters, MSB first.
    fn to_bit_string(&self) -> String {
        (0..self.len())
            .rev()
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect()
    }
}

impl BitVector for Bits {
    fn len(&self) -> u32 {
        Bits::len(*self)
    }

    fn bit(&self, index: u32) -> bool {
        Bits::bit(*self, index)
    }

    fn set_bit(&mut self, index: u32, value: bool) {
        *self = self.update_bit(index, value);
    }

    fn count_ones(&self) -> u32 {
        self.bits().count_ones()
    }
}

/// Bit `i` of the vector is element `i`.
impl BitVector for Vec<bool> {
    fn len(&self) -> u32 {
        self.as_slice().len() as u32
    }

    fn bit(&self, index: u32) -> bool {
        self[index as usize]
    }

    fn set_bit(&mut self, index: u32, value: bool) {
        self[index as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_low_nibble<B: BitVector>(v: &mut B) {
        for i in 0..4.min(v.len()) {
            v.set_bit(i, true);
        }
    }

    #[test]
    fn packed_and_naive_agree() {
        let mut packed = Bits::zeros(6);
        let mut naive = vec![false; 6];
        set_low_nibble(&mut packed);
        set_low_nibble(&mut naive);
        assert_eq!(packed.to_bit_string(), "001111");
        assert_eq!(naive.to_bit_string(), "001111");
        assert_eq!(BitVector::count_ones(&packed), 4);
        assert_eq!(BitVector::count_ones(&naive), 4);
    }

    #[test]
    fn empty_vectors() {
        assert!(BitVector::is_empty(&Bits::zeros(0)));
        assert!(BitVector::is_empty(&Vec::<bool>::new()));
        assert_eq!(Bits::zeros(0).to_bit_string(), "");
    }

    #[test]
    fn set_bit_on_packed() {
        let mut v = Bits::zeros(8);
        v.set_bit(7, true);
        assert_eq!(v.bits(), 0x80);
        v.set_bit(7, false);
        assert!(v.is_zero());
    }
}
