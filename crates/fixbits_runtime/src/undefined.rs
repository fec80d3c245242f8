//! Values the model leaves undefined.
//!
//! Under the `zero` policy every undefined value is the smallest one of its
//! kind. Under `random` values come from the runtime's seeded generator, so a
//! run is reproducible from its seed.

use fixbits_config::UndefinedPolicy;
use fixbits_core::{Bits, Int};
use rand::Rng;

use crate::context::Runtime;

impl Runtime {
    fn random(&self) -> bool {
        self.config.undefined == UndefinedPolicy::Random
    }

    /// An undefined bit-vector of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds 64.
    pub fn undefined_bits(&mut self, len: u32) -> Bits {
        if self.random() {
            Bits::new(self.rng.gen(), len)
        } else {
            Bits::zeros(len)
        }
    }

    /// An undefined integer, within the machine integer range.
    pub fn undefined_int(&mut self) -> Int {
        if self.random() {
            Int::from_mach(self.rng.gen())
        } else {
            Int::ZERO
        }
    }

    /// An undefined integer in `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn undefined_range(&mut self, lo: Int, hi: Int) -> Int {
        assert!(lo <= hi, "empty undefined range [{lo}, {hi}]");
        if self.random() {
            Int::new(self.rng.gen_range(lo.value()..=hi.value()))
        } else {
            lo
        }
    }

    /// An undefined boolean.
    pub fn undefined_bool(&mut self) -> bool {
        self.random() && self.rng.gen()
    }

    /// An undefined single-bit vector.
    pub fn undefined_bit(&mut self) -> Bits {
        Bits::from_bool(self.undefined_bool())
    }
}
