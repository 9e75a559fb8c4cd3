use crate::word::{safe_shr, HashWord};

/// Total bytes hashed, kept as two native words.
///
/// `low` wraps modulo 2^BITS and carries into `high`; lengths that do not fit
/// a single word add their upper part to `high` directly. The pair is only
/// consulted for the pending-block offset and the bit-length padding field,
/// so the total is meaningful modulo 2^(2·BITS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtendedCounter<W> {
    low: W,
    high: W,
}

impl<W: HashWord> ExtendedCounter<W> {
    pub fn new() -> Self {
        ExtendedCounter { low: W::ZERO, high: W::ZERO }
    }

    pub fn reset(&mut self) {
        self.low = W::ZERO;
        self.high = W::ZERO;
    }

    pub fn add(&mut self, len: usize) {
        let old = self.low;
        self.low = old.wrapping_add(W::from_usize(len));
        if self.low < old {
            // carry from low to high
            self.high = self.high.wrapping_add(W::ONE);
        }
        self.high = self.high.wrapping_add(W::from_usize(safe_shr(len, W::BITS)));
    }

    pub fn low(&self) -> W {
        self.low
    }

    pub fn high(&self) -> W {
        self.high
    }

    /// Bytes sitting in an incomplete block, `block_size` must be a power of two.
    #[inline]
    pub fn pending(&self, block_size: usize) -> usize {
        self.low.low_usize() & (block_size - 1)
    }

    /// The byte count as a bit count, `(low, high)`.
    pub fn bit_count(&self) -> (W, W) {
        let low = self.low.shl(3);
        let high = self.low.shr(W::BITS - 3).wrapping_add(self.high.shl(3));
        (low, high)
    }
}
