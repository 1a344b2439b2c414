//! Brute force enumeration of the primes of a given bit length.

use core::ops::RangeInclusive;

use rand_core::CryptoRng;

use crate::error::Error;
use crate::presets::is_probable_prime;

/// The number of Miller-Rabin rounds each candidate is subjected to.
// Gives a false positive probability below 4^(-100) per candidate.
const MR_ITERATIONS: usize = 100;

/// An iterator over the primes with a given number of significant bits,
/// in increasing order.
///
/// The enumeration is a plain scan of `[2^(bits-1), 2^bits - 1]` with no sieving,
/// checking every candidate with [`is_probable_prime`],
/// so the running time is exponential in `bits`.
/// The iterator is lazy and can be cloned mid-scan,
/// letting the caller stop early, checkpoint, or restart
/// without paying for the whole range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeRange<R> {
    next: u64,
    last: u64,
    rng: R,
}

impl<R: CryptoRng> PrimeRange<R> {
    /// Creates an iterator over the primes in `[2^(bits-1), 2^bits - 1]`.
    ///
    /// Returns an error unless `1 <= bits <= 63`; for larger widths
    /// the upper end of the window would not fit in a `u64`.
    pub fn new(bits: u32, rng: R) -> Result<Self, Error> {
        if !(1..=63).contains(&bits) {
            return Err(Error::BitLengthOutOfRange { bit_length: bits });
        }
        Ok(Self {
            next: 1 << (bits - 1),
            last: (1 << bits) - 1,
            rng,
        })
    }

    /// Returns the candidates not yet scanned.
    ///
    /// Starts out as the whole window and shrinks as the iterator advances,
    /// which makes it usable for progress reporting.
    pub fn span(&self) -> RangeInclusive<u64> {
        self.next..=self.last
    }
}

impl<R: CryptoRng> Iterator for PrimeRange<R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next <= self.last {
            let candidate = self.next;
            self.next += 1;
            if is_probable_prime(&mut self.rng, candidate, MR_ITERATIONS) {
                return Some(candidate);
            }
        }
        None
    }
}
