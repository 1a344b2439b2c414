//! Miller-Rabin primality test.

use core::num::NonZero;

use rand_core::CryptoRng;

use super::{
    Odd, Primality,
    modular::{mod_mul, mod_pow},
};

/// Precomputed data used to perform a Miller-Rabin primality test[^Pomerance1980].
///
/// The numbers that pass it are commonly called "strong probable primes"
/// (or "strong pseudoprimes" if they are, in fact, composite).
///
/// [^Pomerance1980]:
///   C. Pomerance, J. L. Selfridge, S. S. Wagstaff "The Pseudoprimes to 25*10^9",
///   Math. Comp. 35 1003-1026 (1980),
///   DOI: [10.2307/2006210](https://dx.doi.org/10.2307/2006210)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MillerRabin {
    // The odd number that may or may not be a prime.
    candidate: Odd,
    /// The `s` of `candidate - 1 == 2^s * d` (the pair `s` and `d` is unique, with `d` odd).
    s: u32,
    /// The `d` of `candidate - 1 == 2^s * d`.
    d: u64,
}

impl MillerRabin {
    /// Initializes a Miller-Rabin test for `candidate`.
    pub fn new(candidate: Odd) -> Self {
        // Find `s` and odd `d` such that `candidate - 1 == 2^s * d`.
        let (s, d) = if candidate.get() == 1 {
            (0, 1)
        } else {
            let candidate_minus_one = candidate.get() - 1;
            let s = candidate_minus_one.trailing_zeros();
            (s, candidate_minus_one >> s)
        };
        Self { candidate, s, d }
    }

    /// Perform a Miller-Rabin check with a given base.
    pub fn test(&self, base: u64) -> Primality {
        // One could check here if `gcd(base, candidate) == 1` and return `Composite` otherwise.
        // In practice it doesn't make any performance difference in normal operation.

        let modulus = self.candidate.as_nonzero();
        let minus_one = self.candidate.get() - 1;

        let mut test = mod_pow(base, self.d, modulus);
        if test == 1 || test == minus_one {
            return Primality::ProbablyPrime;
        }
        for _ in 1..self.s {
            test = mod_mul(test, test, modulus);
            if test == 1 {
                // `test` became 1 without passing through -1 first,
                // so a nontrivial square root of 1 exists.
                return Primality::Composite;
            } else if test == minus_one {
                return Primality::ProbablyPrime;
            }
        }
        Primality::Composite
    }

    /// Perform a Miller-Rabin check with base 2.
    pub fn test_base_two(&self) -> Primality {
        self.test(2)
    }

    /// Draws a random base in the range `[2, candidate-2]` using the provided RNG.
    /// The draw is rejection-sampled, so no modulo bias is introduced.
    ///
    /// Panics for candidates smaller than 5, for which the range is empty.
    pub fn random_base<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.candidate.get() < 5 {
            panic!("drawing a random base requires a candidate of at least 5");
        }
        let range =
            NonZero::new(self.candidate.get() - 3).expect("the range is nonzero by the check above");
        random_mod(rng, range) + 2
    }

    /// Perform a Miller-Rabin check with a random base (in the range `[2, candidate-2]`,
    /// because the test holds trivially for bases 1 or `candidate-1`) drawn using the provided RNG.
    ///
    /// *Note:* if `candidate == 1` or `candidate == 3` (which would make the above range
    /// contain no numbers) no check is actually performed, since we already know the result
    /// ([`Primality::Composite`] for 1, [`Primality::Prime`] for 3).
    pub fn test_random_base<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Primality {
        if self.candidate.get() == 1 {
            // As per standard convention
            return Primality::Composite;
        }
        if self.candidate.get() == 3 {
            // As per standard convention
            return Primality::Prime;
        }
        // The candidate is odd, so by now it is guaranteed to be >= 5.
        self.test(self.random_base(rng))
    }
}

/// Returns a value distributed uniformly in `[0, range)`.
fn random_mod<R: CryptoRng + ?Sized>(rng: &mut R, range: NonZero<u64>) -> u64 {
    // Values below `2^64 mod range` would be over-represented by a plain
    // reduction, so they are rejected.
    let zone = range.get().wrapping_neg() % range.get();
    loop {
        let r = rng.next_u64();
        if r >= zone {
            return r % range.get();
        }
    }
}
