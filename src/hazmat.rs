//! Components to build your own primality test.
//! Handle with care, read the documentation carefully.

use core::num::NonZero;

mod jacobi;
mod lucas;
mod miller_rabin;
mod modular;

#[cfg(test)]
pub(crate) mod primes;
#[cfg(test)]
pub(crate) mod pseudoprimes;

pub use jacobi::{JacobiSymbol, jacobi_symbol};
pub use lucas::{LucasParams, lucas_test};
pub use miller_rabin::MillerRabin;
pub use modular::{mod_mul, mod_pow};

/// An odd positive 64-bit integer.
///
/// Oddness is what the tests in this module require of their candidates;
/// encoding it in the type keeps the even/zero cases at the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Odd(NonZero<u64>);

impl Odd {
    /// Creates an odd number from `value`, or `None` if it is even.
    pub const fn new(value: u64) -> Option<Self> {
        if value & 1 == 1 {
            // An odd value is in particular nonzero.
            match NonZero::new(value) {
                Some(value) => Some(Self(value)),
                None => None,
            }
        } else {
            None
        }
    }

    /// Returns the value.
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the value as a [`NonZero`], ready to be used as a modulus.
    pub const fn as_nonzero(self) -> NonZero<u64> {
        self.0
    }
}

/// The result of a primality check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primality {
    /// The candidate is certainly composite.
    Composite,
    /// The candidate passed the check. A composite that does is called
    /// a "pseudoprime" with respect to the check in question.
    ProbablyPrime,
    /// The candidate is certainly prime.
    Prime,
}

impl Primality {
    /// Returns `true` if the candidate may be (or certainly is) a prime.
    pub fn is_probably_prime(self) -> bool {
        matches!(self, Self::ProbablyPrime | Self::Prime)
    }
}

/// The result of [`conventions_test`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConventionsTestResult {
    /// The candidate is 2 or 3, known to be prime.
    Prime,
    /// The candidate is smaller than 2 or even, known to be composite.
    Composite,
    /// The conventions do not apply; a real test is required.
    Undecided {
        /// The candidate, now known to be odd (and at least 5).
        odd_candidate: Odd,
    },
}

/// Checks the candidate against the trivial conventions:
/// 2 and 3 are prime; anything else that is even or smaller than 2 is composite
/// (including 1, which is composite by the convention of this crate).
///
/// Everything the conventions do not decide is an odd number of at least 5,
/// which is what the probabilistic tests in this module expect of a candidate.
pub fn conventions_test(candidate: u64) -> ConventionsTestResult {
    if candidate == 2 || candidate == 3 {
        return ConventionsTestResult::Prime;
    }
    if candidate < 2 || candidate & 1 == 0 {
        return ConventionsTestResult::Composite;
    }
    let odd_candidate = Odd::new(candidate).expect("the candidate is odd by the checks above");
    ConventionsTestResult::Undecided { odd_candidate }
}
