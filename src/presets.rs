use rand_core::CryptoRng;

use crate::hazmat::{
    ConventionsTestResult, LucasParams, MillerRabin, conventions_test, lucas_test,
};

/// The stage of the Baillie-PSW test at which a candidate was found to be composite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate is smaller than 2, or even and greater than 2.
    Trivial,
    /// The candidate failed the Miller-Rabin check with base 2.
    MillerRabinBase2,
    /// The search for the Lucas parameters found the candidate to be a perfect square,
    /// or to share a factor with one of the tried discriminants.
    LucasParamsSearch,
    /// The candidate failed the strong Lucas check.
    StrongLucas,
}

/// The verdict of the Baillie-PSW test (see [`baillie_psw`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BailliePswVerdict {
    /// The candidate was found to be composite at the given stage.
    Composite(Rejection),
    /// The candidate passed every stage of the test.
    ProbablyPrime,
    /// The candidate is 2 or 3, known to be prime without running the test.
    Prime,
}

impl BailliePswVerdict {
    /// Returns `true` if the candidate may be (or certainly is) a prime.
    pub fn is_probably_prime(self) -> bool {
        matches!(self, Self::ProbablyPrime | Self::Prime)
    }
}

/// Probabilistically checks if the given number is prime
/// with `iterations` Miller-Rabin rounds, each using a random base
/// drawn from the provided RNG.
///
/// Each round reports a composite as a prime with probability less than 1/4,
/// so the result is wrong with probability less than `4^(-iterations)`
/// (for most composites far less[^Pomerance1980]); primes are never rejected.
/// With `iterations == 0` no rounds are performed, and every candidate
/// the trivial checks do not decide is accepted.
///
/// [^Pomerance1980]:
///   C. Pomerance, J. L. Selfridge, S. S. Wagstaff "The Pseudoprimes to 25*10^9",
///   Math. Comp. 35 1003-1026 (1980),
///   DOI: [10.2307/2006210](https://dx.doi.org/10.2307/2006210)
pub fn is_probable_prime<R: CryptoRng + ?Sized>(
    rng: &mut R,
    candidate: u64,
    iterations: usize,
) -> bool {
    let odd_candidate = match conventions_test(candidate) {
        ConventionsTestResult::Prime => return true,
        ConventionsTestResult::Composite => return false,
        ConventionsTestResult::Undecided { odd_candidate } => odd_candidate,
    };

    let mr = MillerRabin::new(odd_candidate);
    (0..iterations).all(|_| mr.test_random_base(rng).is_probably_prime())
}

/// Checks if the given number is prime with the Baillie-PSW test[^Baillie1980],
/// reporting the stage that rejected a composite.
///
/// Performed checks:
/// - Miller-Rabin check with base 2;
/// - strong Lucas check with Selfridge parameters (Baillie method A).
///
/// See [`MillerRabin`] and [`lucas_test`] for more details about the checks.
///
/// The test is deterministic, and for 64-bit candidates it is in fact exact:
/// the verification of the base 2 pseudoprime tables by Feitsma and Galway
/// showed that no composite below `2^64` passes both checks[^Baillie2021].
///
/// [^Baillie1980]: R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
///       Math. Comp. 35 1391-1417 (1980),
///       DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
///       <http://mpqs.free.fr/LucasPseudoprimes.pdf>
///
/// [^Baillie2021]: R. Baillie, A. Fiori, S. S. Wagstaff,
///       "Strengthening the Baillie-PSW primality test",
///       Math. Comp. 90 1931-1955 (2021),
///       DOI: [10.1090/mcom/3616](https://doi.org/10.1090/mcom/3616)
pub fn baillie_psw(candidate: u64) -> BailliePswVerdict {
    let odd_candidate = match conventions_test(candidate) {
        ConventionsTestResult::Prime => return BailliePswVerdict::Prime,
        ConventionsTestResult::Composite => {
            return BailliePswVerdict::Composite(Rejection::Trivial);
        }
        ConventionsTestResult::Undecided { odd_candidate } => odd_candidate,
    };

    if !MillerRabin::new(odd_candidate)
        .test_base_two()
        .is_probably_prime()
    {
        return BailliePswVerdict::Composite(Rejection::MillerRabinBase2);
    }

    // The Selfridge search only ever discovers compositeness.
    let params = match LucasParams::selfridge(odd_candidate) {
        Ok(params) => params,
        Err(_) => return BailliePswVerdict::Composite(Rejection::LucasParamsSearch),
    };

    if !lucas_test(odd_candidate, params).is_probably_prime() {
        return BailliePswVerdict::Composite(Rejection::StrongLucas);
    }

    BailliePswVerdict::ProbablyPrime
}

/// Checks if the given number is prime with the Baillie-PSW test.
///
/// See [`baillie_psw`] for details about the performed checks.
pub fn is_baillie_psw_prime(candidate: u64) -> bool {
    baillie_psw(candidate).is_probably_prime()
}
