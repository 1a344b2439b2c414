//! Strong Lucas primality test.

use super::{
    Odd, Primality,
    jacobi::{JacobiSymbol, jacobi_symbol_vartime},
    modular::{mod_add, mod_mul, mod_sub, reduce_signed},
};

/// The maximum number of attempts to find `D` such that `(D/n) == -1`.
// Reaching it is widely believed to be impossible for a non-square `n`.
// So if we exceed it, we will panic reporting the value of `n`.
const MAX_ATTEMPTS: u32 = 10000;

/// The parameters of a Lucas sequence: the discriminant `D`
/// and the seed pair `(P, Q)`, related by `D == P^2 - 4Q`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LucasParams {
    /// The discriminant `D`.
    pub d: i64,
    /// The `P` of the recurrences `U_k = P U_{k-1} - Q U_{k-2}`
    /// and `V_k = P V_{k-1} - Q V_{k-2}`.
    pub p: u64,
    /// The `Q` of the recurrences above.
    pub q: i64,
}

impl LucasParams {
    /// Selects the parameters by "Method A" given in Baillie & Wagstaff[^Baillie1980],
    /// attributed to Selfridge: try `D = 5, -7, 9, -11, ...` until `(D/n) == -1`,
    /// then return `P = 1` and `Q = (1 - D) / 4`.
    ///
    /// Returns `Err(primality)` if the primality of `candidate` was discovered
    /// during the search.
    ///
    /// [^Baillie1980]:
    ///   R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
    ///   Math. Comp. 35 1391-1417 (1980),
    ///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
    ///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
    pub fn selfridge(candidate: Odd) -> Result<Self, Primality> {
        let n = candidate.get();

        // If `n` is a perfect square, no `D` with `(D/n) == -1` exists,
        // and the search would run past any attempt limit.
        // An odd square greater than 1 is composite, and 1 is composite by convention.
        let sqrt = n.isqrt();
        if sqrt * sqrt == n {
            return Err(Primality::Composite);
        }

        let mut d = 5_i64;
        let mut attempts = 0;
        loop {
            if attempts >= MAX_ATTEMPTS {
                panic!("internal error: cannot find (D/n) = -1 for {n}");
            }

            let j = jacobi_symbol_vartime(d, candidate);

            if j == JacobiSymbol::MinusOne {
                break;
            }
            if j == JacobiSymbol::Zero {
                // Modification of Method A by Baillie, in an example to OEIS:A217120
                // (<https://oeis.org/A217120/a217120_1.txt>):
                // If `d == (+,-)n` (e.g. `n == 5` or 11), try the next `d` instead of quitting;
                // this small modification of Selfridge's method A
                // enables 5 and 11 to be classified as Lucas probable primes.
                // Otherwise `gcd(D, n) > 1`, and therefore `n` is not prime.
                if d.unsigned_abs() != n {
                    return Err(Primality::Composite);
                }
            }

            attempts += 1;
            d = -d;
            d += d.signum() * 2;
        }

        // No remainder by construction of `d`.
        let q = (1 - d) / 4;

        Ok(Self { d, p: 1, q })
    }
}

/// Performs the strong Lucas primality test by Baillie & Wagstaff[^Baillie1980]
/// for the given parameters (see [`LucasParams::selfridge`]).
///
/// The checks are performed on the Lucas sequences `U(P, Q)` and `V(P, Q)`
/// built up to the elements `U(d)`, `V(d)`, where `d * 2^s == n - (D/n)`, `d` odd:
///
/// 1. Check that `U(d) == 0`.
/// 2. Check that `V(d * 2^r) == 0` for any `0 <= r < s`.
///
/// If either is true, `n` is a "strong Lucas probable prime"[^Baillie1980].
/// If the parameters come from [`LucasParams::selfridge`],
/// known false positives constitute OEIS:A217255[^A217255].
///
/// [^Baillie1980]:
///   R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
///   Math. Comp. 35 1391-1417 (1980),
///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
///
/// [^A217255]: <https://oeis.org/A217255>
pub fn lucas_test(candidate: Odd, params: LucasParams) -> Primality {
    let n = candidate.get();
    let modulus = candidate.as_nonzero();

    // The sequence checks below cannot classify 1; it is composite by convention.
    if n == 1 {
        return Primality::Composite;
    }

    // Find `d` and `s`, such that `d` is odd and `d * 2^s == n - (D/n)`.
    // The parameters are chosen so that `(D/n) == -1`, hence `n - (D/n) == n + 1`.
    // `n + 1` can overflow, so the decomposition starts from `(n + 1) / 2`
    // (which fits, since `n` is odd, making `n + 1` even and `s >= 1`).
    let half = (n >> 1) + 1;
    let s = half.trailing_zeros() + 1;
    let d = half >> (s - 1);

    let p = params.p % n;
    let q = reduce_signed(params.q, modulus);
    let disc = reduce_signed(params.d, modulus);

    // Compute the `d`-th elements of the Lucas sequences `U(P, Q)` and `V(P, Q)`, where:
    //
    //   U_1 = 1,  V_1 = P,
    //   U_k = P U_{k-1} - Q U_{k-2},
    //   V_k = P V_{k-1} - Q V_{k-2}.
    //
    // Walking the bits of `d` from the second-highest to the lowest,
    // the sequence index `k` is doubled via
    //
    //   U_{2k} = U_k V_k,
    //   V_{2k} = V_k^2 - 2 Q^k,
    //
    // and, for the set bits, advanced by one via
    //
    //   U_{k+1} = (P U_k + V_k) / 2,
    //   V_{k+1} = (D U_k + P V_k) / 2,
    //
    // where the halving is modulo `n` (`n` is odd, so 2 is invertible).
    // See [^Baillie1980], section 3, or Crandall & Pomerance,
    // "Prime numbers: a computational perspective", 2nd ed., eq. (3.13).

    let mut u: u64 = 1;
    let mut v = p;
    // Keeps `Q^k`.
    let mut qk = q;

    for i in (0..bit_length(d) - 1).rev() {
        // k' = 2k
        u = mod_mul(u, v, modulus);
        v = mod_sub(mod_mul(v, v, modulus), mod_add(qk, qk, modulus), modulus);
        qk = mod_mul(qk, qk, modulus);

        if d >> i & 1 == 1 {
            // k' = 2k + 1
            let u1 = half_mod(mod_add(mod_mul(p, u, modulus), v, modulus), n);
            let v1 = half_mod(
                mod_add(mod_mul(disc, u, modulus), mod_mul(p, v, modulus), modulus),
                n,
            );
            u = u1;
            v = v1;
            qk = mod_mul(qk, q, modulus);
        }
    }

    // Now `u == U_d` and `v == V_d`.

    // Check whether `U_d == 0` or `V_d == 0` (the latter being the `r == 0` case below).
    if u == 0 || v == 0 {
        return Primality::ProbablyPrime;
    }

    // Check whether `V_{d * 2^r} == 0` for some `1 <= r < s`.
    for _ in 1..s {
        v = mod_sub(mod_mul(v, v, modulus), mod_add(qk, qk, modulus), modulus);
        if v == 0 {
            return Primality::ProbablyPrime;
        }
        qk = mod_mul(qk, qk, modulus);
    }

    Primality::Composite
}

/// Returns the number of significant bits in `x`, that is the position
/// of the highest set bit plus one.
const fn bit_length(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// Division by 2 modulo an odd `modulus`.
fn half_mod(x: u64, modulus: u64) -> u64 {
    if x & 1 == 0 {
        x >> 1
    } else {
        // `x + modulus` is even, and can exceed `u64::MAX`.
        ((x as u128 + modulus as u128) >> 1) as u64
    }
}
