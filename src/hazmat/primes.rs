//! Known primes and composites for testing purposes.

/// Primes spanning the `u64` range, including the largest 64-bit prime `2^64 - 59`
/// and the Mersenne primes `2^31 - 1` and `2^61 - 1`.
pub(crate) const PRIMES_64: &[u64] = &[
    1000000007,
    2147483647,
    4294967291,
    2305843009213693951,
    9223372036854775783,
    18446744073709551557,
];

/// Odd composites at the top of the `u64` range:
/// `(2^32 - 5) * (2^32 - 17)`, then `2^64 - 1 == 3 * 5 * 17 * 257 * 641 * 65537 * 6700417`,
/// and the prime square `(2^31 - 1)^2`.
pub(crate) const COMPOSITES_64: &[u64] = &[
    18446743979220271189,
    18446744073709551615,
    4611686014132420609,
];
