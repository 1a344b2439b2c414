//! This module contains various types of pseudoprimes
//! (composites that are classified as primes by various tests) for testing purposes.

/// The limit up to which we have exceptions to implemented tests listed (see below),
/// so we can run an exhaustive test on every number knowing when it is expected to fail.
#[cfg(feature = "tests-exhaustive")]
pub(crate) const EXHAUSTIVE_TEST_LIMIT: u64 = 500000;

/// Strong Lucas pseudoprimes (OEIS:A217255) under `EXHAUSTIVE_TEST_LIMIT`.
/// Should pass the strong Lucas test with Selfridge parameters (Baillie method A).
pub(crate) const STRONG_LUCAS: &[u64] = &[
    5459, 5777, 10877, 16109, 18971, 22499, 24569, 25199, 40309, 58519, 75077, 97439, 100127,
    113573, 115639, 130139, 155819, 158399, 161027, 162133, 176399, 176471, 189419, 192509, 197801,
    224369, 230691, 231703, 243629, 253259, 268349, 288919, 313499, 324899, 353219, 366799, 391169,
    430127, 436409, 455519, 487199,
];

/// Lucas pseudoprimes (OEIS:A217120) under `EXHAUSTIVE_TEST_LIMIT`.
/// Should pass the regular Lucas test with Selfridge parameters (Baillie method A).
/// Taken from D. Jacobsen, "Pseudoprime Statistics, Tables, and Data",
/// <http://ntheory.org/pseudoprimes.html>
pub(crate) const LUCAS: &[u64] = &[
    323, 377, 1159, 1829, 3827, 5459, 5777, 9071, 9179, 10877, 11419, 11663, 13919, 14839, 16109,
    16211, 18407, 18971, 19043, 22499, 23407, 24569, 25199, 25877, 26069, 27323, 32759, 34943,
    35207, 39059, 39203, 39689, 40309, 44099, 46979, 47879, 50183, 51983, 53663, 56279, 58519,
    60377, 63881, 69509, 72389, 73919, 75077, 77219, 79547, 79799, 82983, 84419, 86063, 90287,
    94667, 97019, 97439, 100127, 101919, 103739, 104663, 113573, 113849, 115439, 115639, 120581,
    121103, 121393, 130139, 142883, 150079, 155819, 157079, 158399, 158717, 161027, 162133, 162719,
    164699, 167969, 176399, 176471, 178949, 182513, 184781, 189419, 192509, 195227, 197801, 200147,
    201871, 203699, 216659, 218129, 223901, 224369, 226529, 230159, 230691, 231703, 238999, 242079,
    243629, 250277, 253259, 256409, 265481, 268349, 271991, 275099, 277399, 283373, 284171, 288919,
    294527, 306287, 308699, 309959, 313499, 317249, 324899, 324911, 327359, 345913, 353219, 364229,
    366799, 368351, 380393, 381923, 383921, 385307, 391169, 391859, 396899, 427349, 429263, 430127,
    436409, 436589, 441599, 454607, 455519, 475799, 480689, 487199,
];

/// Strong pseudoprimes to base 2 (OEIS:A001262) under `EXHAUSTIVE_TEST_LIMIT`.
pub(crate) const STRONG_BASE_2: &[u64] = &[
    2047, 3277, 4033, 4681, 8321, 15841, 29341, 42799, 49141, 52633, 65281, 74665, 80581, 85489,
    88357, 90751, 104653, 130561, 196093, 220729, 233017, 252601, 253241, 256999, 271951, 280601,
    314821, 357761, 390937, 458989, 476971, 486737, 489997,
];

/// A strong Fibonacci pseudoprime, Type I[^Pinch].
///
/// [^Pinch]: R. G. E. Pinch "The Carmichael Numbers up to 10^15",
///   Mathematics of Computation 61, 381-391 (1993),
///   DOI: [10.2307/2152963](https://doi.org/10.2307/2152963).
pub(crate) const STRONG_FIBONACCI: u64 = 443372888629441;

/// Odd Fibonacci pseudoprimes (OEIS:A081264).
pub(crate) const FIBONACCI: &[u64] = &[
    323, 377, 1891, 3827, 4181, 5777, 6601, 6721, 8149, 10877, 11663, 13201, 13981, 15251, 17119,
    17711, 18407, 19043, 23407, 25877, 27323, 30889, 34561, 34943, 35207, 39203, 40501, 50183,
    51841, 51983, 52701, 53663, 60377, 64079, 64681,
];

/// Bruckman-Lucas pseudoprimes (OEIS:A005845).
pub(crate) const BRUCKMAN_LUCAS: &[u64] = &[
    705, 2465, 2737, 3745, 4181, 5777, 6721, 10877, 13201, 15251, 24465, 29281, 34561, 35785,
    51841, 54705, 64079, 64681, 67861, 68251, 75077, 80189, 90061, 96049, 97921, 100065, 100127,
    105281, 113573, 118441, 146611, 161027,
];
