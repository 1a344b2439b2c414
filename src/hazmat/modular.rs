//! Modular arithmetic on 64-bit operands.
//!
//! Every product and sum is formed in 128 bits before reduction, so all
//! operations are exact for any modulus up to [`u64::MAX`].

use core::num::NonZero;

/// Multiplies two values modulo `modulus`.
pub fn mod_mul(a: u64, b: u64, modulus: NonZero<u64>) -> u64 {
    (a as u128 * b as u128 % modulus.get() as u128) as u64
}

/// Raises `base` to `exponent` modulo `modulus` by binary exponentiation:
/// the base is squared once per exponent bit, and multiplied into the
/// accumulator wherever the bit is set.
///
/// The accumulator starts at `1 mod modulus`, so a zero exponent gives 1 for
/// any modulus of 2 or more (including `0^0`), and a modulus of 1 gives 0
/// for every input.
pub fn mod_pow(base: u64, exponent: u64, modulus: NonZero<u64>) -> u64 {
    let mut result = 1 % modulus.get();
    let mut base = base % modulus.get();
    let mut exponent = exponent;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = mod_mul(result, base, modulus);
        }
        base = mod_mul(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Adds two already reduced values modulo `modulus`.
pub(crate) fn mod_add(a: u64, b: u64, modulus: NonZero<u64>) -> u64 {
    ((a as u128 + b as u128) % modulus.get() as u128) as u64
}

/// Subtracts `b` from `a` modulo `modulus`, both already reduced.
pub(crate) fn mod_sub(a: u64, b: u64, modulus: NonZero<u64>) -> u64 {
    ((a as u128 + modulus.get() as u128 - b as u128) % modulus.get() as u128) as u64
}

/// Reduces a signed value into `[0, modulus)`.
pub(crate) fn reduce_signed(x: i64, modulus: NonZero<u64>) -> u64 {
    let reduced = x.unsigned_abs() % modulus.get();
    if x < 0 && reduced != 0 {
        modulus.get() - reduced
    } else {
        reduced
    }
}
