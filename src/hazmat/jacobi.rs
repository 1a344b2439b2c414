//! Jacobi symbol calculation.

use crate::hazmat::Odd;

/// The Jacobi symbol, a generalization of the Legendre symbol
/// to arbitrary odd denominators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JacobiSymbol {
    /// The symbol is 0: the arguments share a factor.
    Zero,
    /// The symbol is 1.
    One,
    /// The symbol is -1: the numerator is a quadratic non-residue
    /// modulo the denominator.
    MinusOne,
}

impl core::ops::Neg for JacobiSymbol {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::MinusOne,
            Self::MinusOne => Self::One,
        }
    }
}

/// Transforms `(a/p)` -> `(r/p)` where `a = r * 2^s` with `r` odd:
/// the symbol is negated if `s` is odd and `p = ±3 mod 8`.
fn reduce_numerator(j: JacobiSymbol, s: u32, p: u64) -> JacobiSymbol {
    let p_mod_8 = p & 7;
    if s & 1 == 1 && (p_mod_8 == 3 || p_mod_8 == 5) {
        -j
    } else {
        j
    }
}

/// Transforms `(a/p)` -> `(p/a)` for odd and coprime `a` and `p`:
/// by quadratic reciprocity, the symbol is negated if both are `3 mod 4`.
fn swap(j: JacobiSymbol, a: u64, p: u64) -> JacobiSymbol {
    if a & 3 == 1 || p & 3 == 1 { j } else { -j }
}

/// Returns the Jacobi symbol `(a/p)` given an odd `p`.
pub(crate) fn jacobi_symbol_vartime(a: i64, p: Odd) -> JacobiSymbol {
    let mut result = JacobiSymbol::One; // Keep track of all the sign flips here.

    // Deal with a negative `a` first:
    // (-a/p) = (-1/p) * (a/p)
    //        = (-1)^((p-1)/2) * (a/p)
    //        = (-1 if p = 3 mod 4 else 1) * (a/p)
    if a < 0 && p.get() & 3 == 3 {
        result = -result;
    }

    let mut a = a.unsigned_abs() % p.get();
    let mut p = p.get();

    loop {
        if a == 0 {
            // A shared factor unless the denominator has shrunk to one,
            // which also covers `(a/1) = 1`.
            return if p == 1 { result } else { JacobiSymbol::Zero };
        }

        // `p` is odd here: either by the `Odd` invariant, or because a
        // previously reduced `a` was swapped into its place.
        let s = a.trailing_zeros();
        a >>= s;
        result = reduce_numerator(result, s, p);

        if a == 1 {
            return result;
        }

        // Both `a` and `p` are odd at this point. Technically the swap only
        // returns a valid symbol for coprime `a` and `p`, but a shared factor
        // means we return `Zero` eventually, which no sign change affects.
        result = swap(result, a, p);
        (a, p) = (p % a, a);
    }
}

/// Computes the Jacobi symbol `(a/b)`.
///
/// The symbol is only defined for odd positive `b`; every other `b` yields
/// [`JacobiSymbol::Zero`], the conventional indeterminate value, rather than
/// an error.
pub fn jacobi_symbol(a: i64, b: i64) -> JacobiSymbol {
    if b <= 0 || b & 1 == 0 {
        return JacobiSymbol::Zero;
    }
    let p = Odd::new(b as u64).expect("`b` is odd by the check above");
    jacobi_symbol_vartime(a, p)
}
