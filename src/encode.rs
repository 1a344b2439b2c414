//! Positional renderings of 64-bit values.

use alloc::format;
use alloc::string::String;

use crate::error::Error;

/// The digits of the base 64 rendering, in digit value order.
///
/// This is a positional number system and not a content encoding,
/// so the digit of value zero is `'0'` and [`encode`] never pads.
const RADIX64_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// A supported rendering base.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Base {
    /// Base 2, rendered at the fixed width of 64 digits, most significant bit first.
    Binary,
    /// Base 10, with no leading zeros.
    Decimal,
    /// Base 64 over the alphabet `0-9 A-Z a-z + /`, most significant digit first,
    /// with no leading zeros.
    Radix64,
}

impl Base {
    /// Returns the radix of this base.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Radix64 => 64,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            2 => Ok(Self::Binary),
            10 => Ok(Self::Decimal),
            64 => Ok(Self::Radix64),
            _ => Err(Error::UnsupportedBase { base }),
        }
    }
}

/// Renders `value` in the given base.
///
/// The binary rendering is zero-padded to the full 64 digits,
/// so that the position of each bit is fixed.
/// The other bases start at the most significant nonzero digit,
/// and render zero itself as `"0"`.
pub fn encode(value: u64, base: Base) -> String {
    match base {
        Base::Binary => format!("{value:064b}"),
        Base::Decimal => format!("{value}"),
        Base::Radix64 => encode_radix64(value),
    }
}

fn encode_radix64(value: u64) -> String {
    // 64^11 = 2^66 > 2^64, so 11 digits always suffice.
    let mut digits = [0u8; 11];
    let mut position = digits.len();
    let mut remaining = value;
    loop {
        position -= 1;
        digits[position] = RADIX64_ALPHABET[(remaining % 64) as usize];
        remaining /= 64;
        if remaining == 0 {
            break;
        }
    }
    digits[position..].iter().map(|digit| *digit as char).collect()
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use proptest::prelude::*;

    use super::{Base, RADIX64_ALPHABET, encode};
    use crate::error::Error;

    #[test]
    fn base_derived_traits() {
        assert_eq!(format!("{:?}", Base::Radix64), "Radix64");
        assert_eq!(Base::Radix64, Base::Radix64);
        assert!(Base::Binary != Base::Decimal);
        assert_eq!(Base::Decimal.clone(), Base::Decimal);
    }

    #[test]
    fn radices() {
        assert_eq!(Base::Binary.radix(), 2);
        assert_eq!(Base::Decimal.radix(), 10);
        assert_eq!(Base::Radix64.radix(), 64);
    }

    #[test]
    fn base_from_radix() {
        assert_eq!(Base::try_from(2), Ok(Base::Binary));
        assert_eq!(Base::try_from(10), Ok(Base::Decimal));
        assert_eq!(Base::try_from(64), Ok(Base::Radix64));
        for base in [0, 1, 8, 16, 32, 63, 65] {
            assert_eq!(Base::try_from(base), Err(Error::UnsupportedBase { base }));
        }
    }

    #[test]
    fn binary_is_fixed_width() {
        let mut expected = String::new();
        for _ in 0..56 {
            expected.push('0');
        }
        for _ in 0..8 {
            expected.push('1');
        }
        assert_eq!(encode(255, Base::Binary), expected);

        assert_eq!(encode(0, Base::Binary), "0".repeat(64));
        assert_eq!(encode(u64::MAX, Base::Binary), "1".repeat(64));
        assert_eq!(encode(1 << 63, Base::Binary), format!("1{}", "0".repeat(63)));
    }

    #[test]
    fn decimal_matches_display() {
        assert_eq!(encode(0, Base::Decimal), "0");
        assert_eq!(encode(65, Base::Decimal), "65");
        assert_eq!(encode(u64::MAX, Base::Decimal), "18446744073709551615");
    }

    #[test]
    fn radix64_digits() {
        assert_eq!(encode(0, Base::Radix64), "0");
        assert_eq!(encode(9, Base::Radix64), "9");
        assert_eq!(encode(10, Base::Radix64), "A");
        assert_eq!(encode(35, Base::Radix64), "Z");
        assert_eq!(encode(36, Base::Radix64), "a");
        assert_eq!(encode(61, Base::Radix64), "z");
        assert_eq!(encode(62, Base::Radix64), "+");
        assert_eq!(encode(63, Base::Radix64), "/");
        assert_eq!(encode(64, Base::Radix64), "10");
        assert_eq!(encode(64 * 64, Base::Radix64), "100");
        // 2^64 - 1 = 16 * 64^10 - 1, so the top digit is 15 and the rest are 63.
        assert_eq!(encode(u64::MAX, Base::Radix64), format!("F{}", "/".repeat(10)));
    }

    /// Folds a base 64 rendering back into the value, for round-trip checks.
    fn decode_radix64(text: &str) -> u64 {
        text.bytes().fold(0, |acc, byte| {
            let digit = RADIX64_ALPHABET
                .iter()
                .position(|candidate| *candidate == byte)
                .unwrap();
            acc * 64 + digit as u64
        })
    }

    proptest! {
        #[test]
        fn fuzzy_binary_round_trip(value in any::<u64>()) {
            let text = encode(value, Base::Binary);
            assert_eq!(text.len(), 64);
            assert_eq!(u64::from_str_radix(&text, 2).unwrap(), value);
        }

        #[test]
        fn fuzzy_radix64_round_trip(value in any::<u64>()) {
            assert_eq!(decode_radix64(&encode(value, Base::Radix64)), value);
        }
    }
}
