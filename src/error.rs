use core::fmt;

/// Errors returned by the crate's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested bit length of prime candidates falls outside the supported `1..=63` range.
    BitLengthOutOfRange {
        /// The requested bit length.
        bit_length: u32,
    },
    /// The requested encoding base is not one of 2, 10, or 64.
    UnsupportedBase {
        /// The requested base.
        base: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::BitLengthOutOfRange { bit_length } => write!(
                f,
                concat![
                    "The requested bit length ({}) falls outside the supported range; ",
                    "only primes of 1 to 63 bits fit the 64-bit scan."
                ],
                bit_length
            ),
            Error::UnsupportedBase { base } => write!(
                f,
                "The requested encoding base ({}) is not supported; the supported bases are 2, 10, and 64.",
                base
            ),
        }
    }
}
