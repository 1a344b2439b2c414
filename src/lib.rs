#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications,
    clippy::unwrap_used
)]

extern crate alloc;

mod encode;
mod error;
mod generate;
pub mod hazmat;
mod presets;

pub use encode::{Base, encode};
pub use error::Error;
pub use generate::PrimeRange;
pub use presets::{
    BailliePswVerdict, Rejection, baillie_psw, is_baillie_psw_prime, is_probable_prime,
};
