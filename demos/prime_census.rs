//! Counts the primes of each bit length and prints a small census,
//! with the largest prime of each width rendered in bases 10 and 64.

use prime64::{Base, PrimeRange, encode, is_baillie_psw_prime};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn main() {
    println!("bits   count   largest (base 10)   largest (base 64)");
    for bits in 2..=16 {
        let rng = ChaCha8Rng::from_seed(*b"01234567890123456789012345678901");
        let primes: Vec<u64> = PrimeRange::new(bits, rng)
            .expect("the bit length is in range")
            .collect();
        let largest = *primes.last().expect("every width of at least 2 bits has a prime");
        assert!(is_baillie_psw_prime(largest));
        println!(
            "{bits:>4}   {count:>5}   {decimal:>17}   {radix64:>17}",
            count = primes.len(),
            decimal = encode(largest, Base::Decimal),
            radix64 = encode(largest, Base::Radix64),
        );
    }
}
