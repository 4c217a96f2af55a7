//! Miller-Rabin primality testing with a trial-division prefilter.

use crate::arith::powmod;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;

const TRIAL_DIVISION_LIMIT: u64 = 5000;

/// Primes below [`TRIAL_DIVISION_LIMIT`], built once via a sieve of Eratosthenes.
static SMALL_PRIMES: Lazy<Vec<u64>> = Lazy::new(|| sieve(TRIAL_DIVISION_LIMIT));

fn sieve(limit: u64) -> Vec<u64> {
    let limit = limit as usize;
    let mut is_composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for candidate in 2..=limit {
        if is_composite[candidate] {
            continue;
        }
        primes.push(candidate as u64);
        let mut multiple = candidate * candidate;
        while multiple <= limit {
            is_composite[multiple] = true;
            multiple += candidate;
        }
    }
    primes
}

/// Probabilistic primality test: trial division against [`SMALL_PRIMES`], then `rounds` rounds
/// of Miller-Rabin with witnesses drawn from the OS entropy source.
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    if *n == BigUint::from(2u32) || *n == BigUint::from(3u32) || *n == BigUint::from(5u32) {
        return true;
    }
    if n.is_zero() || *n == BigUint::one() || *n == BigUint::from(4u32) {
        return false;
    }
    if !n.bit(0) {
        return false; // even, and already known to be > 5
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if n % &p == BigUint::zero() {
            return false;
        }
    }

    let n_minus_1 = n - BigUint::one();
    let mut s = n_minus_1.clone();
    let mut r: u32 = 0;
    while !s.bit(0) {
        s >>= 1u32;
        r += 1;
    }

    let lower = BigUint::from(2u32);
    let two = BigUint::from(2u32);
    let mut rng = OsRng;

    for _ in 0..rounds {
        // uniform in [2, n-2]: gen_biguint_range's upper bound is exclusive, and n-1 is exactly
        // n-2 + 1.
        let a = rng.gen_biguint_range(&lower, &n_minus_1);
        let mut x = powmod(&a, &s, n);
        if x == BigUint::one() || x == n_minus_1 {
            continue;
        }

        let mut confirmed_composite = true;
        for _ in 0..r.saturating_sub(1) {
            x = powmod(&x, &two, n);
            if x == BigUint::one() {
                return false;
            }
            if x == n_minus_1 {
                confirmed_composite = false;
                break;
            }
        }
        if confirmed_composite {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn trivial_cases() {
        assert!(!is_probable_prime(&n(0), 40));
        assert!(!is_probable_prime(&n(1), 40));
        assert!(is_probable_prime(&n(2), 40));
        assert!(is_probable_prime(&n(3), 40));
        assert!(!is_probable_prime(&n(4), 40));
        assert!(is_probable_prime(&n(5), 40));
    }

    #[test]
    fn small_primes_accepted() {
        for p in [7u64, 11, 13, 17, 19, 23, 97, 4999] {
            assert!(is_probable_prime(&n(p), 40), "{p} should be prime");
        }
    }

    #[test]
    fn small_composites_rejected() {
        for c in [6u64, 8, 9, 10, 12, 15, 21, 100, 4998] {
            assert!(!is_probable_prime(&n(c), 40), "{c} should be composite");
        }
    }

    #[test]
    fn carmichael_numbers_rejected() {
        assert!(!is_probable_prime(&n(561), 40));
        assert!(!is_probable_prime(&n(41041), 40));
    }

    #[test]
    fn known_example() {
        assert!(is_probable_prime(&n(23), 40));
        assert!(!is_probable_prime(&n(420), 40));
    }

    #[test]
    fn large_known_prime() {
        let big = "190924658555315858151119591629547667189398663156457464802722656138791473781208916582860638604319810040699438425180594060124689945423307189481337028373";
        let p = big.parse::<BigUint>().unwrap();
        assert!(is_probable_prime(&p, 40));
    }

    #[test]
    fn exhaustive_sieve_cross_check() {
        // every prime and composite below 5000 must agree with the trial-division sieve itself
        let primes: std::collections::HashSet<u64> = SMALL_PRIMES.iter().copied().collect();
        for c in 6u64..5000 {
            let expect_prime = primes.contains(&c);
            assert_eq!(is_probable_prime(&n(c), 40), expect_prime, "mismatch at {c}");
        }
    }
}
