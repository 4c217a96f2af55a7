//! Modular arithmetic kernel: `powmod` and `modinv`.

use crate::error::CoreError;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Computes `base^exp mod modulus` by right-to-left square-and-multiply.
///
/// `modulus` must be non-zero. A `modulus` of 1 always yields 0, per the textbook contract.
pub fn powmod(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "powmod: modulus must be non-zero");
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();
    while !exp.is_zero() {
        if exp.bit(0) {
            result = (&result * &base) % modulus;
        }
        exp >>= 1u32;
        base = (&base * &base) % modulus;
    }
    result
}

/// Computes the unique `x` in `[0, m)` with `a * x ≡ 1 (mod m)` via the iterative extended
/// Euclidean algorithm over signed integers.
pub fn modinv(a: &BigInt, m: &BigInt) -> Result<BigInt, CoreError> {
    let m_original = m.clone();
    if m_original.is_one() {
        return Ok(BigInt::zero());
    }

    let mut a = a.clone();
    let mut m = m.clone();
    let mut inv = BigInt::one();
    let mut x0 = BigInt::zero();

    while a > BigInt::one() {
        if m.is_zero() {
            // a has settled on gcd(a, m_original) > 1: no inverse exists.
            break;
        }
        let q = &a / &m;
        let r = &a - &q * &m;
        let updated = &inv - &q * &x0;
        inv = x0;
        x0 = updated;
        a = m;
        m = r;
    }

    if a != BigInt::one() {
        return Err(CoreError::NotInvertible);
    }

    if inv < BigInt::zero() {
        inv += &m_original;
    }
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powmod_known_value() {
        let base = BigUint::from(1555123u32);
        let exp = BigUint::from(1441u32);
        let modulus = BigUint::from(15u32);
        assert_eq!(powmod(&base, &exp, &modulus), BigUint::from(13u32));
    }

    #[test]
    fn powmod_modulus_one_is_zero() {
        let modulus = BigUint::one();
        assert!(powmod(&BigUint::from(7u32), &BigUint::from(9u32), &modulus).is_zero());
    }

    #[test]
    fn powmod_zero_exponent_is_one() {
        let modulus = BigUint::from(97u32);
        assert_eq!(
            powmod(&BigUint::from(42u32), &BigUint::zero(), &modulus),
            BigUint::one()
        );
    }

    #[test]
    #[should_panic]
    fn powmod_zero_modulus_panics() {
        powmod(&BigUint::from(2u32), &BigUint::from(3u32), &BigUint::zero());
    }

    #[test]
    fn modinv_known_value() {
        let a = BigInt::from(38);
        let m = BigInt::from(97);
        assert_eq!(modinv(&a, &m).unwrap(), BigInt::from(23));
    }

    #[test]
    fn modinv_agrees_with_definition() {
        let a = BigInt::from(3);
        let m = BigInt::from(11);
        let inv = modinv(&a, &m).unwrap();
        assert_eq!((&a * &inv) % &m, BigInt::one());
    }

    #[test]
    fn modinv_non_coprime_is_not_invertible() {
        let a = BigInt::from(4);
        let m = BigInt::from(8);
        assert!(matches!(modinv(&a, &m), Err(CoreError::NotInvertible)));
    }

    #[test]
    fn modinv_modulus_one() {
        assert_eq!(modinv(&BigInt::from(5), &BigInt::one()).unwrap(), BigInt::zero());
    }
}
