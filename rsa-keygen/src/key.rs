//! RSA key assembly and textbook encrypt/decrypt.

use crate::arith::{modinv, powmod};
use crate::codec::numbify;
use crate::error::{CoreError, KeygenError};
use crate::search::find_prime;
use crate::{BATCH, KEYGEN_MAX_ATTEMPTS, MR_ROUNDS, PUBLIC_EXPONENT};
use log::{info, warn};
use num_bigint::{BigInt, BigUint};
use num_traits::{Num, One};

/// An assembled RSA keypair: two primes, their derived modulus and totient, and the public/private
/// exponents. Constructed atomically by [`generate_key`]; immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKey {
    pub p: BigUint,
    pub q: BigUint,
    pub n: BigUint,
    pub phi: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

/// Generates an RSA keypair using [`crate::KEY_BYTES`]-byte primes, the default batch size, and
/// the default Miller-Rabin round count.
pub fn generate_key() -> Result<RsaKey, KeygenError> {
    generate_key_with_params(crate::KEY_BYTES, BATCH, MR_ROUNDS)
}

/// Generates an RSA keypair with explicit candidate width (bytes per prime), batch size, and
/// Miller-Rabin round count.
pub fn generate_key_with_params(
    key_bytes: usize,
    batch_size: usize,
    rounds: u32,
) -> Result<RsaKey, KeygenError> {
    let e = BigUint::from(PUBLIC_EXPONENT);
    let e_signed = BigInt::from(e.clone());

    for attempt in 1..=KEYGEN_MAX_ATTEMPTS {
        let p = find_prime(key_bytes, batch_size, rounds)?;
        let q = find_prime(key_bytes, batch_size, rounds)?;
        if p == q {
            warn!("generate_key: drew duplicate primes on attempt {attempt}, retrying");
            continue;
        }

        let n = &p * &q;
        let phi = (&p - BigUint::one()) * (&q - BigUint::one());
        let phi_signed = BigInt::from(phi.clone());

        match modinv(&e_signed, &phi_signed) {
            Ok(d_signed) => {
                let d = d_signed
                    .to_biguint()
                    .expect("modinv result in [0, phi) is always non-negative");
                info!("generate_key: assembled key after {attempt} attempt(s)");
                return Ok(RsaKey { p, q, n, phi, e, d });
            }
            Err(CoreError::NotInvertible) => {
                warn!("generate_key: e={PUBLIC_EXPONENT} not invertible mod phi on attempt {attempt}, retrying");
                continue;
            }
            Err(other) => return Err(other.into()),
        }
    }

    Err(KeygenError::AttemptsExhausted(KEYGEN_MAX_ATTEMPTS))
}

/// `m^e mod n`. Undefined (but not unsafe) if `m >= key.n`.
pub fn encrypt(m: &BigUint, key: &RsaKey) -> BigUint {
    debug_assert!(*m < key.n, "encrypt: plaintext representative must be < n");
    powmod(m, &key.e, &key.n)
}

/// `c^d mod n`.
pub fn decrypt(c: &BigUint, key: &RsaKey) -> BigUint {
    powmod(c, &key.d, &key.n)
}

/// Encrypts a byte string, returning the ciphertext as a decimal string.
pub fn encrypt_bytes(plaintext: &[u8], key: &RsaKey) -> String {
    let m = numbify(plaintext);
    encrypt(&m, key).to_string()
}

/// Decrypts a decimal ciphertext string, returning the recovered plaintext bytes.
pub fn decrypt_bytes(ciphertext_decimal: &str, key: &RsaKey) -> Result<Vec<u8>, CoreError> {
    let trimmed = ciphertext_decimal.trim();
    let c = BigUint::from_str_radix(trimmed, 10)
        .map_err(|_| CoreError::Parse(ciphertext_decimal.to_string()))?;
    Ok(decrypt(&c, key).to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_key() -> RsaKey {
        // small enough to assemble instantly in tests; not cryptographically meaningful.
        loop {
            if let Ok(key) = generate_key_with_params(2, 200, 40) {
                return key;
            }
        }
    }

    #[test]
    fn round_trip_encrypt_decrypt() {
        let key = tiny_key();
        let m = numbify(b"HI");
        if m >= key.n {
            // candidate width too small for this message on this particular key; skip rather
            // than assert a precondition violation.
            return;
        }
        let c = encrypt(&m, &key);
        let recovered = decrypt(&c, &key);
        assert_eq!(recovered, m);
    }

    #[test]
    fn round_trip_bytes_surface() {
        let key = generate_key_with_params(16, 200, 40).expect("keygen should succeed");
        let plaintext = b"HELLO WORLD";
        let m = numbify(plaintext);
        assert!(m < key.n, "test message must fit the generated modulus");

        let ciphertext = encrypt_bytes(plaintext, &key);
        let recovered = decrypt_bytes(&ciphertext, &key).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn e_and_d_are_inverses_mod_phi() {
        let key = generate_key_with_params(16, 200, 40).expect("keygen should succeed");
        let product = (&key.e * &key.d) % &key.phi;
        assert_eq!(product, BigUint::one());
    }

    #[test]
    fn decrypt_bytes_rejects_non_decimal_ciphertext() {
        let key = generate_key_with_params(16, 200, 40).expect("keygen should succeed");
        assert!(decrypt_bytes("not-a-number", &key).is_err());
    }
}
