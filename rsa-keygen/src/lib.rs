//! # rsa-keygen
//!
//! A self-contained, from-scratch RSA keypair generator: arbitrary-precision modular arithmetic,
//! a Miller-Rabin primality tester, a parallel batched prime search, and textbook (unpadded) RSA
//! encryption/decryption.
//!
//! This is a teaching implementation. There is no padding (OAEP/PKCS#1 v1.5), no key
//! serialization format, no constant-time guarantee, and no side-channel hardening — see the
//! module docs below for what each layer actually promises.
//!
//! ## Layers
//!
//! - [`entropy`] — OS random bytes.
//! - [`codec`] — byte string <-> big integer conversions.
//! - [`arith`] — `powmod`, `modinv`.
//! - [`primality`] — Miller-Rabin with trial-division prefiltering.
//! - [`search`] — the parallel batched prime search, [`search::find_prime`].
//! - [`key`] — [`key::generate_key`] and textbook encrypt/decrypt.
//!
//! ## Example
//!
//! ```no_run
//! use rsa_keygen::key::{generate_key, encrypt_bytes, decrypt_bytes};
//!
//! let key = generate_key().expect("key generation should succeed");
//! let ciphertext = encrypt_bytes(b"HELLO WORLD", &key);
//! let plaintext = decrypt_bytes(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, b"HELLO WORLD");
//! ```

pub mod arith;
pub mod codec;
pub mod entropy;
pub mod error;
pub mod key;
pub mod primality;
pub mod search;

pub use error::{CoreError, KeygenError};
pub use key::{decrypt, decrypt_bytes, encrypt, encrypt_bytes, generate_key, RsaKey};

/// Bytes per prime candidate. 128 bytes (1024 bits) per prime yields a 2048-bit modulus.
pub const KEY_BYTES: usize = 128;

/// Candidates tried per batch in [`search::find_prime`].
pub const BATCH: usize = 100;

/// Miller-Rabin witness rounds, giving a false-positive probability of at most 4^-40.
pub const MR_ROUNDS: u32 = 40;

/// Fixed RSA public exponent.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Upper bound on (p, q, e) assembly retries inside [`key::generate_key`] before giving up. A
/// retry is only ever needed on a duplicate-prime draw or the astronomically unlikely case of
/// `65537` dividing `phi`; this bound guards against a broken entropy source looping forever.
pub const KEYGEN_MAX_ATTEMPTS: u32 = 64;
