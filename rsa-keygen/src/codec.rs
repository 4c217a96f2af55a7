//! Byte-string / big-integer codec.

use crate::error::CoreError;
use num_bigint::BigUint;
use num_traits::Num;

/// Interprets `bytes` as a big-endian unsigned integer. Empty input yields zero.
pub fn numbify(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Parses `decimal` as a non-negative integer and returns its minimal big-endian byte
/// representation.
pub fn denumbify(decimal: &str) -> Result<Vec<u8>, CoreError> {
    let trimmed = decimal.trim();
    let n = BigUint::from_str_radix(trimmed, 10).map_err(|_| CoreError::Parse(decimal.to_string()))?;
    Ok(n.to_bytes_be())
}
