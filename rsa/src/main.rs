//! Textbook RSA encryption/decryption CLI, built on the `rsa-keygen` core.
//!
//! SECURITY NOTE: this is an educational implementation of textbook (unpadded) RSA. Do not use it
//! for real cryptography.

use clap::{Parser, ValueEnum};
use log::info;
use num_bigint::BigUint;
use num_traits::Num;
use rsa_keygen::arith::powmod;
use rsa_keygen::codec::numbify;
use std::fs;
use std::path::{Path, PathBuf};

/// Textbook RSA encryption/decryption.
#[derive(Parser)]
#[command(
    name = "rsa",
    about = "Simple RSA encryption/decryption utility using textbook (unpadded) RSA",
    long_about = "
Encrypts or decrypts a file against a two-line key file (exponent, modulus),
using square-and-multiply modular exponentiation.

INPUT FORMAT:
- encrypt: INPUT_FILE holds raw plaintext bytes.
- decrypt: INPUT_FILE holds a single decimal ciphertext integer.
- KEY_FILE: two lines in decimal — exponent (e for encrypt, d for decrypt), then modulus n.
"
)]
#[command(version, author)]
struct Args {
    /// Operation: encrypt or decrypt
    #[arg(long, value_enum)]
    operation: Operation,

    /// Path to the input file
    #[arg(long, value_name = "INPUT_FILE")]
    file: PathBuf,

    /// Path to the key file (two lines: exponent, modulus)
    #[arg(long, value_name = "KEY_FILE")]
    key: PathBuf,

    /// Output file
    #[arg(long, value_name = "OUTPUT")]
    output: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// ciphertext = plaintext^e mod n
    Encrypt,
    /// plaintext = ciphertext^d mod n
    Decrypt,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "encrypt"),
            Operation::Decrypt => write!(f, "decrypt"),
        }
    }
}

fn read_key(path: &Path) -> Result<(BigUint, BigUint), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();
    let exponent = lines.next().ok_or("key file is missing the exponent line")?;
    let modulus = lines.next().ok_or("key file is missing the modulus line")?;
    let exponent = BigUint::from_str_radix(exponent.trim(), 10)?;
    let modulus = BigUint::from_str_radix(modulus.trim(), 10)?;
    Ok((exponent, modulus))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let (exponent, modulus) = read_key(&args.key)?;

    info!("running {} with key file {}", args.operation, args.key.display());

    match args.operation {
        Operation::Encrypt => {
            let plaintext = fs::read(&args.file)?;
            let m = numbify(&plaintext);
            if m >= modulus {
                return Err("plaintext does not fit the modulus; use a larger key".into());
            }
            let c = powmod(&m, &exponent, &modulus);
            fs::write(&args.output, c.to_string())?;
            info!("encrypted {} bytes from {}", plaintext.len(), args.file.display());
        }
        Operation::Decrypt => {
            let ciphertext = fs::read_to_string(&args.file)?;
            let c = BigUint::from_str_radix(ciphertext.trim(), 10)
                .map_err(|_| "input file does not contain a decimal integer")?;
            let m = powmod(&c, &exponent, &modulus);
            fs::write(&args.output, m.to_bytes_be())?;
            info!("decrypted ciphertext from {}", args.file.display());
        }
    }

    Ok(())
}
