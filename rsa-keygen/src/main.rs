//! RSA key generation CLI.
//!
//! Generates an RSA keypair and writes three files:
//! - private key: `d` (line 1), `n` (line 2)
//! - public key: `e` (line 1), `n` (line 2)
//! - primes used: `p` (line 1), `q` (line 2)

use clap::Parser;
use log::info;
use num_bigint::BigUint;
use rsa_keygen::key::generate_key_with_params;
use rsa_keygen::{BATCH, MR_ROUNDS};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rsa-keygen",
    about = "RSA key generation utility",
    long_about = "
Generates an RSA keypair by:
1. Searching for two large probable primes p, q in parallel batches.
2. Computing n = p * q and phi(n) = (p-1)(q-1).
3. Using the fixed public exponent e = 65537.
4. Computing d = e^-1 mod phi(n) via the extended Euclidean algorithm.

Writes three files, one value per line in decimal:
- private key: d, n
- public key: e, n
- primes used: p, q
"
)]
#[command(version)]
struct Args {
    /// Desired modulus bit length. Must be >= 512 and a multiple of 16.
    #[arg(long, value_name = "BITS", default_value_t = 2048)]
    bits: u32,

    /// Output file for the private key (d, n)
    #[arg(long, value_name = "OUTPUT_PRIVATE")]
    private_output: PathBuf,

    /// Output file for the public key (e, n)
    #[arg(long, value_name = "OUTPUT_PUBLIC")]
    public_output: PathBuf,

    /// Output file for the primes used (p, q)
    #[arg(long, value_name = "OUTPUT_PRIMES")]
    primes_output: PathBuf,
}

fn write_key_file(path: &PathBuf, val1: &BigUint, val2: &BigUint) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = format!("{val1}\n{val2}");
    fs::write(path, content).map_err(|e| format!("failed writing {}: {e}", path.display()))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.bits < 512 || args.bits % 16 != 0 {
        return Err("--bits must be at least 512 and a multiple of 16".into());
    }
    let key_bytes = (args.bits / 16) as usize;

    info!("generating a {}-bit RSA key ({key_bytes} bytes per prime)", args.bits);
    let key = generate_key_with_params(key_bytes, BATCH, MR_ROUNDS)?;

    write_key_file(&args.private_output, &key.d, &key.n)?;
    write_key_file(&args.public_output, &key.e, &key.n)?;
    write_key_file(&args.primes_output, &key.p, &key.q)?;

    info!("wrote private key to {}", args.private_output.display());
    info!("wrote public key to {}", args.public_output.display());
    info!("wrote primes to {}", args.primes_output.display());

    Ok(())
}
