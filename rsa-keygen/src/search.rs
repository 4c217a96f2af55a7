//! Parallel batched prime search.
//!
//! Each call to [`find_prime`] opens its own entropy source, draws a batch of shaped candidates,
//! fans them out one-thread-per-candidate, and returns the lowest-indexed probable prime found.
//! If no candidate in a batch is accepted the batch is discarded and a new one is drawn.

use crate::codec::numbify;
use crate::entropy::EntropySource;
use crate::error::CoreError;
use crate::primality::is_probable_prime;
use log::{debug, info};
use num_bigint::BigUint;

/// Forces the two highest bits and the lowest bit of a big-endian random block, guaranteeing an
/// odd candidate of the full requested bit width.
fn shape_candidate(block: &mut [u8]) {
    if let Some(first) = block.first_mut() {
        *first |= 0b1100_0000;
    }
    if let Some(last) = block.last_mut() {
        *last |= 0b0000_0001;
    }
}

/// Draws candidates and tests them in batches of `batch_size` until one passes
/// `is_probable_prime` with `rounds` witnesses.
pub fn find_prime(key_bytes: usize, batch_size: usize, rounds: u32) -> Result<BigUint, CoreError> {
    let mut entropy = EntropySource::open()?;

    loop {
        let mut candidates = Vec::with_capacity(batch_size);
        for _ in 0..batch_size {
            let mut block = entropy.read_random(key_bytes)?;
            shape_candidate(&mut block);
            candidates.push(numbify(&block));
        }
        debug!(
            "dispatching batch of {} candidates ({} bytes each)",
            candidates.len(),
            key_bytes
        );

        let handles: Vec<_> = candidates
            .into_iter()
            .map(|candidate| {
                std::thread::spawn(move || {
                    let accepted = is_probable_prime(&candidate, rounds);
                    (candidate, accepted)
                })
            })
            .collect();

        for handle in handles {
            let (candidate, accepted) = handle.join().expect("primality worker panicked");
            if accepted {
                info!("found probable prime ({} bits)", candidate.bits());
                return Ok(candidate);
            }
        }
        debug!("batch exhausted with no probable prime, drawing another batch");
    }
}
