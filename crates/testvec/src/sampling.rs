// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Seed expansion into bounded digit sequences.
//!
//! Digits are drawn as `u32_le(SHAKE256(seed)[4i..4i+4]) mod m_i`. The reduction is not
//! uniform when `m_i` does not divide `2^32`; the vectors are fixtures, so the bias is
//! accepted.

use crate::errors::{TestVecError, TestVecResult};
use pqcr_vectenc::{Digit, Modulus};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Size of the counter seed used for each test vector.
pub const COUNTER_SEED_LEN: usize = 4;

/// Expand `seed` into `len` bytes of SHAKE256 output. No domain separation is applied.
pub fn expand(seed: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(seed);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

/// Draw one digit per modulus from the stream of `seed`.
pub fn sample(seed: &[u8], moduli: &[Modulus]) -> TestVecResult<Vec<Digit>> {
    if let Some(position) = moduli.iter().position(|&m| m == 0) {
        return Err(TestVecError::ZeroModulus { position });
    }

    let stream = expand(seed, 4 * moduli.len());
    Ok(stream
        .chunks_exact(4)
        .zip(moduli)
        .map(|(word, &m)| u32::from_le_bytes([word[0], word[1], word[2], word[3]]) % m)
        .collect())
}

/// Seed for the test vector with index `counter`.
pub fn counter_seed(counter: u32) -> [u8; COUNTER_SEED_LEN] {
    counter.to_le_bytes()
}
