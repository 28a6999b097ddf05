// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Mixed-radix vector encoding.
//!
//! Packs a sequence of digits `R = [r_0, ..., r_{n-1}]`, each bounded by its own radix
//! `M = [m_0, ..., m_{n-1}]` with `0 ≤ r_i < m_i`, into a fixed-length byte string whose
//! length depends on `M` only.
//!
//! ## Layout
//!
//! The encoding is the one used for Streamlined NTRU Prime public keys and ciphertexts:
//! adjacent digits are merged pairwise into a single digit of radix `m_i · m_{i+1}`, and
//! low-order bytes are emitted while the merged radix is at least `16384`. The merged
//! sequence is half as long and the process repeats until one digit remains, which is
//! written out byte by byte.
//!
//! Only encoding is provided.

pub mod encoder;
pub mod errors;

pub use encoder::{Digit, Modulus, VectorEncoder, LIMIT};
pub use errors::{VectEncError, VectEncResult};
