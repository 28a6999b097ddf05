// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for vector encoding.

use thiserror::Error;

/// Errors raised while building an encoder or encoding a digit vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectEncError {
    /// A radix of zero admits no digit at all
    #[error("Modulus at position {position} is zero")]
    ZeroModulus { position: usize },

    /// The digit vector does not have one entry per modulus
    #[error("Digit vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A digit is not below its radix
    #[error("Digit {digit} at position {position} is not below its modulus {modulus}")]
    DigitOutOfRange {
        position: usize,
        digit: u32,
        modulus: u32,
    },
}

/// Result type alias for encoder operations
pub type VectEncResult<T> = Result<T, VectEncError>;
