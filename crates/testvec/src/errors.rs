// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for test vector generation
//!
//! Every failure carries enough context (vector-set name, file path, position) to be
//! reported as-is at the process boundary.

use pqcr_vectenc::VectEncError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog setup and test vector generation
#[derive(Error, Debug)]
pub enum TestVecError {
    /// Sampling against a zero modulus
    #[error("Cannot sample digit at position {position}: modulus is zero")]
    ZeroModulus { position: usize },

    /// Vector-set names must be printable ASCII
    #[error("Invalid vector-set name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A vector-set with this name is already in the catalog
    #[error("Duplicate vector-set name: {0}")]
    DuplicateName(String),

    /// Lookup of a name that the catalog does not contain
    #[error("Unknown vector-set: {0}")]
    UnknownVectorSet(String),

    /// A moduli strategy was given parameters that produce no usable moduli
    #[error("Invalid moduli: {reason}")]
    InvalidModuli { reason: String },

    /// The encoder refused the moduli or the digits
    #[error("Encoder error for {name}: {source}")]
    Encoder {
        name: String,
        #[source]
        source: VectEncError,
    },

    /// Opening, writing or closing an output file failed
    #[error("I/O error for {name} ({}): {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

/// Result type alias for test vector operations
pub type TestVecResult<T> = Result<T, TestVecError>;

impl TestVecError {
    /// Create an invalid moduli error with a message
    pub fn invalid_moduli(reason: impl Into<String>) -> Self {
        TestVecError::InvalidModuli {
            reason: reason.into(),
        }
    }

    /// Attach a vector-set name to an encoder failure
    pub fn encoder(name: impl Into<String>, source: VectEncError) -> Self {
        TestVecError::Encoder {
            name: name.into(),
            source,
        }
    }

    /// Attach a vector-set name and file path to an I/O failure
    pub fn io(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TestVecError::Io {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from a bad request rather than a failed generation
    pub fn is_usage_error(&self) -> bool {
        matches!(self, TestVecError::UnknownVectorSet(_))
    }
}

impl From<figment::Error> for TestVecError {
    fn from(err: figment::Error) -> Self {
        TestVecError::Config(Box::new(err))
    }
}
