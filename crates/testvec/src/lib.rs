// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reproducible test vectors for the mixed-radix vector encoder.
//!
//! A vector-set is a named list of moduli. For each counter `i` in `0..count` the generator
//! derives a digit vector from the SHAKE256 stream of the 4-byte little-endian seed `i`,
//! encodes it, and writes the seed, digits, moduli and encoding to a text file next to a
//! binary file holding only the encodings. Any other implementation of the encoder can
//! regenerate the same digits and compare encodings byte for byte.

pub mod catalog;
pub mod config;
pub mod driver;
pub mod errors;
pub mod moduli;
pub mod sampling;
pub mod setup;
pub mod vector_set;
pub mod writers;

pub use catalog::Catalog;
pub use config::{CliOverrides, GeneratorConfig};
pub use driver::{generate, generate_files, GeneratedFiles, TestVector};
pub use errors::{TestVecError, TestVecResult};
pub use moduli::ModuliSpec;
pub use sampling::{counter_seed, sample};
pub use setup::default_catalog;
pub use vector_set::VectorSet;
pub use writers::{BinaryWriter, RecordFormat, RecordSink, RecordWriter, TextWriter};
