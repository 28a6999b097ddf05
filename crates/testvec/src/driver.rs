// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Test vector generation for a single vector-set.
//!
//! Record `i` is derived from the 4-byte little-endian seed `i`. Records are produced and
//! written one at a time, so memory use does not grow with the count.

use crate::errors::{TestVecError, TestVecResult};
use crate::sampling::{counter_seed, sample};
use crate::vector_set::VectorSet;
use crate::writers::{binary_file_name, text_file_name, BinaryWriter, RecordSink, TextWriter};
use pqcr_vectenc::Digit;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// One generated test vector.
#[derive(Debug, Clone)]
pub struct TestVector<'a> {
    pub seed: Vec<u8>,
    /// `digits[i] < vector_set.moduli()[i]`
    pub digits: Vec<Digit>,
    /// Exactly `vector_set.encoded_len()` bytes
    pub encoded: Vec<u8>,
    pub vector_set: &'a VectorSet,
}

impl<'a> TestVector<'a> {
    /// Derive the digits for `seed` and encode them.
    pub fn generate(vector_set: &'a VectorSet, seed: &[u8]) -> TestVecResult<Self> {
        let digits = sample(seed, vector_set.moduli())?;
        let encoded = vector_set
            .encoder()
            .encode(digits)
            .map_err(|e| TestVecError::encoder(vector_set.name(), e))?;

        // The encoder consumed the digits; draw them again for the report.
        let digits = sample(seed, vector_set.moduli())?;

        Ok(Self {
            seed: seed.to_vec(),
            digits,
            encoded,
            vector_set,
        })
    }
}

/// Write `count` records of `vector_set` to both sinks, then flush them.
pub fn generate<T, B>(
    vector_set: &VectorSet,
    count: u32,
    text: &mut T,
    binary: &mut B,
) -> TestVecResult<()>
where
    T: RecordSink + ?Sized,
    B: RecordSink + ?Sized,
{
    let name = vector_set.name();
    for counter in 0..count {
        let seed = counter_seed(counter);
        let record = TestVector::generate(vector_set, &seed)?;
        text.write_record(&record)
            .map_err(|e| TestVecError::io(name, text.path(), e))?;
        binary
            .write_record(&record)
            .map_err(|e| TestVecError::io(name, binary.path(), e))?;
        trace!(name, counter, "Wrote test vector");
    }

    text.finish()
        .map_err(|e| TestVecError::io(name, text.path(), e))?;
    binary
        .finish()
        .map_err(|e| TestVecError::io(name, binary.path(), e))?;
    Ok(())
}

/// The file pair written for one vector-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub text: PathBuf,
    pub binary: PathBuf,
    pub records: u32,
    pub encoded_bytes: u64,
}

/// Generate `count` records of `vector_set` into its text/binary file pair under `dir`.
///
/// On failure both files are removed again.
pub fn generate_files(
    vector_set: &VectorSet,
    count: u32,
    dir: &Path,
) -> TestVecResult<GeneratedFiles> {
    let text_path = dir.join(text_file_name(count, vector_set.name()));
    let binary_path = dir.join(binary_file_name(count, vector_set.name()));
    debug!(
        name = vector_set.name(),
        text = %text_path.display(),
        binary = %binary_path.display(),
        "Generating test vector files"
    );

    match write_files(vector_set, count, &text_path, &binary_path) {
        Ok(()) => {
            let files = GeneratedFiles {
                text: text_path,
                binary: binary_path,
                records: count,
                encoded_bytes: u64::from(count) * vector_set.encoded_len() as u64,
            };
            info!(
                name = vector_set.name(),
                records = files.records,
                encoded_bytes = files.encoded_bytes,
                "Test vectors written"
            );
            Ok(files)
        }
        Err(e) => {
            discard(&text_path);
            discard(&binary_path);
            Err(e)
        }
    }
}

fn write_files(
    vector_set: &VectorSet,
    count: u32,
    text_path: &Path,
    binary_path: &Path,
) -> TestVecResult<()> {
    let name = vector_set.name();
    let mut text =
        TextWriter::create(text_path).map_err(|e| TestVecError::io(name, text_path, e))?;
    let mut binary =
        BinaryWriter::create(binary_path).map_err(|e| TestVecError::io(name, binary_path, e))?;

    generate(vector_set, count, &mut text, &mut binary)?;

    // Surface write-back errors that closing the files would otherwise hide
    text.into_inner()
        .get_ref()
        .sync_all()
        .map_err(|e| TestVecError::io(name, text_path, e))?;
    binary
        .into_inner()
        .get_ref()
        .sync_all()
        .map_err(|e| TestVecError::io(name, binary_path, e))?;
    Ok(())
}

fn discard(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Could not remove incomplete output");
        }
    }
}
