// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Text and binary renderings of test vectors.
//!
//! A text record is four labelled lines and a blank line:
//!
//! ```text
//! Seed = 00000000
//! R = 812, 4493, ...
//! M = 4591, 4591, ...
//! S = cfc2b591...
//!
//! ```
//!
//! The binary rendering is the bare concatenation of every `S`, with no framing.

use crate::driver::TestVector;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Longest file name produced; longer names are cut.
pub const FILE_NAME_MAX: usize = 127;

/// Name of the text file holding `count` vectors of `set_name`.
pub fn text_file_name(count: u32, set_name: &str) -> String {
    truncate_file_name(format!("TVSet_{count}_{set_name}.txt"))
}

/// Name of the binary file holding `count` encodings of `set_name`.
pub fn binary_file_name(count: u32, set_name: &str) -> String {
    truncate_file_name(format!("TVSet_{count}_{set_name}_S.bin"))
}

fn truncate_file_name(mut name: String) -> String {
    if name.len() > FILE_NAME_MAX {
        let mut end = FILE_NAME_MAX;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    name
}

/// Destination for generated test vectors.
pub trait RecordSink {
    /// Where the records end up, for error reports.
    fn path(&self) -> &Path;

    fn write_record(&mut self, record: &TestVector<'_>) -> io::Result<()>;

    /// Flush everything written so far down to the underlying storage.
    fn finish(&mut self) -> io::Result<()>;
}

/// How a record is laid out on the wire.
pub trait RecordFormat {
    fn render<W: Write>(w: &mut W, record: &TestVector<'_>) -> io::Result<()>;
}

/// Labelled `Seed`/`R`/`M`/`S` lines followed by a blank line.
#[derive(Debug, Clone, Copy)]
pub struct Text;

impl RecordFormat for Text {
    fn render<W: Write>(w: &mut W, record: &TestVector<'_>) -> io::Result<()> {
        writeln!(w, "Seed = {}", hex::encode(&record.seed))?;
        write!(w, "R = ")?;
        write_digits(w, &record.digits)?;
        write!(w, "M = ")?;
        write_digits(w, record.vector_set.moduli())?;
        writeln!(w, "S = {}", hex::encode(&record.encoded))?;
        writeln!(w)
    }
}

fn write_digits<W: Write>(w: &mut W, values: &[u32]) -> io::Result<()> {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(w, ", ")?;
        }
        write!(w, "{v}")?;
    }
    writeln!(w)
}

/// The raw encoding only.
#[derive(Debug, Clone, Copy)]
pub struct Binary;

impl RecordFormat for Binary {
    fn render<W: Write>(w: &mut W, record: &TestVector<'_>) -> io::Result<()> {
        w.write_all(&record.encoded)
    }
}

/// Writes records in format `F` to `inner`, remembering `path` for error reports.
#[derive(Debug)]
pub struct RecordWriter<W: Write, F: RecordFormat> {
    inner: W,
    path: PathBuf,
    _format: PhantomData<F>,
}

/// Renders records in the labelled text layout.
pub type TextWriter<W> = RecordWriter<W, Text>;

/// Writes the raw encodings back to back.
pub type BinaryWriter<W> = RecordWriter<W, Binary>;

impl<W: Write, F: RecordFormat> RecordWriter<W, F> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            _format: PhantomData,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<F: RecordFormat> RecordWriter<BufWriter<File>, F> {
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = File::create(&path)?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write, F: RecordFormat> RecordSink for RecordWriter<W, F> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&mut self, record: &TestVector<'_>) -> io::Result<()> {
        F::render(&mut self.inner, record)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
