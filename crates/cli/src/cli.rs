// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::parse_count;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pqcr_testvec::{default_catalog, generate_files, CliOverrides, GeneratorConfig, VectorSet};
use std::path::PathBuf;
use tracing::{info, instrument, Level};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "generate-test-vectors", version = VERSION)]
#[command(about = "Generate reproducible test vectors for the mixed-radix vector encoder", long_about = None)]
pub struct Cli {
    /// Number of test vectors per vector-set (decimal, 0x hex or 0-prefixed octal) [default: 10]
    #[arg(short, long, value_parser = parse_count)]
    count: Option<u32>,

    /// Do not announce vector-sets and only log errors
    #[arg(short, long, action = ArgAction::SetTrue, overrides_with = "verbose")]
    quiet: bool,

    /// Announce each vector-set (the default). Repeat for more log output, eg. `-vvv` for
    /// trace level
    #[arg(short, long, action = ArgAction::Count, overrides_with = "quiet")]
    verbose: u8,

    /// Directory to write the test vector files to [default: current directory]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Optional YAML file with `count`, `output_dir` and `verbose` settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the known vector-sets with their length and encoded size, then exit
    #[arg(short, long)]
    list: bool,

    /// Vector-sets to generate, by exact name [default: all, in catalog order]
    #[arg(value_name = "TEST-VEC-SETS")]
    sets: Vec<String>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    fn overrides(&self) -> CliOverrides {
        let verbose = if self.quiet {
            Some(false)
        } else if self.verbose > 0 {
            Some(true)
        } else {
            None
        };
        CliOverrides {
            count: self.count,
            output_dir: self.output_dir.clone(),
            verbose,
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let catalog = default_catalog().context("error initializing test vector sets")?;

        if self.list {
            for set in &catalog {
                println!(
                    "{}\t{}\t{}",
                    set.name(),
                    set.moduli().len(),
                    set.encoded_len()
                );
            }
            return Ok(());
        }

        let config = GeneratorConfig::load(self.config.as_deref(), &self.overrides())?;
        info!(?config, "Configuration loaded");

        // Resolve every name before any file is written
        let selected: Vec<&VectorSet> = if self.sets.is_empty() {
            catalog.iter().collect()
        } else {
            catalog.resolve(&self.sets)?
        };

        for set in selected {
            if config.verbose {
                println!("{}", set.name());
            }
            generate_files(set, config.count, &config.output_dir)
                .with_context(|| format!("error generating {}", set.name()))?;
        }

        Ok(())
    }
}
