// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;
use helpers::telemetry::setup_simple_tracing;
use pqcr_testvec::TestVecError;

mod cli;
pub mod helpers;

/// Exit status for a bad request: unknown vector-set names. Clap uses the same status for
/// malformed arguments.
const EXIT_USAGE: i32 = 2;
/// Exit status for failed catalog setup or generation.
const EXIT_FAILURE: i32 = 1;

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TestVecError>() {
        Some(e) if e.is_usage_error() => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

pub fn main() {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level());

    if let Err(err) = cli.execute() {
        eprintln!("generate-test-vectors: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}
