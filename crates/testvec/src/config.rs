// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::TestVecResult;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables with this prefix override the built-in defaults.
pub const ENV_PREFIX: &str = "PQCR_TV_";

/// Records generated per vector-set unless told otherwise.
pub const DEFAULT_COUNT: u32 = 10;

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Records per vector-set
    pub count: u32,
    /// Directory receiving the file pairs
    pub output_dir: PathBuf,
    /// Announce each vector-set on stdout as it is generated
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_dir: PathBuf::from("."),
            verbose: true,
        }
    }
}

/// Values given explicitly on the command line; they win over every other source.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl GeneratorConfig {
    /// Layer defaults, an optional YAML file, the environment and the command line.
    pub fn figment(config_file: Option<&Path>, overrides: &CliOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(GeneratorConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    pub fn load(config_file: Option<&Path>, overrides: &CliOverrides) -> TestVecResult<Self> {
        Ok(Self::figment(config_file, overrides).extract()?)
    }
}
