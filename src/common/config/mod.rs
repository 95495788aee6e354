//! Game configuration loaded once at startup.
//!
//! ```toml
//! [tunables]
//! projectile_speed = 2000.0
//! rng_seed = 7
//!
//! [[spawn_table]]
//! kind = "grunt"
//! weight = 3.0
//!
//! [[spawn_table]]
//! kind = "brute"
//! weight = 1.0
//! ```
//!
//! Every section is optional. Weights are validated while building the table, so a bad
//! file fails here instead of at the first spawn.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::tunables::Tunables;
use crate::common::weighted::{InvalidWeight, WeightedTable};

/// Identifier of something a spawner can create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SpawnKind(pub String);

impl SpawnKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpawnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpawnTableEntry {
    pub kind: SpawnKind,
    pub weight: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tunables: Tunables,
    pub spawn_table: Vec<SpawnTableEntry>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("spawn table entry `{kind}`: {source}")]
    Weight {
        kind: SpawnKind,
        #[source]
        source: InvalidWeight,
    },
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        // Surface invalid weights at load time.
        config.spawn_table()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn spawn_table(&self) -> Result<WeightedTable<SpawnKind>, ConfigError> {
        let mut table = WeightedTable::new();
        for entry in &self.spawn_table {
            table
                .push(entry.kind.clone(), entry.weight)
                .map_err(|source| ConfigError::Weight {
                    kind: entry.kind.clone(),
                    source,
                })?;
        }
        Ok(table)
    }
}
