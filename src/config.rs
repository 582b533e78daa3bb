//! Index configuration
//!
//! Controls where the asset root lives and which entries the walk ignores.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the asset root.
pub const ROOT_ENV_VAR: &str = "TRACKTABLE_DATA_ROOT";

/// Directory shipped alongside the crate holding the bundled data files.
pub const DEFAULT_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Configuration for building an [`AssetIndex`](crate::index::AssetIndex)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Package root; its immediate subdirectories are walked
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Top-level directories whose name contains any of these are skipped
    #[serde(default = "default_skip_dir_markers")]
    pub skip_dir_markers: Vec<String>,
    /// Files ending in any of these are source code, not assets
    #[serde(default = "default_source_suffixes")]
    pub source_suffixes: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_skip_dir_markers() -> Vec<String> {
    vec!["egg".to_string(), "__pycache__".to_string(), "target".to_string()]
}

fn default_source_suffixes() -> Vec<String> {
    vec![".py".to_string(), ".pyc".to_string(), ".rs".to_string()]
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            skip_dir_markers: default_skip_dir_markers(),
            source_suffixes: default_source_suffixes(),
        }
    }
}

impl IndexConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Default configuration, with the root taken from `TRACKTABLE_DATA_ROOT` when set
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(ROOT_ENV_VAR) {
            Some(value) if value.is_empty() => Err(DataError::Config(format!(
                "{} is set but empty",
                ROOT_ENV_VAR
            ))),
            Some(value) => {
                log::debug!("Using asset root from {}: {:?}", ROOT_ENV_VAR, value);
                Ok(Self::with_root(value))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a top-level directory is build output or packaging metadata
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dir_markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
    }

    /// Whether a file name carries a source-code suffix
    pub fn is_source_file(&self, name: &str) -> bool {
        self.source_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}
