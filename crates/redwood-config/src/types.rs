/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Parsed `.redwood.yaml` contents.
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Source directory used when the config does not name one.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Parsed project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProjectConfig {
    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory holding the component directories, relative to the
    /// project root
    pub source_dir: PathBuf,

    /// Per-kind overrides, keyed by kind name (`page`, `context`, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentOverride>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            components: BTreeMap::new(),
        }
    }
}

/// Directory and extension override for one component kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentOverride {
    /// Directory, relative to the source root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// File extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

/// Read and parse a config file.
///
/// An empty file (or one holding only comments) yields the defaults.
pub fn load_config(path: &Path) -> ConfigResult<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> ConfigResult<ProjectConfig> {
    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}
