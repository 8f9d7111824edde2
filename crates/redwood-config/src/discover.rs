/*
 * discover.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Finding a project's config file.
 */

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{ProjectConfig, load_config};

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = ".redwood.yaml";

/// Accepted config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [CONFIG_FILE_NAME, ".redwood.yml"];

/// Find the config file for the project containing `start_dir`.
///
/// Checks `start_dir` and then each parent directory in turn. Fails with
/// [`ConfigError::ConfigNotFound`] once the filesystem root has been checked.
pub fn resolve_config_path(start_dir: &Path) -> ConfigResult<PathBuf> {
    let start = std::path::absolute(start_dir).map_err(|source| ConfigError::Io {
        path: start_dir.to_path_buf(),
        source,
    })?;

    let mut current = start.as_path();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Found project config");
                return Ok(candidate);
            }
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(ConfigError::ConfigNotFound { start_dir: start }),
        }
    }
}

/// A discovered project: where it lives and how it is configured.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root directory (the directory containing the config file)
    pub dir: PathBuf,

    /// Path to the config file
    pub config_path: PathBuf,

    /// Parsed configuration
    pub config: ProjectConfig,
}

impl ProjectContext {
    /// Discover the project containing `start_dir`.
    pub fn discover(start_dir: &Path) -> ConfigResult<Self> {
        let config_path = resolve_config_path(start_dir)?;
        Self::load(config_path)
    }

    /// Load the project whose config file is `config_path`.
    pub fn load(config_path: PathBuf) -> ConfigResult<Self> {
        let config = load_config(&config_path)?;
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self {
            dir,
            config_path,
            config,
        })
    }

    /// Directory holding the component directories.
    pub fn source_root(&self) -> PathBuf {
        self.dir.join(&self.config.source_dir)
    }
}
