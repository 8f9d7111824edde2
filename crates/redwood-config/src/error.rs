/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while finding or reading project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file exists in the start directory or any of its parents.
    #[error(
        "Could not find a .redwood.yaml file in {} or any parent directory. Are you running this command in your project directory?",
        .start_dir.display()
    )]
    ConfigNotFound { start_dir: PathBuf },

    /// The config file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or has the wrong shape.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
