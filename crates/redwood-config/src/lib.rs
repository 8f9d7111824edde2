/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Project configuration for Redwood.
//!
//! A Redwood project is marked by a `.redwood.yaml` file at its root. This
//! crate finds that file by walking up from a starting directory, parses it,
//! and tells callers where the project's source root is.
//!
//! ```yaml
//! name: my-site
//! source-dir: src
//! components:
//!   page:
//!     dir: views
//!     ext: .html
//! ```
//!
//! The `components` table holds per-kind directory and extension overrides.
//! Kind names are not validated here; the engine rejects unknown ones.

mod discover;
mod error;
mod types;

pub use discover::{CONFIG_FILE_NAME, CONFIG_FILE_NAMES, ProjectContext, resolve_config_path};
pub use error::{ConfigError, ConfigResult};
pub use types::{ComponentOverride, DEFAULT_SOURCE_DIR, ProjectConfig, load_config};
