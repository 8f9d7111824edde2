//! Command implementations for Redwood CLI
//!
//! Each command module handles the CLI interface and delegates to the
//! library crates for the actual work.

pub mod create;
pub mod render;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redwood_config::ProjectContext;
use redwood_engine::{ComponentKind, ContextRegistry, ViewEngine};

/// Discover the project containing `dir`, or the current directory.
pub fn discover_project(dir: Option<&Path>) -> Result<ProjectContext> {
    let start = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    ProjectContext::discover(&start).context("Failed to discover project configuration")
}

/// Build an engine over the project's source root, applying the component
/// overrides from its config file.
pub fn build_engine(project: &ProjectContext, contexts: ContextRegistry) -> Result<ViewEngine> {
    let mut builder = ViewEngine::builder(project.source_root()).contexts(contexts);

    for (name, component) in &project.config.components {
        let kind = ComponentKind::from_name(name).with_context(|| {
            format!(
                "Invalid component override in {}",
                project.config_path.display()
            )
        })?;
        if let Some(dir) = &component.dir {
            builder = builder.directory(kind, dir.clone());
        }
        if let Some(ext) = &component.ext {
            builder = builder.extension(kind, ext.clone());
        }
    }

    builder.build().with_context(|| {
        format!(
            "Failed to open the source directory of {}",
            project.dir.display()
        )
    })
}

/// Path for display, relative to `base` when possible.
pub fn display_path(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
