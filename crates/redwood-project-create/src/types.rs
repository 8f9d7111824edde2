/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Core types for Redwood project creation.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Error type for project creation operations.
#[derive(Debug, Error)]
pub enum CreateError {
    /// The target directory already exists
    #[error("Project could not be created: {} already exists", .path.display())]
    ProjectAlreadyExists { path: PathBuf },

    /// The project name cannot be used as a directory name
    #[error("Invalid project name {name:?}: {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// Template rendering failed
    #[error("Template rendering failed for {path}: {message}")]
    TemplateRender { path: String, message: String },

    /// Writing the project to disk failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for creating a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectOptions {
    /// Project name, also the name of the project directory
    pub name: String,

    /// Human-readable title used in starter files
    pub title: String,

    /// Whether to include the starter `index` view
    pub starter: bool,
}

impl CreateProjectOptions {
    /// Create options for a new project with the starter view. The title
    /// defaults to the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            starter: true,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Create only the directory tree and config file.
    pub fn bare(mut self) -> Self {
        self.starter = false;
        self
    }
}
