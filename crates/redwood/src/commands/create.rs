/*
 * create.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Create command implementation
 */

//! Create command implementation.
//!
//! Scaffolds a new project directory under the current directory.

use anyhow::{Context, Result};
use tracing::info;

use redwood_project_create::{CreateProjectOptions, init_project};

/// Arguments for the create command
#[derive(Debug)]
pub struct CreateArgs {
    /// Project name
    pub name: String,
    /// Project title
    pub title: Option<String>,
    /// Skip the starter view
    pub bare: bool,
}

/// Execute the create command
pub fn execute(args: CreateArgs) -> Result<()> {
    let parent = std::env::current_dir().context("Failed to get current directory")?;

    let mut options = CreateProjectOptions::new(args.name);
    if let Some(title) = args.title {
        options = options.with_title(title);
    }
    if args.bare {
        options = options.bare();
    }

    let project_dir = init_project(&parent, &options)?;
    info!("Created project at {}", project_dir.display());
    Ok(())
}
