/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Renders one page or partial of the project containing the working
//! directory. Page contexts are read as YAML data from the view's context
//! asset, registered under the view's conventional provider name.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use redwood_engine::{ContextRegistry, RenderMode, RenderOptions, RenderRequest};

use super::{build_engine, discover_project, display_path};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Page view name
    pub view: Option<String>,
    /// Partial view name
    pub partial: Option<String>,
    /// Layout name
    pub layout: Option<String>,
    /// Namespace
    pub namespace: Option<String>,
    /// Config search start directory
    pub dir: Option<PathBuf>,
    /// Output file path
    pub output: Option<PathBuf>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let project = discover_project(args.dir.as_deref())?;
    debug!(project = %project.dir.display(), "Discovered project");

    // Exactly one of the positional view and --partial must be given
    let request = RenderRequest::try_from(RenderOptions {
        page: args.view,
        partial: args.partial,
        layout: args.layout,
        namespace: args.namespace,
        locals: None,
    })?;

    let mut contexts = ContextRegistry::new();
    if request.mode == RenderMode::Page {
        contexts.register_data(&request.view());
    }

    let engine = build_engine(&project, contexts)?;
    let label = format!("{} '{}'", request.mode, request.name);
    let html = engine
        .render(request)
        .with_context(|| format!("Failed to render {label}"))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(
                "Output created: {}",
                display_path(&path, &project.dir).display()
            );
        }
        None => print!("{html}"),
    }

    Ok(())
}
