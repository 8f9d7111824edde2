/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Resolve command implementation
 */

//! Resolve command implementation.
//!
//! Prints where a view's component is expected to live, whether or not the
//! file exists.

use std::path::PathBuf;

use anyhow::Result;

use redwood_engine::{ComponentKind, ContextRegistry, View};

use super::{build_engine, discover_project};

/// Arguments for the resolve command
#[derive(Debug)]
pub struct ResolveArgs {
    /// Component kind name
    pub kind: String,
    /// View name
    pub view: String,
    /// Namespace
    pub namespace: Option<String>,
    /// Config search start directory
    pub dir: Option<PathBuf>,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    let kind = ComponentKind::from_name(&args.kind)?;
    let project = discover_project(args.dir.as_deref())?;
    let engine = build_engine(&project, ContextRegistry::new())?;

    let view = View::new(args.view).in_namespace(args.namespace.unwrap_or_default());
    let path = engine.resolve_path(kind, &view)?;
    println!("{}", path.display());
    Ok(())
}
