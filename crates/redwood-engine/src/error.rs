/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for view resolution and rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::{AssetClass, ComponentKind};

/// Errors that can occur while resolving, loading or rendering a view.
///
/// Every variant is terminal for the render call that produced it. Variants
/// carry the view, namespace and resolved path where one exists so that a
/// failure can be diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine was constructed over a missing path or a regular file.
    #[error("Invalid root directory '{}': {reason}", .path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// The view name was empty after trimming whitespace.
    #[error("Invalid view name {name:?}: a view name must not be empty")]
    InvalidViewName { name: String },

    /// The component kind is not one the registry knows about.
    #[error("Component kind '{name}' does not exist")]
    UnknownComponentKind { name: String },

    /// The resolved asset file does not exist.
    #[error(
        "The '{kind}' file for the '{view}' view{} does not exist. View component path is {}",
        namespace_suffix(.namespace),
        .path.display()
    )]
    ComponentNotFound {
        kind: ComponentKind,
        view: String,
        namespace: String,
        path: PathBuf,
    },

    /// A context asset exists but no provider is registered under its
    /// conventional type name.
    #[error(
        "No context provider named '{type_name}' is registered for the '{view}' view{} (context file: {})",
        namespace_suffix(.namespace),
        .path.display()
    )]
    ContextTypeNotFound {
        type_name: String,
        view: String,
        namespace: String,
        path: PathBuf,
    },

    /// The provider factory failed to build an instance.
    #[error("Failed to construct context provider '{type_name}' from {}", .path.display())]
    ContextConstruction {
        type_name: String,
        path: PathBuf,
        #[source]
        source: ContextError,
    },

    /// `context()` returned something other than a map of bindings.
    #[error("Context provider '{type_name}' must return a map of bindings, but returned a {found}")]
    InvalidContextBinding {
        type_name: String,
        path: PathBuf,
        found: &'static str,
    },

    /// A render request set both `page` and `partial`, or neither.
    #[error("Exactly one of `page` or `partial` must be set (page: {page:?}, partial: {partial:?})")]
    AmbiguousRenderMode {
        page: Option<String>,
        partial: Option<String>,
    },

    /// A render request had an unsupported shape.
    #[error("Invalid render options: {message}")]
    InvalidRenderOptions { message: String },

    /// A loaded component did not have the asset class its kind requires.
    #[error("The '{kind}' component was expected to be a {expected} asset")]
    AssetClassMismatch {
        kind: ComponentKind,
        expected: AssetClass,
    },

    /// The template evaluator rejected a template.
    #[error("Failed to render '{view}' from {}: {source:#}", .path.display())]
    TemplateExecution {
        view: String,
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// An existing asset could not be read.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while constructing a context provider.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The context asset could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The context asset is not valid YAML.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Any other construction failure reported by a custom factory.
    #[error("{0}")]
    Other(String),
}

impl ContextError {
    /// Create an error from any message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

fn namespace_suffix(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!(" in namespace '{namespace}'")
    }
}
