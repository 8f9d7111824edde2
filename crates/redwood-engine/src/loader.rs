/*
 * loader.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Loading a view's component assets.
//!
//! Template assets are read verbatim. Code assets are not executed: the
//! loader checks that the file exists and resolves the provider factory
//! registered under the view's conventional type name. Constructing and
//! invoking the provider is left to the render dispatcher.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::provider::{ContextFactory, ContextRegistry};
use crate::registry::{AssetClass, ComponentKind, ComponentRegistry};
use crate::resolver::{View, context_type_name, resolve_component_path};

/// One loaded asset.
#[derive(Clone)]
pub enum LoadedComponent {
    /// Raw template text, not yet evaluated.
    Template { path: PathBuf, text: String },

    /// A resolved context provider factory.
    Code {
        path: PathBuf,
        type_name: String,
        factory: ContextFactory,
    },
}

impl LoadedComponent {
    /// Path the asset was loaded from.
    pub fn path(&self) -> &Path {
        match self {
            LoadedComponent::Template { path, .. } => path,
            LoadedComponent::Code { path, .. } => path,
        }
    }

    /// Template text, if this is a template asset.
    pub fn text(&self) -> Option<&str> {
        match self {
            LoadedComponent::Template { text, .. } => Some(text),
            LoadedComponent::Code { .. } => None,
        }
    }

    /// Provider type name, if this is a code asset.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            LoadedComponent::Template { .. } => None,
            LoadedComponent::Code { type_name, .. } => Some(type_name),
        }
    }

    /// The asset class this component was loaded as.
    pub fn class(&self) -> AssetClass {
        match self {
            LoadedComponent::Template { .. } => AssetClass::Template,
            LoadedComponent::Code { .. } => AssetClass::Code,
        }
    }
}

impl fmt::Debug for LoadedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedComponent::Template { path, text } => f
                .debug_struct("Template")
                .field("path", path)
                .field("text", text)
                .finish(),
            LoadedComponent::Code {
                path, type_name, ..
            } => f
                .debug_struct("Code")
                .field("path", path)
                .field("type_name", type_name)
                .finish_non_exhaustive(),
        }
    }
}

/// Loaded components keyed by kind.
pub type LoadedComponents = BTreeMap<ComponentKind, LoadedComponent>;

/// Loads component assets using a component registry and a context registry.
#[derive(Debug, Clone, Copy)]
pub struct ComponentLoader<'a> {
    components: &'a ComponentRegistry,
    contexts: &'a ContextRegistry,
}

impl<'a> ComponentLoader<'a> {
    /// Create a loader over the given registries.
    pub fn new(components: &'a ComponentRegistry, contexts: &'a ContextRegistry) -> Self {
        Self {
            components,
            contexts,
        }
    }

    /// Load each of `kinds` for `view`, in order.
    ///
    /// An empty `kinds` list returns an empty map without validating the
    /// view. Loading stops at the first failure, so later kinds are never
    /// touched when an earlier asset is missing.
    pub fn load(&self, view: &View, kinds: &[ComponentKind]) -> EngineResult<LoadedComponents> {
        let mut loaded = LoadedComponents::new();
        if kinds.is_empty() {
            return Ok(loaded);
        }

        view.validated_name()?;

        for &kind in kinds {
            let component = self.load_one(view, kind)?;
            loaded.insert(kind, component);
        }

        Ok(loaded)
    }

    fn load_one(&self, view: &View, kind: ComponentKind) -> EngineResult<LoadedComponent> {
        let path = resolve_component_path(self.components, kind, view)?;

        if !path.is_file() {
            return Err(EngineError::ComponentNotFound {
                kind,
                view: view.name().to_string(),
                namespace: view.namespace().to_string(),
                path,
            });
        }

        match self.components.descriptor(kind)?.class() {
            AssetClass::Template => {
                let text = std::fs::read_to_string(&path).map_err(|source| EngineError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(%kind, path = %path.display(), bytes = text.len(), "Loaded template");
                Ok(LoadedComponent::Template { path, text })
            }
            AssetClass::Code => {
                let type_name = context_type_name(view, kind);
                let Some(factory) = self.contexts.get(&type_name) else {
                    return Err(EngineError::ContextTypeNotFound {
                        type_name,
                        view: view.name().to_string(),
                        namespace: view.namespace().to_string(),
                        path,
                    });
                };
                debug!(%kind, %type_name, path = %path.display(), "Resolved context provider");
                Ok(LoadedComponent::Code {
                    path,
                    type_name,
                    factory: factory.clone(),
                })
            }
        }
    }
}
