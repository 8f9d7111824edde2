/*
 * provider.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Context providers and the engine-scoped registry that constructs them.
//!
//! Each page view has a context asset in the `contexts` directory. The
//! loader maps that asset to a provider through its conventional type name
//! (`[Namespace][View]Context`), looked up in a [`ContextRegistry`] owned by
//! the engine. Nothing is registered implicitly: every provider is added
//! with an explicit registration call before the engine is built.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::ContextError;
use crate::registry::ComponentKind;
use crate::resolver::{View, context_type_name};
use crate::value::Value;

/// Supplies the variables a page template is rendered against.
///
/// The value returned by [`ContextProvider::context`] must be a
/// [`Value::Map`]; anything else fails the render.
pub trait ContextProvider {
    /// Produce the render-time bindings for this view.
    fn context(&self) -> Value;
}

/// Builds a provider for the context asset at the given path.
pub type ContextFactory =
    Arc<dyn Fn(&Path) -> Result<Box<dyn ContextProvider>, ContextError> + Send + Sync>;

/// Conventional type name to provider factory.
#[derive(Clone, Default)]
pub struct ContextRegistry {
    factories: HashMap<String, ContextFactory>,
}

impl ContextRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a default-constructible provider for `view`.
    ///
    /// The provider is stored under the view's conventional type name, so
    /// `register::<HomeContext>(&View::new("home"))` is found when the `home`
    /// page is rendered.
    pub fn register<T>(&mut self, view: &View) -> &mut Self
    where
        T: ContextProvider + Default + 'static,
    {
        let type_name = context_type_name(view, ComponentKind::Context);
        self.register_type::<T>(type_name)
    }

    /// Register a default-constructible provider under an explicit type name.
    pub fn register_type<T>(&mut self, type_name: impl Into<String>) -> &mut Self
    where
        T: ContextProvider + Default + 'static,
    {
        self.register_factory(type_name, |_path: &Path| {
            Ok(Box::new(T::default()) as Box<dyn ContextProvider>)
        })
    }

    /// Register a factory that receives the resolved context asset path.
    pub fn register_factory<F>(&mut self, type_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Path) -> Result<Box<dyn ContextProvider>, ContextError> + Send + Sync + 'static,
    {
        self.factories.insert(type_name.into(), Arc::new(factory));
        self
    }

    /// Register a [`DataContext`] for `view`, read from its context asset.
    pub fn register_data(&mut self, view: &View) -> &mut Self {
        let type_name = context_type_name(view, ComponentKind::Context);
        self.register_factory(type_name, |path: &Path| {
            DataContext::from_path(path).map(|ctx| Box::new(ctx) as Box<dyn ContextProvider>)
        })
    }

    /// Look up the factory registered under `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&ContextFactory> {
        self.factories.get(type_name)
    }

    /// Whether a factory is registered under `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ContextRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextRegistry")
            .field("type_names", &self.type_names())
            .finish()
    }
}

/// A provider whose bindings come from a YAML document.
///
/// The context asset holds a YAML mapping; each top-level key becomes a
/// binding. A document that is not a mapping is kept as-is and rejected when
/// the page is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContext {
    data: Value,
}

impl DataContext {
    /// Wrap an already-built value.
    pub fn new(data: impl Into<Value>) -> Self {
        Self { data: data.into() }
    }

    /// Read and parse the YAML document at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ContextError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source, path)
    }

    /// Parse a YAML document. `path` is only used for error messages.
    pub fn from_yaml_str(source: &str, path: &Path) -> Result<Self, ContextError> {
        // An empty document is an empty set of bindings
        if source.trim().is_empty() {
            return Ok(Self::new(Value::Map(Default::default())));
        }

        let json: serde_json::Value =
            serde_yaml::from_str(source).map_err(|source| ContextError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(json))
    }
}

impl ContextProvider for DataContext {
    fn context(&self) -> Value {
        self.data.clone()
    }
}
