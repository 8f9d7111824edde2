/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Convention-over-configuration view rendering for Redwood.
//!
//! A Redwood source root holds one directory per component kind:
//!
//! - `pages/`: page templates (`home.template`)
//! - `contexts/`: per-page context assets (`home.code`)
//! - `partials/`: partial templates
//! - `layouts/`: layout templates
//!
//! Rendering a page finds its template and context asset by name, asks the
//! context provider registered for the view for its bindings, and evaluates
//! the template against them. Partials are returned as-is.
//!
//! # Context providers
//!
//! Providers are registered with the engine under the view's conventional
//! type name, `[Namespace][View]Context`. There is no implicit discovery:
//! a context asset with no registered provider fails with
//! [`EngineError::ContextTypeNotFound`].
//!
//! # Example
//!
//! ```ignore
//! use redwood_engine::{ContextProvider, Scope, Value, View, ViewEngine};
//!
//! #[derive(Default)]
//! struct HomeContext;
//!
//! impl ContextProvider for HomeContext {
//!     fn context(&self) -> Value {
//!         Scope::new().with("title", "Hello").into()
//!     }
//! }
//!
//! let engine = ViewEngine::builder("site/src")
//!     .context::<HomeContext>(&View::new("home"))
//!     .build()?;
//!
//! let html = engine.render("home")?;
//! ```

pub mod engine;
pub mod error;
pub mod loader;
pub mod provider;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod template;
pub mod value;

// Re-export main types at crate root
pub use engine::{LAYOUT_CONTENT_BINDING, ViewEngine, ViewEngineBuilder};
pub use error::{ContextError, EngineError, EngineResult};
pub use loader::{ComponentLoader, LoadedComponent, LoadedComponents};
pub use provider::{ContextFactory, ContextProvider, ContextRegistry, DataContext};
pub use registry::{
    AssetClass, ComponentDescriptor, ComponentKind, ComponentRegistry, RegistryBuilder,
};
pub use request::{RenderMode, RenderOptions, RenderRequest};
pub use resolver::{View, capitalize, context_type_name, resolve_component_path};
pub use value::{Scope, Value};
