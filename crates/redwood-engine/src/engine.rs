/*
 * engine.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The view engine and its render dispatcher.
//!
//! A render moves through these stages, failing out of any of them:
//!
//! ```text
//! Start -> ModeSelected -> ComponentsLoaded -> ContextBound -> Rendered
//! ```
//!
//! Page renders load the page template and its context, bind the context to
//! a [`Scope`], then evaluate the template (and the layout, if one was
//! named). Partial renders load the partial and return its text untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

use crate::error::{EngineError, EngineResult};
use crate::loader::{ComponentLoader, LoadedComponent, LoadedComponents};
use crate::provider::{ContextProvider, ContextRegistry};
use crate::registry::{AssetClass, ComponentKind, ComponentRegistry, RegistryBuilder};
use crate::request::{RenderMode, RenderOptions, RenderRequest};
use crate::resolver::{View, resolve_component_path};
use crate::template;
use crate::value::Scope;

/// Binding under which a layout sees the rendered page.
pub const LAYOUT_CONTENT_BINDING: &str = "content";

/// Renders views found under a single source root.
///
/// The engine is immutable once built and can be shared across threads;
/// every render call works on its own request, components and scope.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    components: ComponentRegistry,
    contexts: ContextRegistry,
}

impl ViewEngine {
    /// Create an engine with the default component layout and no context
    /// providers.
    pub fn new(root: impl AsRef<Path>) -> EngineResult<Self> {
        Self::builder(root).build()
    }

    /// Start building an engine.
    pub fn builder(root: impl AsRef<Path>) -> ViewEngineBuilder {
        ViewEngineBuilder {
            registry: RegistryBuilder::new(root),
            contexts: ContextRegistry::new(),
        }
    }

    /// The source root.
    pub fn root(&self) -> &Path {
        self.components.root()
    }

    /// The component registry.
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// The context provider registry.
    pub fn contexts(&self) -> &ContextRegistry {
        &self.contexts
    }

    /// Expected path of `kind`'s asset for `view`.
    pub fn resolve_path(&self, kind: ComponentKind, view: &View) -> EngineResult<PathBuf> {
        resolve_component_path(&self.components, kind, view)
    }

    /// Load `kinds` for `view`. See [`ComponentLoader::load`].
    pub fn load_components(
        &self,
        view: &View,
        kinds: &[ComponentKind],
    ) -> EngineResult<LoadedComponents> {
        ComponentLoader::new(&self.components, &self.contexts).load(view, kinds)
    }

    /// Render a view to a string.
    ///
    /// Accepts a [`RenderRequest`] or a bare view name, which renders that
    /// page.
    pub fn render(&self, request: impl Into<RenderRequest>) -> EngineResult<String> {
        let request = request.into();
        let _span = debug_span!(
            "render",
            mode = %request.mode,
            view = %request.name,
            namespace = request.namespace.as_deref().unwrap_or(""),
        )
        .entered();
        debug!("Mode selected");

        if let Some(locals) = &request.locals {
            debug!(count = locals.len(), "Render locals are not applied");
        }

        match request.mode {
            RenderMode::Page => self.render_page(&request),
            RenderMode::Partial => self.render_partial(&request),
        }
    }

    /// Render from structured options.
    pub fn render_options(&self, options: RenderOptions) -> EngineResult<String> {
        self.render(RenderRequest::try_from(options)?)
    }

    /// Render from a JSON request. See [`RenderRequest::from_json`].
    pub fn render_json(&self, request: &serde_json::Value) -> EngineResult<String> {
        self.render(RenderRequest::from_json(request)?)
    }

    fn render_page(&self, request: &RenderRequest) -> EngineResult<String> {
        let view = request.view();

        let mut components =
            self.load_components(&view, &[ComponentKind::Page, ComponentKind::Context])?;
        let layout = match &request.layout {
            Some(layout) => {
                let layout_view = View::new(layout.as_str()).in_namespace(view.namespace());
                let mut loaded = self.load_components(&layout_view, &[ComponentKind::Layout])?;
                Some(take_template(&mut loaded, ComponentKind::Layout)?)
            }
            None => None,
        };
        debug!("Components loaded");

        let (page_path, page_text) = take_template(&mut components, ComponentKind::Page)?;
        let context = components
            .remove(&ComponentKind::Context)
            .ok_or(EngineError::AssetClassMismatch {
                kind: ComponentKind::Context,
                expected: AssetClass::Code,
            })?;
        let scope = bind_context(context)?;
        debug!(bindings = scope.len(), "Context bound");

        let body = execute(&view, &page_path, &page_text, &scope)?;

        let output = match layout {
            Some((layout_path, layout_text)) => {
                let scope = scope.with(LAYOUT_CONTENT_BINDING, body);
                execute(&view, &layout_path, &layout_text, &scope)?
            }
            None => body,
        };
        debug!(bytes = output.len(), "Rendered");
        Ok(output)
    }

    // Partials are a pass-through: no context is bound and the text is
    // returned without evaluation.
    fn render_partial(&self, request: &RenderRequest) -> EngineResult<String> {
        let mut components = self.load_components(&request.view(), &[ComponentKind::Partial])?;
        let (_, text) = take_template(&mut components, ComponentKind::Partial)?;
        debug!(bytes = text.len(), "Rendered");
        Ok(text)
    }
}

/// Builder for a [`ViewEngine`].
#[derive(Debug, Clone)]
pub struct ViewEngineBuilder {
    registry: RegistryBuilder,
    contexts: ContextRegistry,
}

impl ViewEngineBuilder {
    /// Override the directory for `kind`, relative to the root.
    pub fn directory(mut self, kind: ComponentKind, directory: impl Into<PathBuf>) -> Self {
        self.registry = self.registry.directory(kind, directory);
        self
    }

    /// Override the file extension for `kind`.
    pub fn extension(mut self, kind: ComponentKind, extension: impl Into<String>) -> Self {
        self.registry = self.registry.extension(kind, extension);
        self
    }

    /// Replace the context registry.
    pub fn contexts(mut self, contexts: ContextRegistry) -> Self {
        self.contexts = contexts;
        self
    }

    /// Register a default-constructible context provider for `view`.
    pub fn context<T>(mut self, view: &View) -> Self
    where
        T: ContextProvider + Default + 'static,
    {
        self.contexts.register::<T>(view);
        self
    }

    /// Validate the root and build the engine.
    pub fn build(self) -> EngineResult<ViewEngine> {
        let components = self.registry.build()?;
        debug!(
            root = %components.root().display(),
            contexts = self.contexts.len(),
            "View engine ready"
        );
        Ok(ViewEngine {
            components,
            contexts: self.contexts,
        })
    }
}

fn take_template(
    components: &mut LoadedComponents,
    kind: ComponentKind,
) -> EngineResult<(PathBuf, String)> {
    match components.remove(&kind) {
        Some(LoadedComponent::Template { path, text }) => Ok((path, text)),
        _ => Err(EngineError::AssetClassMismatch {
            kind,
            expected: AssetClass::Template,
        }),
    }
}

fn bind_context(component: LoadedComponent) -> EngineResult<Scope> {
    let LoadedComponent::Code {
        path,
        type_name,
        factory,
    } = component
    else {
        return Err(EngineError::AssetClassMismatch {
            kind: ComponentKind::Context,
            expected: AssetClass::Code,
        });
    };

    let provider = factory(&path).map_err(|source| EngineError::ContextConstruction {
        type_name: type_name.clone(),
        path: path.clone(),
        source,
    })?;

    Scope::try_from(provider.context()).map_err(|found| EngineError::InvalidContextBinding {
        type_name,
        path,
        found: found.kind_name(),
    })
}

fn execute(view: &View, path: &Path, text: &str, scope: &Scope) -> EngineResult<String> {
    template::execute(&path.display().to_string(), text, scope).map_err(|source| {
        EngineError::TemplateExecution {
            view: view.name().to_string(),
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Default)]
    struct HomeContext;

    impl ContextProvider for HomeContext {
        fn context(&self) -> Value {
            Scope::new().with("title", "Hello").into()
        }
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for kind in ComponentKind::ALL {
            std::fs::create_dir_all(dir.path().join(kind.default_directory())).unwrap();
        }
        std::fs::write(dir.path().join("pages/home.template"), "<h1>{{ title }}</h1>").unwrap();
        std::fs::write(dir.path().join("contexts/home.code"), "").unwrap();
        dir
    }

    #[test]
    fn test_render_page() {
        let dir = site();
        let engine = ViewEngine::builder(dir.path())
            .context::<HomeContext>(&View::new("home"))
            .build()
            .unwrap();

        assert_eq!(engine.render("home").unwrap(), "<h1>Hello</h1>");
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ViewEngine>();
    }

    #[test]
    fn test_invalid_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewEngine::new(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRoot { .. }));
    }
}
