/*
 * request.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render requests.
//!
//! A request names exactly one view and says whether it is a page or a
//! partial. Callers can build one directly, pass a bare view name (a page
//! render), fill in [`RenderOptions`], or hand over a JSON value:
//!
//! ```ignore
//! engine.render("home")?;
//! engine.render(RenderRequest::page("home").with_layout("main"))?;
//! engine.render(RenderRequest::from_json(&json!({"partial": "nav"}))?)?;
//! ```

use std::fmt;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::resolver::View;
use crate::value::Scope;

/// Whether a request renders a page or a partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Page template evaluated against its context.
    Page,
    /// Partial template returned as-is.
    Partial,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Page => f.write_str("page"),
            RenderMode::Partial => f.write_str("partial"),
        }
    }
}

/// A fully resolved render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Page or partial.
    pub mode: RenderMode,
    /// The view name.
    pub name: String,
    /// Layout wrapping a page render.
    pub layout: Option<String>,
    /// Namespace appended to asset file names.
    pub namespace: Option<String>,
    /// Caller-supplied bindings. Carried but not yet applied to any render.
    pub locals: Option<Scope>,
}

impl RenderRequest {
    /// Render the page view `name`.
    pub fn page(name: impl Into<String>) -> Self {
        Self::new(RenderMode::Page, name.into())
    }

    /// Render the partial `name`.
    pub fn partial(name: impl Into<String>) -> Self {
        Self::new(RenderMode::Partial, name.into())
    }

    fn new(mode: RenderMode, name: String) -> Self {
        Self {
            mode,
            name,
            layout: None,
            namespace: None,
            locals: None,
        }
    }

    /// Wrap the rendered page in the layout `layout`.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Look assets up in `namespace`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach caller-supplied bindings.
    pub fn with_locals(mut self, locals: Scope) -> Self {
        self.locals = Some(locals);
        self
    }

    /// The view this request targets.
    pub fn view(&self) -> View {
        View::new(self.name.as_str()).in_namespace(self.namespace.clone().unwrap_or_default())
    }

    /// Build a request from a JSON value.
    ///
    /// A string is a page name; an object is parsed as [`RenderOptions`].
    /// Anything else fails with [`EngineError::InvalidRenderOptions`].
    pub fn from_json(value: &serde_json::Value) -> EngineResult<Self> {
        match value {
            serde_json::Value::String(name) => Ok(Self::page(name.as_str())),
            serde_json::Value::Object(_) => {
                let options = RenderOptions::deserialize(value).map_err(|e| {
                    EngineError::InvalidRenderOptions {
                        message: e.to_string(),
                    }
                })?;
                Self::try_from(options)
            }
            other => Err(EngineError::InvalidRenderOptions {
                message: format!(
                    "expected a view name or an options object, found {}",
                    json_kind(other)
                ),
            }),
        }
    }
}

impl From<&str> for RenderRequest {
    fn from(name: &str) -> Self {
        RenderRequest::page(name)
    }
}

impl From<String> for RenderRequest {
    fn from(name: String) -> Self {
        RenderRequest::page(name)
    }
}

/// Structured render options, before the mode is decided.
///
/// Exactly one of `page` and `partial` must be set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    pub page: Option<String>,
    pub partial: Option<String>,
    pub layout: Option<String>,
    pub namespace: Option<String>,
    pub locals: Option<Scope>,
}

impl TryFrom<RenderOptions> for RenderRequest {
    type Error = EngineError;

    fn try_from(options: RenderOptions) -> Result<Self, Self::Error> {
        let RenderOptions {
            page,
            partial,
            layout,
            namespace,
            locals,
        } = options;

        let (mode, name) = match (page, partial) {
            (Some(page), None) => (RenderMode::Page, page),
            (None, Some(partial)) => {
                if layout.is_some() {
                    return Err(EngineError::InvalidRenderOptions {
                        message: "`layout` only applies to page renders".to_string(),
                    });
                }
                (RenderMode::Partial, partial)
            }
            (page, partial) => return Err(EngineError::AmbiguousRenderMode { page, partial }),
        };

        Ok(RenderRequest {
            mode,
            name,
            layout,
            namespace,
            locals,
        })
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
