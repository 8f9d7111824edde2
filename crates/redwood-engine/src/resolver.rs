/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Naming conventions: where a view's assets live and what its context
//! provider is called.
//!
//! A namespace is extra text in the file name, not a subdirectory. The
//! `home` page in the `blog` namespace lives at `pages/homeblog.template`,
//! and its context provider is named `BlogHomeContext`.

use std::fmt;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};
use crate::registry::{ComponentKind, ComponentRegistry};

/// A view name with an optional namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct View {
    name: String,
    namespace: String,
}

impl View {
    /// A view with no namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
        }
    }

    /// Set the namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// The view name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace, empty when none was given.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The view name with surrounding whitespace removed.
    ///
    /// Fails with [`EngineError::InvalidViewName`] if nothing is left.
    pub fn validated_name(&self) -> EngineResult<&str> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidViewName {
                name: self.name.clone(),
            });
        }
        Ok(trimmed)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.namespace)
        }
    }
}

/// Compute the expected path of `kind`'s asset for `view`.
///
/// The file name is the trimmed view name, then the namespace, then the
/// kind's extension, inside the kind's directory.
pub fn resolve_component_path(
    registry: &ComponentRegistry,
    kind: ComponentKind,
    view: &View,
) -> EngineResult<PathBuf> {
    let name = view.validated_name()?;
    let descriptor = registry.descriptor(kind)?;
    let file_name = format!("{name}{}{}", view.namespace(), descriptor.extension());
    Ok(descriptor.directory().join(file_name))
}

/// Conventional type name for `kind`'s provider: `[Namespace][View][Kind]`.
///
/// Each segment is capitalized and the namespace segment is left out when
/// empty, so `home` gives `HomeContext` and `home` in `blog` gives
/// `BlogHomeContext`.
pub fn context_type_name(view: &View, kind: ComponentKind) -> String {
    let mut type_name = String::new();
    if !view.namespace().is_empty() {
        type_name.push_str(&capitalize(view.namespace()));
    }
    type_name.push_str(&capitalize(view.name().trim()));
    type_name.push_str(&capitalize(kind.as_str()));
    type_name
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
