/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component kinds and the registry mapping each kind to its directory and
//! file extension.
//!
//! View assets live in fixed locations under the project's source root:
//!
//! | kind    | directory  | extension   |
//! |---------|------------|-------------|
//! | page    | `pages`    | `.template` |
//! | context | `contexts` | `.code`     |
//! | partial | `partials` | `.template` |
//! | layout  | `layouts`  | `.template` |
//!
//! Directories and extensions can be overridden through [`RegistryBuilder`]
//! before the registry is built. Once built, a [`ComponentRegistry`] never
//! changes.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The four categories of view asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// A page template, rendered against its context.
    Page,
    /// The context provider supplying a page's variables.
    Context,
    /// A fragment rendered on its own.
    Partial,
    /// A template wrapping a rendered page.
    Layout,
}

impl ComponentKind {
    /// Every built-in kind, in registry order.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Page,
        ComponentKind::Context,
        ComponentKind::Partial,
        ComponentKind::Layout,
    ];

    /// Lowercase identifier, as used in file names, config keys and type names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Page => "page",
            ComponentKind::Context => "context",
            ComponentKind::Partial => "partial",
            ComponentKind::Layout => "layout",
        }
    }

    /// Directory holding assets of this kind, relative to the source root.
    pub fn default_directory(&self) -> &'static str {
        match self {
            ComponentKind::Page => "pages",
            ComponentKind::Context => "contexts",
            ComponentKind::Partial => "partials",
            ComponentKind::Layout => "layouts",
        }
    }

    /// File extension of assets of this kind, including the leading dot.
    pub fn default_extension(&self) -> &'static str {
        match self.asset_class() {
            AssetClass::Template => ".template",
            AssetClass::Code => ".code",
        }
    }

    /// How assets of this kind are loaded. Fixed per kind.
    pub fn asset_class(&self) -> AssetClass {
        match self {
            ComponentKind::Context => AssetClass::Code,
            ComponentKind::Page | ComponentKind::Partial | ComponentKind::Layout => {
                AssetClass::Template
            }
        }
    }

    /// Parse a kind from its name. Case and surrounding whitespace are ignored.
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "page" => Ok(ComponentKind::Page),
            "context" => Ok(ComponentKind::Context),
            "partial" => Ok(ComponentKind::Partial),
            "layout" => Ok(ComponentKind::Layout),
            _ => Err(EngineError::UnknownComponentKind {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::from_name(s)
    }
}

/// How the loader treats an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    /// Static text, read verbatim.
    Template,
    /// A context provider, resolved through the context registry.
    Code,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Template => f.write_str("template"),
            AssetClass::Code => f.write_str("code"),
        }
    }
}

/// Where assets of one kind live and how they are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    directory: PathBuf,
    extension: String,
    class: AssetClass,
}

impl ComponentDescriptor {
    /// Absolute directory holding assets of this kind.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File extension, including the leading dot (may be empty).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// How assets of this kind are loaded.
    pub fn class(&self) -> AssetClass {
        self.class
    }
}

/// The immutable mapping from component kind to descriptor.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    root: PathBuf,
    descriptors: BTreeMap<ComponentKind, ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Build a registry with the default layout under `root`.
    ///
    /// Fails with [`EngineError::InvalidRoot`] when `root` does not exist or
    /// is not a directory.
    pub fn new(root: impl AsRef<Path>) -> EngineResult<Self> {
        RegistryBuilder::new(root).build()
    }

    /// Start building a registry with per-kind overrides.
    pub fn builder(root: impl AsRef<Path>) -> RegistryBuilder {
        RegistryBuilder::new(root)
    }

    /// The source root all component directories are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up the descriptor for `kind`.
    pub fn descriptor(&self, kind: ComponentKind) -> EngineResult<&ComponentDescriptor> {
        self.descriptors
            .get(&kind)
            .ok_or_else(|| EngineError::UnknownComponentKind {
                name: kind.as_str().to_string(),
            })
    }

    /// Iterate over every registered kind and its descriptor.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &ComponentDescriptor)> {
        self.descriptors.iter().map(|(kind, desc)| (*kind, desc))
    }
}

/// Builder for a [`ComponentRegistry`].
///
/// Directory overrides are joined onto the root (an absolute override
/// replaces it). Extension overrides get a leading dot if they lack one.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    root: PathBuf,
    directories: BTreeMap<ComponentKind, PathBuf>,
    extensions: BTreeMap<ComponentKind, String>,
}

impl RegistryBuilder {
    /// Create a builder for the given source root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            directories: BTreeMap::new(),
            extensions: BTreeMap::new(),
        }
    }

    /// Override the directory for `kind`.
    pub fn directory(mut self, kind: ComponentKind, directory: impl Into<PathBuf>) -> Self {
        self.directories.insert(kind, directory.into());
        self
    }

    /// Override the file extension for `kind`.
    pub fn extension(mut self, kind: ComponentKind, extension: impl Into<String>) -> Self {
        self.extensions.insert(kind, normalize_extension(extension.into()));
        self
    }

    /// Validate the root and freeze the registry.
    pub fn build(self) -> EngineResult<ComponentRegistry> {
        let root = validate_root(&self.root)?;

        let descriptors = ComponentKind::ALL
            .iter()
            .map(|kind| {
                let directory = match self.directories.get(kind) {
                    Some(dir) => root.join(dir),
                    None => root.join(kind.default_directory()),
                };
                let extension = self
                    .extensions
                    .get(kind)
                    .cloned()
                    .unwrap_or_else(|| kind.default_extension().to_string());
                let descriptor = ComponentDescriptor {
                    directory,
                    extension,
                    class: kind.asset_class(),
                };
                (*kind, descriptor)
            })
            .collect();

        Ok(ComponentRegistry { root, descriptors })
    }
}

fn validate_root(root: &Path) -> EngineResult<PathBuf> {
    let invalid = |reason: String| EngineError::InvalidRoot {
        path: root.to_path_buf(),
        reason,
    };

    if !root.exists() {
        return Err(invalid("the directory does not exist".to_string()));
    }
    if !root.is_dir() {
        return Err(invalid("the path is a file".to_string()));
    }

    std::path::absolute(root).map_err(|e| invalid(e.to_string()))
}

fn normalize_extension(extension: String) -> String {
    if extension.is_empty() || extension.starts_with('.') {
        extension
    } else {
        format!(".{extension}")
    }
}
