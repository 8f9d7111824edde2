/*
 * scaffold.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Declarative file layout for project scaffolding.
 *
 * A scaffold is a list of file definitions. Each definition says where the
 * file goes (the project root, or a view asset inside one of the component
 * directories) and whether its content is a template rendered with the
 * project data or static text copied as-is.
 *
 * View assets are placed using the engine's default component layout, so
 * a starter page lands at `src/pages/index.template` and its context at
 * `src/contexts/index.code`.
 */

use std::path::PathBuf;

use redwood_config::{CONFIG_FILE_NAME, DEFAULT_SOURCE_DIR};
use redwood_engine::ComponentKind;

use crate::templates;
use crate::types::CreateProjectOptions;

/// Content type for a scaffold file definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldContent {
    /// Template rendered with the project data
    Template(&'static str),

    /// Static text copied as-is
    StaticText(&'static str),
}

/// Where a scaffold file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldLocation {
    /// A file at the project root
    ProjectRoot(&'static str),

    /// The asset of one component kind for a view
    Component {
        kind: ComponentKind,
        view: &'static str,
    },
}

/// A scaffold file definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldFileDef {
    /// Where the file goes
    pub location: ScaffoldLocation,

    /// File content (template or static text)
    pub content: ScaffoldContent,
}

impl ScaffoldFileDef {
    /// A file at the project root.
    pub const fn root(path: &'static str, content: ScaffoldContent) -> Self {
        Self {
            location: ScaffoldLocation::ProjectRoot(path),
            content,
        }
    }

    /// A view asset in the directory of `kind`.
    pub const fn component(
        kind: ComponentKind,
        view: &'static str,
        content: ScaffoldContent,
    ) -> Self {
        Self {
            location: ScaffoldLocation::Component { kind, view },
            content,
        }
    }

    /// Path relative to the project directory.
    pub fn full_path(&self) -> PathBuf {
        match self.location {
            ScaffoldLocation::ProjectRoot(path) => PathBuf::from(path),
            ScaffoldLocation::Component { kind, view } => PathBuf::from(DEFAULT_SOURCE_DIR)
                .join(kind.default_directory())
                .join(format!("{view}{}", kind.default_extension())),
        }
    }
}

/// A scaffolded file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedFile {
    /// Relative path within the project directory
    pub path: PathBuf,

    /// File content
    pub content: String,
}

/// A project scaffold definition.
#[derive(Debug, Clone, Default)]
pub struct ProjectScaffold {
    /// List of files to create
    pub files: Vec<ScaffoldFileDef>,
}

impl ProjectScaffold {
    /// Add a file to this scaffold.
    pub fn add_file(mut self, file: ScaffoldFileDef) -> Self {
        self.files.push(file);
        self
    }

    /// Directories to create, relative to the project directory: the source
    /// root and one directory per component kind.
    pub fn directories(&self) -> Vec<PathBuf> {
        let source = PathBuf::from(DEFAULT_SOURCE_DIR);
        ComponentKind::ALL
            .iter()
            .map(|kind| source.join(kind.default_directory()))
            .collect()
    }
}

/// Get the scaffold for the given options.
pub fn get_scaffold(options: &CreateProjectOptions) -> ProjectScaffold {
    let scaffold = ProjectScaffold::default().add_file(ScaffoldFileDef::root(
        CONFIG_FILE_NAME,
        ScaffoldContent::Template(templates::CONFIG),
    ));

    if !options.starter {
        return scaffold;
    }

    scaffold
        .add_file(ScaffoldFileDef::component(
            ComponentKind::Page,
            "index",
            ScaffoldContent::StaticText(templates::starter::INDEX_PAGE),
        ))
        .add_file(ScaffoldFileDef::component(
            ComponentKind::Context,
            "index",
            ScaffoldContent::Template(templates::starter::INDEX_CONTEXT),
        ))
        .add_file(ScaffoldFileDef::component(
            ComponentKind::Layout,
            "main",
            ScaffoldContent::StaticText(templates::starter::MAIN_LAYOUT),
        ))
        .add_file(ScaffoldFileDef::component(
            ComponentKind::Partial,
            "header",
            ScaffoldContent::StaticText(templates::starter::HEADER_PARTIAL),
        ))
}
