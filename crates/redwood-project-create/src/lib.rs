/*
 * redwood-project-create
 * Copyright (c) 2025 Posit, PBC
 *
 * Project scaffolding for Redwood projects.
 *
 * A new project is a directory holding a `.redwood.yaml` config file and a
 * `src/` directory with one subdirectory per component kind. Unless a bare
 * project is requested, a starter `index` view (page, context and a `main`
 * layout) and a `header` partial are added.
 *
 * Templates are embedded at compile time via `include_str!()` and rendered
 * with the same template evaluator the view engine uses.
 *
 * # Usage
 *
 * ```ignore
 * use redwood_project_create::{CreateProjectOptions, init_project};
 *
 * let options = CreateProjectOptions::new("my-site").with_title("My Site");
 * let project_dir = init_project(Path::new("."), &options)?;
 * ```
 */

mod scaffold;
mod templates;
mod types;

pub use scaffold::{
    ProjectScaffold, ScaffoldContent, ScaffoldFileDef, ScaffoldLocation, ScaffoldedFile,
    get_scaffold,
};
pub use types::{CreateError, CreateProjectOptions};

use std::fs;
use std::path::{Path, PathBuf};

use redwood_engine::{Scope, template};
use tracing::info;

/// Render every file of the scaffold for `options`.
///
/// Nothing is written; the caller decides where the files go.
pub fn create_project(options: &CreateProjectOptions) -> Result<Vec<ScaffoldedFile>, CreateError> {
    let scaffold = get_scaffold(options);
    let data = Scope::new()
        .with("name", options.name.as_str())
        .with("title", options.title.as_str());

    scaffold
        .files
        .iter()
        .map(|file_def| -> Result<ScaffoldedFile, CreateError> {
            let path = file_def.full_path();
            let content = match file_def.content {
                ScaffoldContent::Template(source) => {
                    let name = path.display().to_string();
                    template::execute(&name, source, &data).map_err(|e| {
                        CreateError::TemplateRender {
                            path: name,
                            message: e.to_string(),
                        }
                    })?
                }
                ScaffoldContent::StaticText(text) => text.to_string(),
            };
            Ok(ScaffoldedFile { path, content })
        })
        .collect()
}

/// Create a new project directory named `options.name` inside `parent`.
///
/// Fails with [`CreateError::ProjectAlreadyExists`] if the directory exists.
/// Returns the path of the new project directory.
pub fn init_project(parent: &Path, options: &CreateProjectOptions) -> Result<PathBuf, CreateError> {
    validate_name(&options.name)?;

    let project_dir = parent.join(&options.name);
    if project_dir.exists() {
        return Err(CreateError::ProjectAlreadyExists { path: project_dir });
    }

    // Render before touching the filesystem so a failure leaves nothing behind
    let files = create_project(options)?;
    let scaffold = get_scaffold(options);

    for dir in scaffold.directories() {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path).map_err(|source| CreateError::Io { path, source })?;
    }

    for file in files {
        let path = project_dir.join(&file.path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| CreateError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, file.content).map_err(|source| CreateError::Io {
            path: path.clone(),
            source,
        })?;
        info!("Create: {}", path.display());
    }

    Ok(project_dir)
}

fn validate_name(name: &str) -> Result<(), CreateError> {
    let invalid = |reason| CreateError::InvalidProjectName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("the name is empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("the name must not contain a path separator"));
    }
    if name == "." || name == ".." {
        return Err(invalid("the name must not be a relative directory"));
    }
    Ok(())
}
