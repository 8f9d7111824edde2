/*
 * init_project_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Project creation on disk, and rendering the result.
 */

use std::fs;

use redwood_config::ProjectContext;
use redwood_engine::{ComponentKind, ContextRegistry, RenderRequest, View, ViewEngine};
use redwood_project_create::{CreateError, CreateProjectOptions, init_project};

#[test]
fn test_init_creates_component_directories() {
    let parent = tempfile::tempdir().unwrap();
    let project_dir = init_project(parent.path(), &CreateProjectOptions::new("site").bare()).unwrap();

    assert_eq!(project_dir, parent.path().join("site"));
    assert!(project_dir.join(".redwood.yaml").is_file());
    for kind in ComponentKind::ALL {
        assert!(
            project_dir.join("src").join(kind.default_directory()).is_dir(),
            "missing directory for {kind}"
        );
    }
}

#[test]
fn test_existing_directory_is_rejected() {
    let parent = tempfile::tempdir().unwrap();
    fs::create_dir(parent.path().join("site")).unwrap();

    let err = init_project(parent.path(), &CreateProjectOptions::new("site")).unwrap_err();
    match err {
        CreateError::ProjectAlreadyExists { path } => assert_eq!(path, parent.path().join("site")),
        other => panic!("Expected ProjectAlreadyExists, got {other:?}"),
    }
    // The existing directory is left untouched
    assert!(!parent.path().join("site/.redwood.yaml").exists());
}

#[test]
fn test_created_config_is_discoverable() {
    let parent = tempfile::tempdir().unwrap();
    let project_dir = init_project(parent.path(), &CreateProjectOptions::new("site")).unwrap();

    let project = ProjectContext::discover(&project_dir.join("src/pages")).unwrap();
    assert_eq!(project.dir, project_dir);
    assert_eq!(project.config.name.as_deref(), Some("site"));
    assert_eq!(project.source_root(), project_dir.join("src"));
}

#[test]
fn test_starter_project_renders() {
    let parent = tempfile::tempdir().unwrap();
    let options = CreateProjectOptions::new("site").with_title("My Site");
    let project_dir = init_project(parent.path(), &options).unwrap();

    let mut contexts = ContextRegistry::new();
    contexts.register_data(&View::new("index"));
    let engine = ViewEngine::builder(project_dir.join("src"))
        .contexts(contexts)
        .build()
        .unwrap();

    let html = engine
        .render(RenderRequest::page("index").with_layout("main"))
        .unwrap();
    assert!(html.contains("<title>My Site</title>"));
    assert!(html.contains("<h1>My Site</h1>"));
    assert!(html.contains("Rendered by Redwood."));

    let header = engine.render(RenderRequest::partial("header")).unwrap();
    assert!(header.contains("<header>"));
}
