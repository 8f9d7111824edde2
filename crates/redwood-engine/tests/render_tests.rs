/*
 * render_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end render tests over temporary source trees.
 */

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use redwood_engine::{
    ComponentKind, ContextProvider, ContextRegistry, EngineError, RenderOptions, RenderRequest,
    Scope, Value, View, ViewEngine,
};
use serde_json::json;
use tempfile::TempDir;

/// Create a source root with every component directory and the given files.
fn site(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for kind in ComponentKind::ALL {
        std::fs::create_dir_all(dir.path().join(kind.default_directory())).unwrap();
    }
    for (path, content) in files {
        std::fs::write(dir.path().join(path), content).unwrap();
    }
    dir
}

#[derive(Default)]
struct HomeContext;

impl ContextProvider for HomeContext {
    fn context(&self) -> Value {
        Scope::new()
            .with("title", "Hello")
            .with("posts", vec!["first", "second"])
            .into()
    }
}

#[derive(Default)]
struct StringContext;

impl ContextProvider for StringContext {
    fn context(&self) -> Value {
        Value::from("not a scope")
    }
}

#[derive(Default)]
struct NothingContext;

impl ContextProvider for NothingContext {
    fn context(&self) -> Value {
        Value::Null
    }
}

#[test]
fn test_page_renders_context_bindings() {
    let dir = site(&[
        ("pages/home.template", "<h1>{{ title }}</h1>\n"),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    let html = engine.render("home").unwrap();
    assert_eq!(html, "<h1>Hello</h1>\n");
}

#[test]
fn test_page_with_loop() {
    let dir = site(&[
        (
            "pages/home.template",
            "{% for post in posts %}<li>{{ post }}</li>{% endfor %}",
        ),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    assert_eq!(
        engine.render("home").unwrap(),
        "<li>first</li><li>second</li>"
    );
}

#[test]
fn test_namespaced_page() {
    let dir = site(&[
        ("pages/homeblog.template", "blog: {{ title }}"),
        ("contexts/homeblog.code", ""),
    ]);

    let mut contexts = ContextRegistry::new();
    contexts.register_type::<HomeContext>("BlogHomeContext");
    let engine = ViewEngine::builder(dir.path())
        .contexts(contexts)
        .build()
        .unwrap();

    let html = engine
        .render(RenderRequest::page("home").with_namespace("blog"))
        .unwrap();
    assert_eq!(html, "blog: Hello");
}

#[test]
fn test_namespace_changes_expected_type_name() {
    let dir = site(&[
        ("pages/homeblog.template", "x"),
        ("contexts/homeblog.code", ""),
        ("pages/home.template", "x"),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let err = engine
        .render(RenderRequest::page("home").with_namespace("blog"))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ContextTypeNotFound { ref type_name, .. } if type_name == "BlogHomeContext"
    ));

    let err = engine.render("home").unwrap_err();
    assert!(matches!(
        err,
        EngineError::ContextTypeNotFound { ref type_name, .. } if type_name == "HomeContext"
    ));
}

#[test]
fn test_missing_page_never_loads_context() {
    let dir = site(&[("contexts/home.code", "title: Hello")]);

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut contexts = ContextRegistry::new();
    contexts.register_factory("HomeContext", move |_path: &Path| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(HomeContext) as Box<dyn ContextProvider>)
    });

    let engine = ViewEngine::builder(dir.path())
        .contexts(contexts)
        .build()
        .unwrap();

    let err = engine.render("home").unwrap_err();
    assert!(matches!(
        err,
        EngineError::ComponentNotFound {
            kind: ComponentKind::Page,
            ..
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_context_asset() {
    let dir = site(&[("pages/home.template", "x")]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    let err = engine.render("home").unwrap_err();
    assert!(matches!(
        err,
        EngineError::ComponentNotFound {
            kind: ComponentKind::Context,
            ..
        }
    ));
}

#[test]
fn test_string_context_is_invalid_binding() {
    let dir = site(&[
        ("pages/home.template", "{{ title }}"),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<StringContext>(&View::new("home"))
        .build()
        .unwrap();

    let err = engine.render("home").unwrap_err();
    match err {
        EngineError::InvalidContextBinding {
            type_name, found, ..
        } => {
            assert_eq!(type_name, "HomeContext");
            assert_eq!(found, "string");
        }
        other => panic!("Expected InvalidContextBinding, got {other:?}"),
    }
}

#[test]
fn test_null_context_is_invalid_binding() {
    let dir = site(&[
        ("pages/home.template", "{{ title }}"),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<NothingContext>(&View::new("home"))
        .build()
        .unwrap();

    let err = engine.render("home").unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidContextBinding { found: "null", .. }
    ));
}

#[test]
fn test_data_context() {
    let dir = site(&[
        ("pages/about.template", "{{ title }} by {{ author.name }}"),
        (
            "contexts/about.code",
            "title: About\nauthor:\n  name: Ada\n",
        ),
    ]);
    let mut contexts = ContextRegistry::new();
    contexts.register_data(&View::new("about"));
    let engine = ViewEngine::builder(dir.path())
        .contexts(contexts)
        .build()
        .unwrap();

    assert_eq!(engine.render("about").unwrap(), "About by Ada");
}

#[test]
fn test_data_context_list_is_invalid_binding() {
    let dir = site(&[
        ("pages/about.template", "{{ title }}"),
        ("contexts/about.code", "- one\n- two\n"),
    ]);
    let mut contexts = ContextRegistry::new();
    contexts.register_data(&View::new("about"));
    let engine = ViewEngine::builder(dir.path())
        .contexts(contexts)
        .build()
        .unwrap();

    let err = engine.render("about").unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidContextBinding { found: "list", .. }
    ));
}

#[test]
fn test_malformed_data_context() {
    let dir = site(&[
        ("pages/about.template", "{{ title }}"),
        ("contexts/about.code", "title: [unclosed"),
    ]);
    let mut contexts = ContextRegistry::new();
    contexts.register_data(&View::new("about"));
    let engine = ViewEngine::builder(dir.path())
        .contexts(contexts)
        .build()
        .unwrap();

    let err = engine.render("about").unwrap_err();
    assert!(matches!(err, EngineError::ContextConstruction { .. }));
}

#[test]
fn test_layout_wraps_page() {
    let dir = site(&[
        ("pages/home.template", "<h1>{{ title }}</h1>"),
        ("contexts/home.code", ""),
        (
            "layouts/main.template",
            "<title>{{ title }}</title><body>{{ content }}</body>",
        ),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    let html = engine
        .render(RenderRequest::page("home").with_layout("main"))
        .unwrap();
    assert_eq!(html, "<title>Hello</title><body><h1>Hello</h1></body>");
}

#[test]
fn test_missing_layout_is_not_substituted() {
    let dir = site(&[
        ("pages/home.template", "{{ title }}"),
        ("contexts/home.code", ""),
        ("layouts/default.template", "{{ content }}"),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    let err = engine
        .render(RenderRequest::page("home").with_layout("main"))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ComponentNotFound {
            kind: ComponentKind::Layout,
            ..
        }
    ));
}

#[test]
fn test_partial_is_pass_through() {
    let dir = site(&[("partials/nav.template", "<nav>{{ active }}</nav>")]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let html = engine
        .render(RenderRequest::partial("nav").with_locals(Scope::new().with("active", "home")))
        .unwrap();
    assert_eq!(html, "<nav>{{ active }}</nav>");
}

#[test]
fn test_namespaced_partial() {
    let dir = site(&[("partials/navblog.template", "<nav>blog</nav>")]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let html = engine
        .render_json(&json!({"partial": "nav", "namespace": "blog"}))
        .unwrap();
    assert_eq!(html, "<nav>blog</nav>");
}

#[test]
fn test_ambiguous_options() {
    let dir = site(&[]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let err = engine.render_options(RenderOptions::default()).unwrap_err();
    assert!(matches!(err, EngineError::AmbiguousRenderMode { .. }));

    let err = engine
        .render_options(RenderOptions {
            page: Some("home".to_string()),
            partial: Some("nav".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, EngineError::AmbiguousRenderMode { .. }));
}

#[test]
fn test_invalid_render_options() {
    let dir = site(&[]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let err = engine.render_json(&json!(12)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRenderOptions { .. }));
}

#[test]
fn test_blank_view_name() {
    let dir = site(&[]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let err = engine.render("  ").unwrap_err();
    assert!(matches!(err, EngineError::InvalidViewName { .. }));
}

#[test]
fn test_template_error_names_view() {
    let dir = site(&[
        ("pages/home.template", "{% for %}"),
        ("contexts/home.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .build()
        .unwrap();

    let err = engine.render("home").unwrap_err();
    match err {
        EngineError::TemplateExecution { view, path, .. } => {
            assert_eq!(view, "home");
            assert!(path.ends_with("pages/home.template"));
        }
        other => panic!("Expected TemplateExecution, got {other:?}"),
    }
}

#[test]
fn test_custom_directories_and_extensions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("views")).unwrap();
    std::fs::create_dir_all(dir.path().join("contexts")).unwrap();
    std::fs::write(dir.path().join("views/home.html"), "{{ title }}").unwrap();
    std::fs::write(dir.path().join("contexts/home.yaml"), "title: Custom").unwrap();

    let mut contexts = ContextRegistry::new();
    contexts.register_data(&View::new("home"));
    let engine = ViewEngine::builder(dir.path())
        .directory(ComponentKind::Page, "views")
        .extension(ComponentKind::Page, "html")
        .extension(ComponentKind::Context, "yaml")
        .contexts(contexts)
        .build()
        .unwrap();

    assert_eq!(engine.render("home").unwrap(), "Custom");
}

#[test]
fn test_load_components_empty_list() {
    let dir = site(&[]);
    let engine = ViewEngine::new(dir.path()).unwrap();

    let loaded = engine.load_components(&View::new(""), &[]).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_parallel_renders_share_engine() {
    let dir = site(&[
        ("pages/home.template", "<h1>{{ title }}</h1>"),
        ("contexts/home.code", ""),
        ("pages/homeblog.template", "<h2>{{ title }}</h2>"),
        ("contexts/homeblog.code", ""),
    ]);
    let engine = ViewEngine::builder(dir.path())
        .context::<HomeContext>(&View::new("home"))
        .context::<HomeContext>(&View::new("home").in_namespace("blog"))
        .build()
        .unwrap();

    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = &engine;
                s.spawn(move || {
                    let request = if i % 2 == 0 {
                        RenderRequest::page("home")
                    } else {
                        RenderRequest::page("home").with_namespace("blog")
                    };
                    engine.render(request).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, output) in outputs.iter().enumerate() {
        let expected = if i % 2 == 0 {
            "<h1>Hello</h1>"
        } else {
            "<h2>Hello</h2>"
        };
        assert_eq!(output, expected);
    }
}
