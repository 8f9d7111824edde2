/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template execution.
//!
//! Templates are evaluated with [minijinja](https://docs.rs/minijinja). Every
//! call builds a fresh environment, so nothing parsed in one render survives
//! into the next. Auto-escaping is off: values are injected as-is, and
//! escaping is the caller's concern.
//!
//! Undefined names render as empty text.

use minijinja::{AutoEscape, Environment};

use crate::value::Scope;

/// Evaluate `source` against `scope`.
///
/// `name` identifies the template in error messages (usually its path).
pub fn execute(name: &str, source: &str, scope: &Scope) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.render_named_str(name, source, scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_interpolation() {
        let scope = Scope::new().with("title", "Hello");
        let output = execute("t", "<h1>{{ title }}</h1>", &scope).unwrap();
        assert_eq!(output, "<h1>Hello</h1>");
    }

    #[test]
    fn test_control_structures() {
        let scope = Scope::new()
            .with("items", vec!["a", "b", "c"])
            .with("show", true);
        let source = "{% if show %}{% for item in items %}[{{ item }}]{% endfor %}{% endif %}";
        assert_eq!(execute("t", source, &scope).unwrap(), "[a][b][c]");
    }

    #[test]
    fn test_nested_fields() {
        let scope = Scope::new().with("author", Value::from(json!({"name": "Ada"})));
        assert_eq!(execute("t", "{{ author.name }}", &scope).unwrap(), "Ada");
    }

    #[test]
    fn test_no_html_escaping() {
        let scope = Scope::new().with("body", "<p>raw & unescaped</p>");
        assert_eq!(
            execute("page.html", "{{ body }}", &scope).unwrap(),
            "<p>raw & unescaped</p>"
        );
    }

    #[test]
    fn test_undefined_is_empty() {
        assert_eq!(execute("t", "[{{ missing }}]", &Scope::new()).unwrap(), "[]");
    }

    #[test]
    fn test_trailing_newline_kept() {
        assert_eq!(execute("t", "line\n", &Scope::new()).unwrap(), "line\n");
    }

    #[test]
    fn test_syntax_error() {
        assert!(execute("t", "{% if %}", &Scope::new()).is_err());
    }
}
