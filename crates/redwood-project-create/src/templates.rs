/*
 * templates.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Templates are embedded at compile time via `include_str!()`.
 */

/// `.redwood.yaml` template.
pub const CONFIG: &str = include_str!("../resources/templates/redwood.yaml.jinja");

/// Files for the starter `index` view.
pub mod starter {
    /// Page template, copied as-is.
    pub const INDEX_PAGE: &str = include_str!("../resources/templates/starter/index.template");

    /// Context data, rendered with the project title.
    pub const INDEX_CONTEXT: &str =
        include_str!("../resources/templates/starter/index.code.jinja");

    /// Layout template, copied as-is.
    pub const MAIN_LAYOUT: &str = include_str!("../resources/templates/starter/main.template");

    /// Partial template, copied as-is.
    pub const HEADER_PARTIAL: &str =
        include_str!("../resources/templates/starter/header.template");
}
