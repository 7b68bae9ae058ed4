// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: postgres and in-memory adapters
// - presentation: HTTP handlers and routing
// - application: link graph, suggestions, graph interaction, ui state
// - domain: core models and pure rules

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
