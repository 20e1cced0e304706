//! Trivia backend library modules.

pub mod api;
pub mod doc;
pub mod domain;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
