//! Page rendering.
//!
//! A page is rendered from a *template set*: the base layout, the shared
//! partials and the page template, compiled together. Sets are built from
//! disk on demand and, when caching is enabled, kept in a
//! [`TemplateCache`](crate::cache::TemplateCache) for later requests.

pub mod builder;
pub mod data;
pub mod renderer;

pub use builder::{validate_name, TemplateSetBuilder};
pub use data::TemplateData;
pub use renderer::Renderer;
