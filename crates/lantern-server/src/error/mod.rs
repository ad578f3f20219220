//! Error handling for the Lantern server.

pub mod response;
pub mod types;

pub use types::{RenderError, RenderResult};
