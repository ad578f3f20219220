//! In-memory cache of compiled template sets.

pub mod memory;
pub mod stats;

pub use memory::TemplateCache;
pub use stats::CacheStats;
