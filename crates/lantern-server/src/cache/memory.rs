//! Concurrent template cache.

use super::stats::CacheStats;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tera::Tera;
use tracing::debug;

/// Compiled template sets keyed by page name.
///
/// Entries never expire; they live until invalidated or the cache is cleared.
#[derive(Default)]
pub struct TemplateCache {
    entries: DashMap<String, Arc<Tera>>,
    stats: CacheStatsInner,
}

#[derive(Default)]
struct CacheStatsInner {
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a compiled set, counting the hit or miss.
    pub fn get(&self, name: &str) -> Option<Arc<Tera>> {
        match self.entries.get(name) {
            Some(entry) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!(template = name, "Template cache hit");
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                debug!(template = name, "Template cache miss");
                None
            }
        }
    }

    /// Store a compiled set, replacing any previous entry for `name`.
    pub fn insert(&self, name: impl Into<String>, template: Arc<Tera>) {
        let name = name.into();
        debug!(template = %name, "Template cached");
        self.entries.insert(name, template);
    }

    /// Drop one entry. Returns whether it was present.
    pub fn remove(&self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();
        debug!(template = name, removed, "Template cache remove");
        removed
    }

    /// Drop every entry, returning how many were removed.
    pub fn clear(&self) -> usize {
        let size = self.entries.len();
        self.entries.clear();
        debug!(removed = size, "Template cache cleared");
        size
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached page names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Count a compile from disk.
    pub fn record_build(&self) {
        self.stats.builds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.stats.hits.load(Ordering::Relaxed),
            misses: self.stats.misses.load(Ordering::Relaxed),
            builds: self.stats.builds.load(Ordering::Relaxed),
            size: self.entries.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(body: &str) -> Arc<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", body).unwrap();
        Arc::new(tera)
    }

    #[test]
    fn test_get_counts_hits_and_misses() {
        let cache = TemplateCache::new();
        assert!(cache.get("page.html").is_none());

        cache.insert("page.html", compiled("hello"));
        assert!(cache.get("page.html").is_some());
        assert!(cache.get("page.html").is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn test_insert_replaces_entry() {
        let cache = TemplateCache::new();
        cache.insert("page.html", compiled("one"));
        cache.insert("page.html", compiled("two"));

        let tera = cache.get("page.html").unwrap();
        let out = tera.render("page.html", &tera::Context::new()).unwrap();
        assert_eq!(out, "two");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = TemplateCache::new();
        cache.insert("b.html", compiled("b"));
        cache.insert("a.html", compiled("a"));
        assert_eq!(cache.names(), vec!["a.html".to_string(), "b.html".to_string()]);

        assert!(cache.remove("a.html"));
        assert!(!cache.remove("a.html"));
        assert!(!cache.contains("a.html"));

        assert_eq!(cache.clear(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(TemplateCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.insert(format!("page{i}.html"), compiled("x"));
                    cache.get(&format!("page{i}.html")).is_some()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 8);
    }
}
