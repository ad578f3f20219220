//! The page renderer: cache lookup, build on miss, execute.

use super::builder::{validate_name, TemplateSetBuilder};
use super::data::TemplateData;
use crate::cache::TemplateCache;
use crate::config::TemplateConfig;
use crate::error::{RenderError, RenderResult};
use axum::response::{Html, IntoResponse, Response};
use lantern_common_log::spans::{instrument_future, render_span};
use lantern_common_log::timed;
use std::sync::Arc;
use tera::Tera;
use tracing::info;

/// Renders pages by name, loading template sets from the cache or disk.
pub struct Renderer {
    builder: TemplateSetBuilder,
    cache: TemplateCache,
    use_cache: bool,
}

impl Renderer {
    pub fn new(builder: TemplateSetBuilder, use_cache: bool) -> Self {
        Self {
            builder,
            cache: TemplateCache::new(),
            use_cache,
        }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(TemplateSetBuilder::from_config(config), config.use_cache)
    }

    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    pub fn builder(&self) -> &TemplateSetBuilder {
        &self.builder
    }

    /// The compiled set for `name`.
    ///
    /// With caching enabled a cached set is reused; otherwise, or on a
    /// miss, the set is compiled from disk and (when caching) stored.
    pub async fn template_set(&self, name: &str) -> RenderResult<Arc<Tera>> {
        validate_name(name)?;

        if self.use_cache {
            if let Some(tera) = self.cache.get(name) {
                return Ok(tera);
            }
        }

        let tera = Arc::new(self.builder.build(name).await?);
        self.cache.record_build();
        info!(template = %name, "building template from disk");

        if self.use_cache {
            self.cache.insert(name, Arc::clone(&tera));
        }

        Ok(tera)
    }

    /// Render a page to a string. Missing data renders as empty data.
    pub async fn render_to_string(
        &self,
        name: &str,
        data: Option<TemplateData>,
    ) -> RenderResult<String> {
        let tera = self.template_set(name).await?;
        let context = data.unwrap_or_default().to_context()?;

        tera.render(name, &context)
            .map_err(|source| RenderError::Execute {
                name: name.to_string(),
                source,
            })
    }

    /// Render a page as an HTTP response.
    ///
    /// The page is rendered fully before anything is written, so a failure
    /// produces only the error response (logged, with the status from
    /// [`RenderError::status_code`]).
    pub async fn render(&self, name: &str, data: Option<TemplateData>) -> Response {
        let rendered = instrument_future(self.render_to_string(name, data), render_span(name)).await;

        match rendered {
            Ok(html) => Html(html).into_response(),
            Err(err) => err.into_response(),
        }
    }

    /// Compile pages ahead of the first request.
    ///
    /// Sets are only stored when caching is enabled, but every page is
    /// compiled either way so broken templates fail startup.
    pub async fn preload<S: AsRef<str>>(&self, names: &[S]) -> RenderResult<usize> {
        timed!("preload", self.build_all(names).await)?;

        info!(count = names.len(), cached = self.use_cache, "Preloaded templates");
        Ok(names.len())
    }

    async fn build_all<S: AsRef<str>>(&self, names: &[S]) -> RenderResult<()> {
        for name in names {
            let name = name.as_ref();
            let tera = Arc::new(self.builder.build(name).await?);
            self.cache.record_build();
            if self.use_cache {
                self.cache.insert(name, tera);
            }
        }
        Ok(())
    }

    /// Forget the cached set for `name`.
    pub fn invalidate(&self, name: &str) -> bool {
        self.cache.remove(name)
    }

    /// Forget every cached set.
    pub fn clear(&self) -> usize {
        self.cache.clear()
    }
}
