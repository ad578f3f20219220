//! Compiling template sets from disk.

use crate::config::TemplateConfig;
use crate::error::{RenderError, RenderResult};
use lantern_common_log::spans::{build_span, instrument_future};
use std::path::{Component, Path, PathBuf};
use tera::Tera;
use tracing::debug;

/// Check that a template name stays inside the template root.
///
/// Names are relative paths such as `home.page.html` or
/// `partials/header.partial.html`. Anything that could escape the root
/// (absolute paths, `..`, `.`, backslashes, NUL) is rejected before the
/// filesystem is touched.
pub fn validate_name(name: &str) -> RenderResult<()> {
    let invalid = || RenderError::InvalidName(name.to_string());

    if name.is_empty() || name.contains('\\') || name.contains('\0') {
        return Err(invalid());
    }

    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') {
        return Err(invalid());
    }

    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(invalid());
    }

    Ok(())
}

/// Builds the template set for a page: layout first, then the partials in
/// order, then the page itself.
#[derive(Debug, Clone)]
pub struct TemplateSetBuilder {
    root: PathBuf,
    layout: String,
    partials: Vec<String>,
}

impl TemplateSetBuilder {
    pub fn new(root: impl Into<PathBuf>, layout: impl Into<String>, partials: Vec<String>) -> Self {
        Self {
            root: root.into(),
            layout: layout.into(),
            partials,
        }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(&config.dir, &config.layout, config.partials.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Template names composing the set for `page`, in compile order.
    pub fn files_for(&self, page: &str) -> Vec<String> {
        let mut files = Vec::with_capacity(self.partials.len() + 2);
        files.push(self.layout.clone());
        files.extend(self.partials.iter().cloned());
        if !files.iter().any(|f| f == page) {
            files.push(page.to_string());
        }
        files
    }

    /// Read and compile the set for `page`.
    ///
    /// Each file is registered under its path relative to the root, so
    /// pages extend `"base.layout.html"` and include
    /// `"partials/header.partial.html"`.
    pub async fn build(&self, page: &str) -> RenderResult<Tera> {
        validate_name(page)?;

        let files = self.files_for(page);
        let span = build_span(page, files.len());

        instrument_future(self.compile(page, files), span).await
    }

    async fn compile(&self, page: &str, files: Vec<String>) -> RenderResult<Tera> {
        let mut sources = Vec::with_capacity(files.len());

        for file in files {
            let path = self.root.join(&file);
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(source) => {
                    if file == page && !is_file(&path).await {
                        return Err(RenderError::NotFound(page.to_string()));
                    }
                    return Err(RenderError::Io { path, source });
                }
            };
            debug!(file = %path.display(), bytes = content.len(), "Read template file");
            sources.push((file, content));
        }

        // Inheritance is resolved once every file is registered.
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)
            .map_err(|source| RenderError::Build {
                name: page.to_string(),
                source,
            })?;

        Ok(tera)
    }
}

/// A page path that is missing, a directory, or runs through a regular
/// file (ENOTDIR) is not a page.
async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
