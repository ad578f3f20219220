//! Configuration validation.

use super::types::ServerConfig;
use crate::render::validate_name;
use lantern_common_log::{LogFormat, LogLevel};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    #[error("Invalid request timeout: {0}s")]
    InvalidTimeout(u64),

    #[error("Template directory not configured")]
    EmptyTemplateDir,

    #[error("Template directory does not exist: {0}")]
    MissingTemplateDir(PathBuf),

    #[error("Invalid template name in {field}: {name:?}")]
    InvalidTemplateName { field: &'static str, name: String },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),
}

/// Validate server configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.port == 0 {
        errors.push(ConfigError::InvalidPort(0));
    }

    // TimeoutLayer would answer every request with 408
    if config.server.request_timeout_secs == 0 {
        errors.push(ConfigError::InvalidTimeout(0));
    }

    let templates = &config.templates;
    if templates.dir.as_os_str().is_empty() {
        errors.push(ConfigError::EmptyTemplateDir);
    } else if !templates.dir.is_dir() {
        errors.push(ConfigError::MissingTemplateDir(templates.dir.clone()));
    }

    let named = std::iter::once(("layout", &templates.layout))
        .chain(templates.partials.iter().map(|p| ("partials", p)))
        .chain(templates.preload.iter().map(|p| ("preload", p)));
    for (field, name) in named {
        if validate_name(name).is_err() {
            errors.push(ConfigError::InvalidTemplateName {
                field,
                name: name.clone(),
            });
        }
    }

    if LogLevel::parse(&config.logging.level).is_none() {
        errors.push(ConfigError::InvalidLogLevel(config.logging.level.clone()));
    }

    if LogFormat::parse(&config.logging.format).is_none() {
        errors.push(ConfigError::InvalidLogFormat(config.logging.format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
