//! Server configuration types.

use lantern_common_log::{LogConfig, LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration.
    #[serde(default)]
    pub server: ServerBindConfig,
    /// Template loading configuration.
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server binding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerBindConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerBindConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerBindConfig {
    /// `host:port` string handed to the listener; hostnames are resolved at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Template loading configuration.
///
/// Every page is compiled together with `layout` and `partials`, all
/// resolved relative to `dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Root directory holding the layout, partials and pages.
    #[serde(default = "default_template_dir")]
    pub dir: PathBuf,
    /// Base layout file.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Shared partials, compiled in order after the layout.
    #[serde(default = "default_partials")]
    pub partials: Vec<String>,
    /// Reuse compiled template sets between requests.
    #[serde(default = "default_true")]
    pub use_cache: bool,
    /// Pages compiled at startup.
    #[serde(default)]
    pub preload: Vec<String>,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("./templates")
}

fn default_layout() -> String {
    "base.layout.html".to_string()
}

fn default_partials() -> Vec<String> {
    vec![
        "partials/header.partial.html".to_string(),
        "partials/footer.partial.html".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
            layout: default_layout(),
            partials: default_partials(),
            use_cache: true,
            preload: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, compact or json).
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Convert into the logging crate's configuration.
    ///
    /// Unknown values fall back to the defaults; `validate_config` reports them.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: LogLevel::parse(&self.level).unwrap_or_default(),
            format: LogFormat::parse(&self.format).unwrap_or_default(),
            file_path: self.file.clone(),
            ..LogConfig::default()
        }
    }
}
