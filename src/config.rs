use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

const ENV_PREFIX: &str = "ACTIVATION_PORTAL";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/v1";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Environment keys use `__` between sections, e.g.
    /// `ACTIVATION_PORTAL_BACKEND__BASE_URL`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let config: Self = settings.try_deserialize()?;

        Ok(config.normalized())
    }

    /// Load configuration from a single file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = settings.try_deserialize()?;

        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
        self
    }

    /// Validated backend base URL with any trailing slash removed.
    pub fn backend_url(&self) -> Result<String> {
        let raw = self.backend.base_url.trim();
        if raw.is_empty() {
            bail!("backend.base_url must be specified");
        }

        let parsed = Url::parse(raw).with_context(|| format!("invalid backend.base_url '{}'", raw))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "backend.base_url must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5173,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub base_url: String,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
