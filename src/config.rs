use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://developer.trimet.org/ws/v2/vehicles";
const DEFAULT_STYLE_URL: &str = "https://tiles-st.trimet.org/styles/rtp/style.json";
const DEFAULT_LOG_LEVEL: &str = "transit_relay=info,tower_http=info";
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamSection,
    pub tileserver: TileserverSection,
    pub cors: CorsSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Environment keys use the `RELAY_` prefix and `__` between sections, e.g.
    /// `RELAY_UPSTREAM__APP_ID`.
    pub fn load() -> Result<Self> {
        let config_path = env::var("RELAY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(config_path)
    }

    /// Load configuration from the given file (if it exists) and environment.
    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RELAY")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = DEFAULT_LOG_LEVEL.to_string();
        }

        Ok(config)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.app_id.trim().is_empty() {
            bail!("upstream.app_id must be specified (RELAY_UPSTREAM__APP_ID)");
        }

        let base = self.upstream.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            bail!("upstream.base_url must be an http(s) URL, got '{}'", base);
        }
        reqwest::Url::parse(base)
            .with_context(|| format!("upstream.base_url is not a valid URL: '{}'", base))?;

        if self.upstream.timeout_secs == 0 {
            bail!("upstream.timeout_secs must be greater than zero");
        }
        if self.upstream.connect_timeout_secs == 0 {
            bail!("upstream.connect_timeout_secs must be greater than zero");
        }

        if self.tileserver.style_url.trim().is_empty() {
            bail!("tileserver.style_url must not be empty");
        }

        self.cors.origins()?;

        Ok(())
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
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamSection {
    pub base_url: String,
    pub app_id: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub has_trip_id: bool,
}

impl UpstreamSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            app_id: String::new(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            has_trip_id: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TileserverSection {
    pub style_url: String,
}

impl Default for TileserverSection {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub allowed_origins: Vec<String>,
}

impl CorsSection {
    /// Parse the configured origins into header values.
    pub fn origins(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("invalid CORS origin: '{}'", origin))
            })
            .collect()
    }
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
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
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
