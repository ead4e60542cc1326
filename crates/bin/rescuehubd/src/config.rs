//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `rescuehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;
use std::net::{IpAddr, UdpSocket};
use std::str::FromStr;

use rescuehub_adapter_http_axum::cors::CorsSettings;
use serde::Deserialize;

/// Origins allowed in development when none are configured.
const DEV_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:3001",
];

/// Port of the browser UI, used for the local-network origin in development.
const UI_PORT: u16 = 3000;

/// The only database a test run may use.
const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "info,tower_http=debug",
            Self::Production => "warn",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Validation(format!(
                "unknown environment {other:?}"
            ))),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment; drives logging and CORS defaults.
    pub environment: Environment,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cross-origin policy.
    pub cors: CorsConfig,
    /// Demo catalogue toggle.
    pub demo: DemoConfig,
    /// Test run: only the in-memory database is accepted.
    pub testing: bool,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax). Defaults depend on the environment.
    pub filter: Option<String>,
}

/// CORS configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API.
    pub allowed_origins: Vec<String>,
    /// Whether credentials may be sent cross-origin.
    pub allow_credentials: bool,
}

/// Demo catalogue configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed a small catalogue when the database is empty.
    pub enabled: bool,
}

impl Config {
    /// Load configuration from `rescuehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rescuehub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("RESCUEHUB_ENV").or_else(|| var("ENVIRONMENT")) {
            self.environment = val.parse()?;
        }
        if let Some(val) = var("RESCUEHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("RESCUEHUB_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("RESCUEHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("TESTING") {
            self.testing = parse_flag("TESTING", &val)?;
        }
        match var("RESCUEHUB_DATABASE_URL").or_else(|| var("DATABASE_URL")) {
            Some(val) => self.database.url = val,
            None if self.testing && self.database.url == DatabaseConfig::default().url => {
                self.database.url = TEST_DATABASE_URL.to_string();
            }
            None => {}
        }
        if let Some(val) = var("LOG_LEVEL") {
            self.logging.filter = Some(level_filter(&val)?.to_string());
        }
        if let Some(val) = var("RESCUEHUB_LOG") {
            self.logging.filter = Some(val);
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = Some(val);
        }
        if let Some(val) = var("ALLOWED_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(val) = var("CORS_ALLOW_CREDENTIALS") {
            self.cors.allow_credentials = parse_flag("CORS_ALLOW_CREDENTIALS", &val)?;
        }
        if let Some(val) = var("RESCUEHUB_DEMO") {
            self.demo.enabled = parse_flag("RESCUEHUB_DEMO", &val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.testing && self.database.url != TEST_DATABASE_URL {
            return Err(ConfigError::Validation(format!(
                "testing requires the {TEST_DATABASE_URL} database, got {:?}",
                self.database.url
            )));
        }
        if self.environment.is_production() && self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "allowed origins must be set explicitly in production".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// The tracing filter directive: the configured one, or `info` in
    /// development and `warn` in production.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.logging
            .filter
            .as_deref()
            .unwrap_or_else(|| self.environment.default_log_filter())
    }

    /// Resolve the CORS policy.
    ///
    /// Origins without an `http://` or `https://` scheme are dropped with an
    /// error log. Plain-HTTP origins in production are kept but warned about.
    /// In development the UI's address on the local network is allowed too,
    /// so the site can be opened from another device.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when no usable origin remains.
    pub fn cors_settings(&self) -> Result<CorsSettings, ConfigError> {
        let network_host = (!self.environment.is_production())
            .then(|| local_ip().map_or_else(|| "localhost".to_string(), |ip| ip.to_string()));
        self.resolve_cors(network_host.as_deref())
    }

    fn resolve_cors(&self, network_host: Option<&str>) -> Result<CorsSettings, ConfigError> {
        let strict = self.environment.is_production();
        let configured: Vec<String> = if self.cors.allowed_origins.is_empty() && !strict {
            DEV_ORIGINS.iter().map(ToString::to_string).collect()
        } else {
            self.cors.allowed_origins.clone()
        };

        let mut allowed_origins: Vec<String> = configured
            .into_iter()
            .filter(|origin| {
                let valid = origin.starts_with("http://") || origin.starts_with("https://");
                if !valid {
                    tracing::error!(%origin, "ignoring CORS origin without http(s) scheme");
                }
                valid
            })
            .inspect(|origin| {
                if strict && origin.starts_with("http://") {
                    tracing::warn!(%origin, "insecure HTTP origin allowed in production");
                }
            })
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "no valid CORS origin configured".to_string(),
            ));
        }
        if let Some(host) = network_host {
            let network_origin = format!("http://{host}:{UI_PORT}");
            if !allowed_origins.contains(&network_origin) {
                tracing::info!(origin = %network_origin, "allowing local network origin");
                allowed_origins.push(network_origin);
            }
        }
        Ok(CorsSettings {
            allowed_origins,
            allow_credentials: self.cors.allow_credentials,
            strict,
        })
    }
}

/// Address of the interface that routes to the internet.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// Map a conventional level name (`DEBUG`, `INFO`, `WARNING`, ...) to a
/// tracing filter directive.
fn level_filter(value: &str) -> Result<&'static str, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" | "critical" => Ok("error"),
        other => Err(ConfigError::Validation(format!(
            "LOG_LEVEL must be a log level, got {other:?}"
        ))),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Validation(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:rescuehub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
