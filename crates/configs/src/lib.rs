use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backends: BackendsConfig,
    #[serde(default)]
    pub timeout: TimeoutConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            worker_threads: Some(4),
            log_format: default_log_format(),
        }
    }
}

/// Host/port of each downstream service.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendsConfig {
    #[serde(default = "default_product")]
    pub product: BackendEndpoint,
    #[serde(default = "default_recommendation")]
    pub recommendation: BackendEndpoint,
    #[serde(default = "default_review")]
    pub review: BackendEndpoint,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            recommendation: default_recommendation(),
            review: default_review(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BackendEndpoint {
    pub host: String,
    pub port: u16,
}

impl BackendEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    /// Base URL for a resource on this endpoint, e.g. `http://localhost:7001/product`.
    pub fn url(&self, resource: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, resource.trim_start_matches('/'))
    }

    fn override_from_env(&mut self, prefix: &str) {
        if let Ok(host) = std::env::var(format!("{prefix}_HOST")) {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = std::env::var(format!("{prefix}_PORT"))
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
        {
            self.port = port;
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("backends.{name}.host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("backends.{name}.port must be in 1..=65535"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_admin_addr")]
    pub addr: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { enabled: false, addr: default_admin_addr() }
    }
}

fn default_server_host() -> String { "127.0.0.1".to_string() }
fn default_server_port() -> u16 { 7000 }
fn default_log_format() -> String { "compact".to_string() }
fn default_product() -> BackendEndpoint { BackendEndpoint::new("localhost", 7001) }
fn default_recommendation() -> BackendEndpoint { BackendEndpoint::new("localhost", 7002) }
fn default_review() -> BackendEndpoint { BackendEndpoint::new("localhost", 7003) }
fn default_connect_timeout() -> u64 { 2_000 }
fn default_request_timeout() -> u64 { 5_000 }
fn default_admin_addr() -> String { "127.0.0.1:9188".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load the config file (defaults when it is missing), apply env overrides, validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.backends.override_from_env();
        self.backends.validate()?;
        self.timeout.validate()?;
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout.request_timeout_ms)
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl BackendsConfig {
    /// `PRODUCT_SERVICE_HOST`, `RECOMMENDATION_SERVICE_PORT`, ... take precedence over the file.
    pub fn override_from_env(&mut self) {
        self.product.override_from_env("PRODUCT_SERVICE");
        self.recommendation.override_from_env("RECOMMENDATION_SERVICE");
        self.review.override_from_env("REVIEW_SERVICE");
    }

    pub fn validate(&self) -> Result<()> {
        self.product.validate("product")?;
        self.recommendation.validate("recommendation")?;
        self.review.validate("review")?;
        Ok(())
    }
}

impl TimeoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_ms == 0 || self.request_timeout_ms == 0 {
            return Err(anyhow!("timeout values must be positive milliseconds"));
        }
        Ok(())
    }
}
