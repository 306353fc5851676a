use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://timesheet.db?mode=rwc";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Extra mount point for the timesheet routes, e.g. `/api`.
    #[serde(default)]
    pub legacy_api_prefix: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4), legacy_api_prefix: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// `CONFIG_PATH`, falling back to `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise built purely from environment variables.
    pub fn load_or_env() -> Result<Self> {
        Self::load_from_path_or_env(&config_path())
    }

    /// Only a missing file falls back to the environment; unreadable or
    /// malformed files are errors.
    pub fn load_from_path_or_env(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => Self::from_env(),
            Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`, `API_PREFIX`, `DATABASE_URL`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(cfg.server.worker_threads);
        cfg.server.legacy_api_prefix = std::env::var("API_PREFIX").ok();
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        self.legacy_api_prefix = self.legacy_api_prefix.take().and_then(|p| normalize_prefix(&p));
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `api/` -> `/api`; empty or `/` means no prefix.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

impl DatabaseConfig {
    /// Config for a private in-memory SQLite database.
    pub fn in_memory() -> Self {
        Self { url: "sqlite::memory:".into(), max_connections: 1, min_connections: 1, ..Self::default() }
    }

    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.is_sqlite() && self.url.contains(":memory:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:") || lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let mut cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            worker_threads = 2
            legacy_api_prefix = "api/"

            [database]
            url = "sqlite://data/timesheet.db?mode=rwc"
            max_connections = 5
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.server.legacy_api_prefix.as_deref(), Some("/api"));
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.min_connections, 1);
        assert!(cfg.database.is_sqlite());
    }

    #[test]
    fn empty_sections_use_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert!(cfg.database.url.is_empty());
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn rejects_unknown_scheme() {
        let db = DatabaseConfig { url: "mysql://localhost/db".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/db".into(),
            max_connections: 1,
            min_connections: 3,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.database = DatabaseConfig::in_memory();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn in_memory_is_single_connection() {
        let db = DatabaseConfig::in_memory();
        assert!(db.is_in_memory());
        assert_eq!(db.max_connections, 1);
        db.validate().unwrap();
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("timesheet-config-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config("malformed", "[server]\nport = \"not a number\"\n");
        let result = AppConfig::load_from_path_or_env(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to load config file"));
    }

    #[test]
    fn valid_file_is_loaded() {
        let path = temp_config("valid", "[server]\nhost = \"0.0.0.0\"\nport = 8081\n\n[database]\nurl = \"sqlite::memory:\"\n");
        let result = AppConfig::load_from_path_or_env(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        let cfg = result.unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8081");
        assert!(cfg.database.is_in_memory());
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("timesheet-config-{}-absent.toml", std::process::id()));
        let cfg = AppConfig::load_from_path_or_env(path.to_str().unwrap()).unwrap();
        assert!(!cfg.database.url.is_empty());
        assert_ne!(cfg.server.port, 0);
    }

    #[test]
    fn blank_prefix_is_dropped() {
        assert_eq!(normalize_prefix("/"), None);
        assert_eq!(normalize_prefix(" "), None);
        assert_eq!(normalize_prefix("/api"), Some("/api".into()));
    }
}
