use std::path::PathBuf;

/// Back-office server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | `<WORK_DIR>/database/shop.db` | SQLite database file |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Minimum log level |
/// | LOG_JSON | false | Emit JSON log lines |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown budget (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/shop HTTP_PORT=8080 cargo run -p back-office
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file
    pub database_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Minimum log level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Emit structured JSON logs
    pub log_json: bool,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Shutdown timeout (ms)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            default_database_path(&work_dir)
        });

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            work_dir,
        }
    }

    /// Override the work dir and port, keeping everything else from the environment
    ///
    /// Mostly used by tests. The database path follows the new work dir.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = default_database_path(&config.work_dir);
        config.http_port = http_port;
        config
    }

    /// Log directory under the work dir
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_database_path(work_dir: &str) -> String {
    PathBuf::from(work_dir)
        .join("database")
        .join("shop.db")
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_moves_database_under_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().to_string_lossy().into_owned();

        let config = Config::with_overrides(work_dir.clone(), 18080);

        assert_eq!(config.http_port, 18080);
        assert_eq!(config.work_dir, work_dir);
        assert!(config.database_path.starts_with(&work_dir));
        assert!(config.database_path.ends_with("shop.db"));
        assert_eq!(config.log_dir(), dir.path().join("logs"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp/shop", 3000);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".into();
        assert!(config.is_development());
    }
}
