use std::time::Duration;

/// Page object configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BO_URL | http://localhost/admin-dev/ | Back-office base URL |
/// | WEBDRIVER_URL | http://localhost:4444 | WebDriver endpoint |
/// | HEADLESS | true | Run the browser without a window |
/// | SELECTOR_TIMEOUT_MS | 10000 | Default wait for a selector (ms) |
/// | NAVIGATION_TIMEOUT_MS | 30000 | Default wait for a navigation (ms) |
/// | POLL_INTERVAL_MS | 100 | Poll interval of every wait (ms) |
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub bo_url: String,
    pub webdriver_url: String,
    pub headless: bool,
    pub selector_timeout_ms: u64,
    pub navigation_timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl PageConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bo_url: std::env::var("BO_URL")
                .unwrap_or_else(|_| "http://localhost/admin-dev/".into()),
            webdriver_url: std::env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| "http://localhost:4444".into()),
            headless: env_parse("HEADLESS", true),
            selector_timeout_ms: env_parse("SELECTOR_TIMEOUT_MS", 10_000),
            navigation_timeout_ms: env_parse("NAVIGATION_TIMEOUT_MS", 30_000),
            poll_interval_ms: env_parse("POLL_INTERVAL_MS", 100),
        }
    }

    /// Absolute URL of a back-office page given relative to `bo_url`
    pub fn bo_page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.bo_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn selector_timeout(&self) -> Duration {
        Duration::from_millis(self.selector_timeout_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
