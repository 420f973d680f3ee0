use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("fetch-links/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the HTTP client used to fetch pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert!(config.user_agent.starts_with("fetch-links/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = FetchConfig::default()
            .with_user_agent("crawler-test/1.0")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.user_agent, "crawler-test/1.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
