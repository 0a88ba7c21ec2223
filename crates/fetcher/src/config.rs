//! Configuration types for the fetcher

use std::time::Duration;

/// Configuration for fetch operations
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Connect/read timeout for the package request
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "fetcher/0.1.0".to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
