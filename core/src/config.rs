//! Transport configuration.
//!
//! Deadlines live here rather than on each call: a caller that needs one sets
//! it once before building the client.

use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Upper bound on a whole request, connect through body read. `None`
    /// waits indefinitely.
    pub timeout: Option<Duration>,
    /// Overrides ureq's default `User-Agent` header.
    pub user_agent: Option<String>,
    /// Largest response body `execute` will buffer. `None` reads the whole
    /// body however large it is.
    pub max_body_bytes: Option<u64>,
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }
}
