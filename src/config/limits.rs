//! Per-connection limits configuration.

use rendezvous_proto::DEFAULT_MAX_LINE;
use serde::Deserialize;
use std::time::Duration;

/// Smallest accepted line capacity. Every fixed reply fits in it.
pub const MIN_LINE: usize = 64;

/// Per-connection limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Line capacity in bytes for requests, replies and relays (default: 1024).
    /// Longer requests close the connection; longer replies are truncated.
    #[serde(default = "default_max_line")]
    pub max_line: usize,
    /// Seconds without a complete request before the connection is closed.
    /// 0 disables the timeout (default).
    #[serde(default)]
    pub idle_timeout_secs: u64,
}

impl LimitsConfig {
    /// Idle timeout, if enabled.
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line: default_max_line(),
            idle_timeout_secs: 0,
        }
    }
}

fn default_max_line() -> usize {
    DEFAULT_MAX_LINE
}
