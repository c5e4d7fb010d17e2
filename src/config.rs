//! Loader configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How callback sinks treat a failed resolution.
///
/// Futures are always satisfied, with `None` on failure. Callbacks either receive
/// `None` as well, or are not invoked at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Invoke the callback on success and on failure
    #[default]
    Always,
    /// Invoke the callback only with a resolved value
    SuccessOnly,
}

/// Settings for an [`AssetLoader`](crate::loader::AssetLoader)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub notify_policy: NotifyPolicy,
    /// Emit debug events for every request sent to the streaming manager
    pub trace_requests: bool,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notify_policy(mut self, policy: NotifyPolicy) -> Self {
        self.notify_policy = policy;
        self
    }

    pub fn with_trace_requests(mut self, enabled: bool) -> Self {
        self.trace_requests = enabled;
        self
    }

    /// Read a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
