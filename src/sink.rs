//! Completion sinks
//!
//! A sink receives the outcome of one resolution. Both implementations consume
//! themselves on completion, so a sink can complete at most once.

use crate::config::NotifyPolicy;
use crate::future::Promise;

/// Single-use target for a resolution outcome
pub trait CompletionSink<V>: Send + 'static {
    /// Deliver the outcome. `None` means the reference did not resolve.
    fn complete(self, value: Option<V>);
}

impl<V: Send + 'static> CompletionSink<V> for Promise<Option<V>> {
    fn complete(self, value: Option<V>) {
        self.set_value(value);
    }
}

/// Callback sink that honours a [`NotifyPolicy`]
pub struct CallbackSink<F> {
    callback: F,
    policy: NotifyPolicy,
}

impl<F> CallbackSink<F> {
    pub fn new(callback: F, policy: NotifyPolicy) -> Self {
        Self { callback, policy }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }
}

impl<V, F> CompletionSink<V> for CallbackSink<F>
where
    F: FnOnce(Option<V>) + Send + 'static,
{
    fn complete(self, value: Option<V>) {
        match (self.policy, value) {
            (NotifyPolicy::SuccessOnly, None) => {
                tracing::trace!(target: "soft_asset_loader", "load failed, callback suppressed");
            }
            (_, value) => (self.callback)(value),
        }
    }
}
