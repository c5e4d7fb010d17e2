// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deferred-reference resolver
//!
//! [`AssetLoader`] turns a soft reference into its resolved form. Every call
//! runs the same three steps, whatever the reference kind and whatever the
//! completion style:
//!
//! 1. A null path fails immediately and is reported. The manager is not asked.
//! 2. A reference that already resolves completes immediately.
//! 3. Otherwise a load is requested. When the manager calls back, the reference
//!    is resolved again, since the load may have failed or produced something of
//!    another type.
//!
//! Short-circuit completions happen before the call returns. Asynchronous ones
//! happen on whatever thread the manager dispatches its completions on.

use crate::config::{LoaderConfig, NotifyPolicy};
use crate::diagnostics::{Diagnostics, LoadDiagnostic, TracingDiagnostics, LOG_TARGET};
use crate::error::{LoadError, Result};
use crate::future::{promise, LoadFuture};
use crate::reference::SoftReference;
use crate::sink::{CallbackSink, CompletionSink};
use crate::stats::{LoadStats, LoadStatsSnapshot};
use crate::streaming::StreamingManager;
use std::fmt;
use std::sync::Arc;

/// Resolves soft references through a [`StreamingManager`]
#[derive(Clone)]
pub struct AssetLoader {
    manager: Arc<dyn StreamingManager>,
    diagnostics: Arc<dyn Diagnostics>,
    config: LoaderConfig,
    stats: Arc<LoadStats>,
}

impl AssetLoader {
    /// Loader with the default configuration, reporting through `tracing`
    pub fn new(manager: Arc<dyn StreamingManager>) -> Self {
        Self::with_config(manager, LoaderConfig::default())
    }

    pub fn with_config(manager: Arc<dyn StreamingManager>, config: LoaderConfig) -> Self {
        Self {
            manager,
            diagnostics: Arc::new(TracingDiagnostics),
            config,
            stats: Arc::new(LoadStats::new()),
        }
    }

    /// Replace the failure report sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn manager(&self) -> &Arc<dyn StreamingManager> {
        &self.manager
    }

    pub fn stats(&self) -> LoadStatsSnapshot {
        self.stats.snapshot()
    }

    /// Resolve `reference`, delivering the outcome through a future.
    ///
    /// The future is always satisfied exactly once, with `None` on failure, as
    /// long as the manager honours its completion contract.
    pub fn load_async<R: SoftReference>(&self, reference: R) -> LoadFuture<Option<R::Resolved>> {
        let (promise, future) = promise();
        self.resolve_into(reference, promise);
        future
    }

    /// Resolve `reference`, delivering the outcome to `on_loaded`.
    ///
    /// Failures follow the configured [`NotifyPolicy`].
    pub fn load_async_with<R, F>(&self, reference: R, on_loaded: F)
    where
        R: SoftReference,
        F: FnOnce(Option<R::Resolved>) + Send + 'static,
    {
        self.load_async_with_policy(reference, self.config.notify_policy, on_loaded);
    }

    /// Like [`AssetLoader::load_async_with`] with an explicit policy for this call
    pub fn load_async_with_policy<R, F>(&self, reference: R, policy: NotifyPolicy, on_loaded: F)
    where
        R: SoftReference,
        F: FnOnce(Option<R::Resolved>) + Send + 'static,
    {
        self.resolve_into(reference, CallbackSink::new(on_loaded, policy));
    }

    /// Resolve against what is resident right now, without requesting a load
    /// or reporting anything.
    pub fn resolve_now<R: SoftReference>(&self, reference: &R) -> Result<R::Resolved> {
        if reference.is_null() {
            return Err(LoadError::InvalidReference {
                type_name: reference.type_name(),
            });
        }
        reference
            .resolve(self.manager.as_ref())
            .ok_or_else(|| LoadError::LoadFailure {
                type_name: reference.type_name(),
                path: reference.path().to_string(),
            })
    }

    /// Resolve `reference` into any completion sink
    pub fn resolve_into<R, S>(&self, reference: R, sink: S)
    where
        R: SoftReference,
        S: CompletionSink<R::Resolved>,
    {
        self.stats.record_request();

        if reference.is_null() {
            self.stats.record_invalid_reference();
            self.diagnostics
                .report(&LoadDiagnostic::error(LoadError::InvalidReference {
                    type_name: reference.type_name(),
                }));
            sink.complete(None);
            return;
        }

        if let Some(resolved) = reference.resolve(self.manager.as_ref()) {
            self.stats.record_resident_hit();
            if self.config.trace_requests {
                tracing::trace!(target: LOG_TARGET, asset = %reference.path(), "already resident");
            }
            sink.complete(Some(resolved));
            return;
        }

        self.stats.record_async_request();
        if self.config.trace_requests {
            tracing::debug!(
                target: LOG_TARGET,
                asset_type = reference.type_name(),
                asset = %reference.path(),
                "requesting async load"
            );
        }

        let path = reference.path().clone();
        let manager = Arc::downgrade(&self.manager);
        let diagnostics = self.diagnostics.clone();
        let stats = self.stats.clone();

        self.manager.request_async_load(
            &path,
            Box::new(move || {
                let resolved = manager
                    .upgrade()
                    .and_then(|manager| reference.resolve(manager.as_ref()));
                stats.record_async_outcome(resolved.is_some());

                if resolved.is_none() {
                    diagnostics.report(&LoadDiagnostic::error(LoadError::LoadFailure {
                        type_name: reference.type_name(),
                        path: reference.path().to_string(),
                    }));
                }
                sink.complete(resolved);
            }),
        );
    }
}

impl fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetLoader")
            .field("config", &self.config)
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
