//! Failure reporting
//!
//! Failed resolutions are never returned as errors. They are reported here and
//! the caller sees `None`.

use crate::error::LoadError;

/// Log target used by [`TracingDiagnostics`]
pub const LOG_TARGET: &str = "soft_asset_loader";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One failure report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    pub severity: Severity,
    pub error: LoadError,
}

impl LoadDiagnostic {
    pub fn error(error: LoadError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }
}

/// Receiver of failure reports
pub trait Diagnostics: Send + Sync {
    fn report(&self, diagnostic: &LoadDiagnostic);
}

/// Forwards reports to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &LoadDiagnostic) {
        let asset_type = diagnostic.error.type_name();
        let asset = diagnostic.error.path().unwrap_or("");
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(target: LOG_TARGET, asset_type, asset, "{}", diagnostic.error)
            }
            Severity::Warning => {
                tracing::warn!(target: LOG_TARGET, asset_type, asset, "{}", diagnostic.error)
            }
        }
    }
}
