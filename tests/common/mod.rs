#![allow(dead_code)]

use parking_lot::Mutex;
use soft_asset_loader::{
    Asset, AssetLoader, AssetPath, Diagnostics, LoadDiagnostic, LoaderConfig,
    ManualStreamingManager,
};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct Widget {
    pub name: &'static str,
}

impl Asset for Widget {}

#[derive(Debug)]
pub struct Texture;

impl Asset for Texture {}

/// Diagnostics sink that keeps every report
#[derive(Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<LoadDiagnostic>>,
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<LoadDiagnostic> {
        self.reports.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.reports.lock().len()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, diagnostic: &LoadDiagnostic) {
        self.reports.lock().push(diagnostic.clone());
    }
}

pub struct Fixture {
    pub manager: Arc<ManualStreamingManager>,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub loader: AssetLoader,
}

pub fn fixture() -> Fixture {
    fixture_with(LoaderConfig::default())
}

pub fn fixture_with(config: LoaderConfig) -> Fixture {
    let manager = Arc::new(ManualStreamingManager::new());
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let loader =
        AssetLoader::with_config(manager.clone(), config).with_diagnostics(diagnostics.clone());
    Fixture {
        manager,
        diagnostics,
        loader,
    }
}

pub fn path(s: &str) -> AssetPath {
    AssetPath::parse(s).expect("valid test path")
}
