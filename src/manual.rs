//! Manually driven streaming manager
//!
//! Holds resident entries in memory and queues load requests until
//! [`ManualStreamingManager::pump`] is called. Entries can be *staged*: they
//! become resident when a request for their path completes, which stands in for
//! the disk read of a real manager. There is no eviction, prioritisation or
//! reference counting.

use crate::assets::{Asset, Class};
use crate::path::AssetPath;
use crate::streaming::{LoadCompletion, ResidentAsset, StreamingManager};
use ahash::AHashMap;
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct PendingLoad {
    path: AssetPath,
    on_complete: LoadCompletion,
}

/// In-process [`StreamingManager`] completed by explicit pumping
pub struct ManualStreamingManager {
    resident: RwLock<AHashMap<AssetPath, ResidentAsset>>,
    staged: RwLock<AHashMap<AssetPath, ResidentAsset>>,
    pending_tx: Sender<PendingLoad>,
    pending_rx: Receiver<PendingLoad>,
    requests: AtomicUsize,
}

impl ManualStreamingManager {
    pub fn new() -> Self {
        let (pending_tx, pending_rx) = channel::unbounded();
        Self {
            resident: RwLock::new(AHashMap::new()),
            staged: RwLock::new(AHashMap::new()),
            pending_tx,
            pending_rx,
            requests: AtomicUsize::new(0),
        }
    }

    /// Make `asset` resident at `path` immediately
    pub fn insert(&self, path: AssetPath, asset: ResidentAsset) -> Option<ResidentAsset> {
        self.resident.write().insert(path, asset)
    }

    pub fn insert_object<T: Asset>(&self, path: AssetPath, object: Arc<T>) {
        self.insert(path, ResidentAsset::object(object));
    }

    pub fn insert_class(&self, path: AssetPath, class: Arc<Class>) {
        self.insert(path, ResidentAsset::class(class));
    }

    /// Make `asset` resident once a load request for `path` completes
    pub fn stage(&self, path: AssetPath, asset: ResidentAsset) {
        self.staged.write().insert(path, asset);
    }

    pub fn stage_object<T: Asset>(&self, path: AssetPath, object: Arc<T>) {
        self.stage(path, ResidentAsset::object(object));
    }

    pub fn stage_class(&self, path: AssetPath, class: Arc<Class>) {
        self.stage(path, ResidentAsset::class(class));
    }

    /// Drop the resident entry for `path`
    pub fn remove(&self, path: &AssetPath) -> Option<ResidentAsset> {
        self.resident.write().remove(path)
    }

    pub fn is_resident(&self, path: &AssetPath) -> bool {
        self.resident.read().contains_key(path)
    }

    pub fn resident_count(&self) -> usize {
        self.resident.read().len()
    }

    /// Total load requests received
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// Requests waiting for [`ManualStreamingManager::pump`]
    pub fn pending_count(&self) -> usize {
        self.pending_rx.len()
    }

    /// Complete the oldest pending request. Returns false if none was pending.
    pub fn pump_one(&self) -> bool {
        match self.pending_rx.try_recv() {
            Ok(pending) => {
                self.complete(pending);
                true
            }
            Err(_) => false,
        }
    }

    /// Complete requests until none are pending, including ones queued by
    /// completion handlers while pumping. Returns how many completed.
    pub fn pump(&self) -> usize {
        let mut completed = 0;
        while self.pump_one() {
            completed += 1;
        }
        completed
    }

    fn complete(&self, pending: PendingLoad) {
        let staged = self.staged.write().remove(&pending.path);
        if let Some(asset) = staged {
            self.resident.write().insert(pending.path.clone(), asset);
        }
        tracing::trace!(target: "soft_asset_loader::manual", path = %pending.path, "completing load");
        // No lock is held while the handler runs
        (pending.on_complete)();
    }
}

impl Default for ManualStreamingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingManager for ManualStreamingManager {
    fn request_async_load(&self, path: &AssetPath, on_complete: LoadCompletion) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let pending = PendingLoad {
            path: path.clone(),
            on_complete,
        };
        // The receiver lives as long as `self`, so the send cannot fail
        let _ = self.pending_tx.send(pending);
    }

    fn find_resident(&self, path: &AssetPath) -> Option<ResidentAsset> {
        self.resident.read().get(path).cloned()
    }
}
