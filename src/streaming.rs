//! Streaming manager contract
//!
//! The streaming manager owns disk I/O, residency and reference counting. The
//! loader only asks two things of it: what is resident right now, and to call
//! back once a load request for a path has finished.

use crate::assets::{Asset, Class};
use crate::path::AssetPath;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// One-shot handler passed with a load request.
///
/// Carries no success flag: the receiver re-queries residency.
pub type LoadCompletion = Box<dyn FnOnce() + Send + 'static>;

/// Entry held in the manager's store
#[derive(Clone)]
pub enum ResidentAsset {
    Object(Arc<dyn Any + Send + Sync>),
    Class(Arc<Class>),
}

impl ResidentAsset {
    pub fn object<T: Asset>(object: Arc<T>) -> Self {
        ResidentAsset::Object(object)
    }

    pub fn class(class: Arc<Class>) -> Self {
        ResidentAsset::Class(class)
    }

    /// Typed view of an object entry. `None` for classes and other types.
    pub fn downcast_object<T: Asset>(&self) -> Option<Arc<T>> {
        match self {
            ResidentAsset::Object(object) => object.clone().downcast::<T>().ok(),
            ResidentAsset::Class(_) => None,
        }
    }

    pub fn as_class(&self) -> Option<&Arc<Class>> {
        match self {
            ResidentAsset::Class(class) => Some(class),
            ResidentAsset::Object(_) => None,
        }
    }
}

impl fmt::Debug for ResidentAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidentAsset::Object(_) => f.write_str("ResidentAsset::Object(..)"),
            ResidentAsset::Class(class) => write!(f, "ResidentAsset::Class({})", class.name()),
        }
    }
}

/// Engine subsystem that schedules asset loads
pub trait StreamingManager: Send + Sync {
    /// Schedule a load of `path`.
    ///
    /// `on_complete` must be invoked exactly once, whether the load succeeded or not,
    /// from whatever thread the manager dispatches completions on.
    fn request_async_load(&self, path: &AssetPath, on_complete: LoadCompletion);

    /// Currently resident entry for `path`. Must not have side effects.
    fn find_resident(&self, path: &AssetPath) -> Option<ResidentAsset>;
}
