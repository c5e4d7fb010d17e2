//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use soft_asset_loader::prelude::*;
//! ```

pub use crate::assets::{Asset, Class, ObjectPtr, SubclassOf};
pub use crate::binding::bind_weak;
pub use crate::config::{LoaderConfig, NotifyPolicy};
pub use crate::future::LoadFuture;
pub use crate::load_soft_async;
pub use crate::loader::AssetLoader;
pub use crate::path::AssetPath;
pub use crate::reference::{SoftClassPtr, SoftObjectPtr, SoftReference};
pub use crate::streaming::{ResidentAsset, StreamingManager};
