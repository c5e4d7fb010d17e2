//! Soft references
//!
//! A soft reference is a path plus the type the caller expects to find there.
//! Object and class references share one resolution contract, [`SoftReference`],
//! and differ only in how a resident entry is checked against the expected type.

use crate::assets::{Asset, ObjectPtr, SubclassOf};
use crate::error::PathError;
use crate::path::AssetPath;
use crate::streaming::StreamingManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Reference that can be resolved against a streaming manager
pub trait SoftReference: Clone + Send + Sync + 'static {
    /// What a successful resolution yields
    type Resolved: Clone + Send + 'static;

    fn path(&self) -> &AssetPath;

    /// Expected type name, for diagnostics
    fn type_name(&self) -> &'static str;

    /// Resolve against what is resident right now. No side effects.
    fn resolve(&self, manager: &dyn StreamingManager) -> Option<Self::Resolved>;

    fn is_null(&self) -> bool {
        self.path().is_null()
    }
}

/// Soft reference to an object of type `T`
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct SoftObjectPtr<T: Asset> {
    path: AssetPath,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T: Asset> SoftObjectPtr<T> {
    pub fn new(path: AssetPath) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Reference with the null path
    pub fn null() -> Self {
        Self::new(AssetPath::null())
    }

    pub fn parse(path: &str) -> Result<Self, PathError> {
        AssetPath::parse(path).map(Self::new)
    }
}

impl<T: Asset> SoftReference for SoftObjectPtr<T> {
    type Resolved = ObjectPtr<T>;

    fn path(&self) -> &AssetPath {
        &self.path
    }

    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn resolve(&self, manager: &dyn StreamingManager) -> Option<ObjectPtr<T>> {
        if self.path.is_null() {
            return None;
        }
        let object = manager.find_resident(&self.path)?.downcast_object::<T>()?;
        Some(ObjectPtr::new(&object))
    }
}

/// Soft reference to a class that is `T` or derives from `T`
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct SoftClassPtr<T: Asset> {
    path: AssetPath,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T: Asset> SoftClassPtr<T> {
    pub fn new(path: AssetPath) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn null() -> Self {
        Self::new(AssetPath::null())
    }

    pub fn parse(path: &str) -> Result<Self, PathError> {
        AssetPath::parse(path).map(Self::new)
    }
}

impl<T: Asset> SoftReference for SoftClassPtr<T> {
    type Resolved = SubclassOf<T>;

    fn path(&self) -> &AssetPath {
        &self.path
    }

    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn resolve(&self, manager: &dyn StreamingManager) -> Option<SubclassOf<T>> {
        if self.path.is_null() {
            return None;
        }
        let resident = manager.find_resident(&self.path)?;
        SubclassOf::new(resident.as_class()?)
    }
}

// The marker type never constrains these impls

macro_rules! impl_soft_ptr_traits {
    ($ptr:ident) => {
        impl<T: Asset> Clone for $ptr<T> {
            fn clone(&self) -> Self {
                Self::new(self.path.clone())
            }
        }

        impl<T: Asset> Default for $ptr<T> {
            fn default() -> Self {
                Self::null()
            }
        }

        impl<T: Asset> PartialEq for $ptr<T> {
            fn eq(&self, other: &Self) -> bool {
                self.path == other.path
            }
        }

        impl<T: Asset> Eq for $ptr<T> {}

        impl<T: Asset> Hash for $ptr<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.path.hash(state);
            }
        }

        impl<T: Asset> From<AssetPath> for $ptr<T> {
            fn from(path: AssetPath) -> Self {
                Self::new(path)
            }
        }

        impl<T: Asset> fmt::Display for $ptr<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.path, f)
            }
        }

        impl<T: Asset> fmt::Debug for $ptr<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>({})", stringify!($ptr), T::type_name(), self.path)
            }
        }
    };
}

impl_soft_ptr_traits!(SoftObjectPtr);
impl_soft_ptr_traits!(SoftClassPtr);
