use crate::assets::Asset;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Runtime class descriptor
///
/// A class is either native (backed by a Rust type) or derived from a parent
/// class, the way authored classes extend engine classes. Soft class references
/// resolve against this chain.
pub struct Class {
    name: String,
    native: Option<TypeId>,
    parent: Option<Arc<Class>>,
}

impl Class {
    /// Class backed by the Rust type `T`
    pub fn native<T: Asset>() -> Self {
        Self {
            name: T::type_name().to_string(),
            native: Some(TypeId::of::<T>()),
            parent: None,
        }
    }

    /// Native class for `T` that extends `parent`
    pub fn native_derived<T: Asset>(parent: Arc<Class>) -> Self {
        Self {
            name: T::type_name().to_string(),
            native: Some(TypeId::of::<T>()),
            parent: Some(parent),
        }
    }

    /// Authored class extending `parent`
    pub fn derived(name: impl Into<String>, parent: Arc<Class>) -> Self {
        Self {
            name: name.into(),
            native: None,
            parent: Some(parent),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Class>> {
        self.parent.as_ref()
    }

    /// True if this class is `T` or inherits from it
    pub fn is_child_of<T: Asset>(&self) -> bool {
        let wanted = TypeId::of::<T>();
        let mut current = Some(self);
        while let Some(class) = current {
            if class.native == Some(wanted) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .finish()
    }
}
