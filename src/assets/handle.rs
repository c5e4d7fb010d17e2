use crate::assets::{Asset, Class};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

/// Resolved object reference
///
/// Loaned from the streaming manager's store: it never keeps the object alive.
/// Use [`ObjectPtr::get`] to pin the object for the duration of a use.
pub struct ObjectPtr<T: Asset> {
    object: Weak<T>,
}

impl<T: Asset> ObjectPtr<T> {
    pub fn new(object: &Arc<T>) -> Self {
        Self {
            object: Arc::downgrade(object),
        }
    }

    /// Pin the object if the manager still holds it
    pub fn get(&self) -> Option<Arc<T>> {
        self.object.upgrade()
    }

    /// True while the manager still holds the object
    pub fn is_valid(&self) -> bool {
        self.object.strong_count() > 0
    }

    /// True if both pointers name the same object
    pub fn ptr_eq(&self, other: &ObjectPtr<T>) -> bool {
        Weak::ptr_eq(&self.object, &other.object)
    }

    /// True if this pointer names `object`
    pub fn points_to(&self, object: &Arc<T>) -> bool {
        std::ptr::eq(self.object.as_ptr(), Arc::as_ptr(object))
    }
}

impl<T: Asset> Clone for ObjectPtr<T> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
        }
    }
}

impl<T: Asset> fmt::Debug for ObjectPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPtr")
            .field("type", &T::type_name())
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Resolved class reference, known to be `T` or a subclass of `T`
pub struct SubclassOf<T: Asset> {
    class: Weak<Class>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Asset> SubclassOf<T> {
    /// Wrap `class` if it is `T` or derives from it
    pub fn new(class: &Arc<Class>) -> Option<Self> {
        if class.is_child_of::<T>() {
            Some(Self {
                class: Arc::downgrade(class),
                _marker: PhantomData,
            })
        } else {
            None
        }
    }

    pub fn get(&self) -> Option<Arc<Class>> {
        self.class.upgrade()
    }

    pub fn is_valid(&self) -> bool {
        self.class.strong_count() > 0
    }

    /// Class name, if the class is still loaded
    pub fn name(&self) -> Option<String> {
        self.get().map(|class| class.name().to_string())
    }

    pub fn ptr_eq(&self, other: &SubclassOf<T>) -> bool {
        Weak::ptr_eq(&self.class, &other.class)
    }

    pub fn points_to(&self, class: &Arc<Class>) -> bool {
        std::ptr::eq(self.class.as_ptr(), Arc::as_ptr(class))
    }
}

impl<T: Asset> Clone for SubclassOf<T> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Asset> fmt::Debug for SubclassOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubclassOf")
            .field("base", &T::type_name())
            .field("class", &self.name())
            .finish()
    }
}
