//! Call-site sugar for routing a load result to a method on an owner

use std::sync::Arc;

/// Build a load callback that calls `method` on `owner` if it is still alive.
///
/// Only a weak handle to the owner is captured, so a pending load does not keep
/// the owner alive. If the owner is gone when the load completes the call is
/// skipped.
pub fn bind_weak<O, V, F>(owner: &Arc<O>, method: F) -> impl FnOnce(Option<V>) + Send + 'static
where
    O: Send + Sync + 'static,
    V: 'static,
    F: FnOnce(&O, Option<V>) + Send + 'static,
{
    let owner = Arc::downgrade(owner);
    move |loaded| {
        if let Some(owner) = owner.upgrade() {
            method(&owner, loaded);
        }
    }
}

/// Load a soft reference and hand the result to a method of `owner`.
///
/// `owner` must be an `&Arc<_>`; the method receives `Option<Resolved>`.
///
/// ```ignore
/// load_soft_async!(loader, self.icon.clone(), &hud, on_icon_loaded);
/// ```
#[macro_export]
macro_rules! load_soft_async {
    ($loader:expr, $reference:expr, $owner:expr, $method:ident) => {
        $loader.load_async_with(
            $reference,
            $crate::binding::bind_weak($owner, |owner, loaded| owner.$method(loaded)),
        )
    };
}
