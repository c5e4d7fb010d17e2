// Asset Object Model
//
// Provides the engine-side vocabulary the loader speaks:
// - Asset types and their display names
// - Runtime class descriptors with single inheritance
// - Non-owning resolved references

pub mod class;
pub mod handle;

pub use class::Class;
pub use handle::{ObjectPtr, SubclassOf};

/// Trait for types that can live in the streaming manager's store
pub trait Asset: Send + Sync + 'static {
    /// Human readable type name used in diagnostics
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path from a fully qualified type name.
///
/// Generic arguments are kept as written, only the outer path is trimmed.
pub fn short_type_name(full: &'static str) -> &'static str {
    let outer = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match outer.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
