use crate::info::{TypeInfo, TypePath};

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). The info is
/// built once per type and kept in a static cell, see [`impls`](crate::impls).
pub trait Typed: TypePath {
    /// Returns the compile-time info of the type.
    fn type_info() -> &'static TypeInfo;
}

/// Object-safe mirror of [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
