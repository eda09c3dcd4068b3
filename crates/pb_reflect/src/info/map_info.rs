use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{ConstructError, Type, TypeInfo, TypePath, Typed};

/// Builds a map from its entries.
pub type FromEntriesFn =
    fn(Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>) -> Result<Box<dyn Reflect>, ConstructError>;

/// A key-value mapping.
#[derive(Clone)]
pub struct MapInfo {
    ty: Type,
    key: Type,
    key_info: fn() -> &'static TypeInfo,
    value: Type,
    value_info: fn() -> &'static TypeInfo,
    from_entries: FromEntriesFn,
}

impl MapInfo {
    /// Creates the info of map `T` from keys `K` to values `V`.
    pub fn new<T: TypePath, K: Typed, V: Typed>(from_entries: FromEntriesFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            key: Type::of::<K>(),
            key_info: K::type_info,
            value: Type::of::<V>(),
            value_info: V::type_info,
            from_entries,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn key_ty(&self) -> Type {
        self.key
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    #[inline]
    pub fn value_ty(&self) -> Type {
        self.value
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Returns the builder.
    #[inline]
    pub fn from_entries(&self) -> FromEntriesFn {
        self.from_entries
    }
}

impl fmt::Debug for MapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapInfo")
            .field("ty", &self.ty)
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
