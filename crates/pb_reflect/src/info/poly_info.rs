use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{ConstructError, Type, TypeInfo, TypePath, Typed};

/// A slot declared as a base type that holds any type extending it.
///
/// See [`Poly`](crate::ops::Poly).
#[derive(Clone)]
pub struct PolyInfo {
    ty: Type,
    base: Type,
    base_info: fn() -> &'static TypeInfo,
    wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError>,
}

impl PolyInfo {
    /// Creates the info of slot `T` declared as `B`.
    pub fn new<T: TypePath, B: Typed>(
        wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            base: Type::of::<B>(),
            base_info: B::type_info,
            wrap,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the declared base type.
    #[inline]
    pub fn base_ty(&self) -> Type {
        self.base
    }

    #[inline]
    pub fn base_info(&self) -> &'static TypeInfo {
        (self.base_info)()
    }

    /// Wraps a value into the slot, checking that it extends the base.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError> {
        (self.wrap)(value)
    }
}

impl fmt::Debug for PolyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyInfo")
            .field("ty", &self.ty)
            .field("base", &self.base)
            .finish()
    }
}
