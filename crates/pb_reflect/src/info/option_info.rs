use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{ConstructError, Type, TypeInfo, TypePath, Typed};

/// A value that may be absent; `null` maps to `None`.
#[derive(Clone)]
pub struct OptionInfo {
    ty: Type,
    some: Type,
    some_info: fn() -> &'static TypeInfo,
    none: fn() -> Box<dyn Reflect>,
    wrap_some: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError>,
}

impl OptionInfo {
    /// Creates the info of option `T` holding `S`.
    pub fn new<T: TypePath, S: Typed>(
        none: fn() -> Box<dyn Reflect>,
        wrap_some: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            some: Type::of::<S>(),
            some_info: S::type_info,
            none,
            wrap_some,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the type held by `Some`.
    #[inline]
    pub fn some_ty(&self) -> Type {
        self.some
    }

    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }

    /// Creates the absent value.
    #[inline]
    pub fn none(&self) -> Box<dyn Reflect> {
        (self.none)()
    }

    /// Wraps a present value.
    #[inline]
    pub fn wrap_some(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ConstructError> {
        (self.wrap_some)(value)
    }
}

impl fmt::Debug for OptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionInfo")
            .field("ty", &self.ty)
            .field("some", &self.some)
            .finish()
    }
}
