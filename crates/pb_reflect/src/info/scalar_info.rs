use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath};
use crate::value::Value;

/// The value class of a scalar, used in mismatch reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Char,
    Int,
    UInt,
    Float,
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int => "signed integer",
            Self::UInt => "unsigned integer",
            Self::Float => "float",
            Self::String => "string",
        })
    }
}

/// A leaf value that converts directly to and from a [`Value`].
#[derive(Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
    from_value: fn(&Value) -> Option<Box<dyn Reflect>>,
    from_key: fn(&str) -> Option<Box<dyn Reflect>>,
}

impl ScalarInfo {
    /// Creates the info of scalar `T`.
    ///
    /// `from_value` converts a payload value, `from_key` parses an object key
    /// (maps with scalar keys are written as objects).
    pub fn new<T: TypePath>(
        kind: ScalarKind,
        from_value: fn(&Value) -> Option<Box<dyn Reflect>>,
        from_key: fn(&str) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            from_value,
            from_key,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Converts a payload value, `None` if its kind or range does not fit.
    #[inline]
    pub fn from_value(&self, value: &Value) -> Option<Box<dyn Reflect>> {
        (self.from_value)(value)
    }

    /// Parses an object key.
    #[inline]
    pub fn from_key(&self, key: &str) -> Option<Box<dyn Reflect>> {
        (self.from_key)(key)
    }
}

impl fmt::Debug for ScalarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .finish()
    }
}
