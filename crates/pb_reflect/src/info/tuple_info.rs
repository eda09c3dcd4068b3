use alloc::boxed::Box;
use core::fmt;

use crate::info::{ConstructFn, Type, TypeInfo, TypePath, Typed};

/// One positional field of a tuple.
#[derive(Clone)]
pub struct TupleField {
    index: usize,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
}

impl TupleField {
    #[inline]
    pub fn new<T: Typed>(index: usize) -> Self {
        Self {
            index,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

impl fmt::Debug for TupleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleField")
            .field("index", &self.index)
            .field("ty", &self.ty)
            .finish()
    }
}

/// A fixed-arity product, serialized as an array.
#[derive(Clone)]
pub struct TupleInfo {
    ty: Type,
    fields: Box<[TupleField]>,
    from_fields: ConstructFn,
}

impl TupleInfo {
    /// Creates the info of `T`; `from_fields` builds a `T` from its fields in order.
    pub fn new<T: TypePath>(fields: &[TupleField], from_fields: ConstructFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            from_fields,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn fields(&self) -> &[TupleField] {
        &self.fields
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the builder.
    #[inline]
    pub fn from_fields(&self) -> ConstructFn {
        self.from_fields
    }
}

impl fmt::Debug for TupleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleInfo")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .finish()
    }
}
