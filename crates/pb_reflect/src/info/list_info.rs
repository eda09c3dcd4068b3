use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{ConstructError, Type, TypeInfo, TypePath, Typed};

/// Builds a list from its items in order.
pub type FromItemsFn = fn(Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ConstructError>;

/// An ordered sequence of a single item type.
#[derive(Clone)]
pub struct ListInfo {
    ty: Type,
    item: Type,
    item_info: fn() -> &'static TypeInfo,
    from_items: FromItemsFn,
}

impl ListInfo {
    /// Creates the info of list `T` with items of type `I`.
    pub fn new<T: TypePath, I: Typed>(from_items: FromItemsFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            item: Type::of::<I>(),
            item_info: I::type_info,
            from_items,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn item_ty(&self) -> Type {
        self.item
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the builder.
    #[inline]
    pub fn from_items(&self) -> FromItemsFn {
        self.from_items
    }
}

impl fmt::Debug for ListInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListInfo")
            .field("ty", &self.ty)
            .field("item", &self.item)
            .finish()
    }
}
