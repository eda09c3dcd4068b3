//! Reflection for std types, plus utilities for implementing it.
//!
//! - [`concat`]: string concatenation used by `TypePath` implementations.
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - scalars: `bool`, `char`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `String`
//! - tuples: `(P0,)` up to `(P0, ..., P5)`
//! - `Vec<T>`, `Option<T>`
//! - `BTreeMap<K, V>`, `std::collections::HashMap<K, V>`
//! - [`Poly<B>`](crate::ops::Poly)
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod btree_map;
mod hash_map;
mod option;
mod poly;
mod scalar;
mod tuple;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::info::{ConstructError, TypePath};

/// An efficient string concatenation function.
///
/// # Example
///
/// ```
/// use pb_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T", ">"]);
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

/// Unboxes the `index`-th item handed to a container builder.
pub(crate) fn take_item<T: Reflect + TypePath>(
    item: Box<dyn Reflect>,
    index: usize,
) -> Result<T, ConstructError> {
    item.take::<T>()
        .map_err(|item| ConstructError::ArgumentType {
            index,
            expected: T::type_path(),
            found: item.reflect_type_path(),
        })
}

/// Implements the kind-dispatch methods of `Reflect` for a concrete type.
macro_rules! impl_reflect_kind {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_kind;
