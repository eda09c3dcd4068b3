//! Containers for static storage of type information.
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types a plain [`OnceLock`] is enough.
//! There is no path cell for them, a string literal does the job.
//!
//! ## GenericTypeCell
//!
//! A `static` inside a generic function is shared by every instantiation, so
//! the cell keeps one entry per [`TypeId`]. Reads are lock-free: the map lives
//! behind an [`ArcSwapOption`] and writers publish a new copy of it. Entries
//! are leaked, they live as long as the program.
//!
//! - [`GenericTypeInfoCell`]: stores [`TypeInfo`].
//! - [`GenericTypePathCell`]: stores [`String`].

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::{Any, TypeId};
use std::sync::OnceLock;

use arc_swap::ArcSwapOption;
use pb_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Static storage of the [`TypeInfo`] of a non-generic type.
///
/// # Example
///
/// ```
/// use pb_reflect::impls::NonGenericTypeInfoCell;
/// use pb_reflect::info::{TypeInfo, Typed};
///
/// fn info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| f64::type_info().clone())
/// }
///
/// assert_eq!(info().type_path(), "f64");
/// assert!(core::ptr::eq(info(), info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Static storage of per-instantiation type information for generic types.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(ArcSwapOption<TypeIdMap<&'static T>>);

/// Static storage of the [`TypeInfo`] of a generic type.
///
/// # Example
///
/// ```
/// use pb_reflect::impls::GenericTypeInfoCell;
/// use pb_reflect::info::{TypeInfo, Typed};
///
/// fn info_of<T: Typed>() -> &'static TypeInfo {
///     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///     CELL.get_or_insert::<T>(|| T::type_info().clone())
/// }
///
/// assert_eq!(info_of::<i32>().type_path(), "i32");
/// assert_eq!(info_of::<u8>().type_path(), "u8");
/// assert!(core::ptr::eq(info_of::<i32>(), info_of::<i32>()));
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static storage of the type path of a generic type.
///
/// # Example
///
/// ```
/// use pb_reflect::impls::{self, GenericTypePathCell};
/// use pb_reflect::info::TypePath;
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["demo::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Wrapper<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str {
///         "Wrapper"
///     }
/// }
///
/// assert_eq!(<Wrapper<i32>>::type_path(), "demo::Wrapper<i32>");
/// assert_eq!(<Wrapper<String>>::type_name(), "Wrapper<String>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(ArcSwapOption::const_empty())
    }

    /// Returns the entry of `G`, building it with `f` on first use.
    ///
    /// When two threads race on the same `G`, both may run `f` but only one
    /// result is published and returned to both.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &'static T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &'static T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        match &*self.0.load() {
            Some(map) => map.get(&type_id).copied(),
            None => None,
        }
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        let leaked: &'static T = Box::leak(Box::new(value));
        let mut winner = leaked;
        self.0.rcu(|current| {
            let mut next = match current {
                Some(map) => TypeIdMap::clone(map),
                None => TypeIdMap::with_capacity(1),
            };
            winner = *next.get_or_insert(type_id, || leaked);
            Some(Arc::new(next))
        });
        winner
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::sync::Barrier;
    use std::thread;

    use super::GenericTypePathCell;
    use crate::info::{TypeInfo, TypePath, Typed};

    const THREADS: usize = 8;

    #[test]
    fn racing_writers_share_one_entry() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        let barrier = Barrier::new(THREADS);

        let seen: Vec<&'static String> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        CELL.get_or_insert::<u32>(|| alloc::format!("writer {i}"))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winner = seen[0];
        assert!(seen.iter().all(|s| core::ptr::eq(*s, winner)));
        let later = CELL.get_or_insert::<u32>(|| String::from("late"));
        assert!(core::ptr::eq(later, winner));
    }

    #[test]
    fn racing_writers_keep_every_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        let barrier = Barrier::new(4);

        thread::scope(|s| {
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                CELL.get_or_insert::<u8>(|| String::from("u8"));
            });
            s.spawn(move || {
                barrier.wait();
                CELL.get_or_insert::<u16>(|| String::from("u16"));
            });
            s.spawn(move || {
                barrier.wait();
                CELL.get_or_insert::<i8>(|| String::from("i8"));
            });
            s.spawn(move || {
                barrier.wait();
                CELL.get_or_insert::<i16>(|| String::from("i16"));
            });
        });

        assert_eq!(CELL.get_or_insert::<u8>(String::new), "u8");
        assert_eq!(CELL.get_or_insert::<u16>(String::new), "u16");
        assert_eq!(CELL.get_or_insert::<i8>(String::new), "i8");
        assert_eq!(CELL.get_or_insert::<i16>(String::new), "i16");
    }

    #[test]
    fn concurrent_type_info_is_stable() {
        type Nested = Vec<Option<Vec<u16>>>;

        let seen: Vec<(&'static TypeInfo, &'static str)> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| s.spawn(|| (Nested::type_info(), Nested::type_path())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let (info, path) = seen[0];
        assert_eq!(path, "alloc::vec::Vec<core::option::Option<alloc::vec::Vec<u16>>>");
        for (other_info, other_path) in &seen {
            assert!(core::ptr::eq(*other_info, info));
            assert!(core::ptr::eq(*other_path, path));
        }
        assert!(core::ptr::eq(Nested::type_info(), info));
    }
}
