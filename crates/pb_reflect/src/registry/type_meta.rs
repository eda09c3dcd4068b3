use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use pb_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// The registered form of a type: its [`TypeInfo`] and a [`TypeTrait`] table.
///
/// Usually generated by [`#[derive(Reflect)]`](crate::derive::Reflect)
/// through [`GetTypeMeta`].
///
/// # Example
///
/// ```
/// use pb_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
///
/// let f = meta.get_trait::<TypeTraitDefault>().unwrap();
/// assert_eq!(f.default().take::<String>().unwrap(), "");
/// ```
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Creates a meta of `T` with an empty trait table.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info(),
            trait_table: TypeIdMap::new(),
        }
    }

    /// Creates a meta of `T` with room for `capacity` type traits.
    #[inline]
    pub fn with_capacity<T: Typed>(capacity: usize) -> Self {
        Self {
            type_info: T::type_info(),
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline(always)]
    pub fn ty(&self) -> &'static Type {
        self.type_info.ty()
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Inserts a type trait, replacing one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    /// Returns the type trait `T`, if present.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .and_then(|t| t.downcast_ref::<T>())
    }

    /// Returns the type trait `T` mutably, if present.
    #[inline]
    pub fn get_trait_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        self.trait_table
            .get_mut(&TypeId::of::<T>())
            .and_then(|t| t.downcast_mut::<T>())
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    /// Returns the number of type traits.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, type_trait) in self.trait_table.iter() {
            trait_table.insert(*id, (**type_trait).clone_type_trait());
        }
        Self {
            type_info: self.type_info,
            trait_table,
        }
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("kind", &self.type_info.kind())
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Builds the [`TypeMeta`] of a type for registration.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), which also
/// inserts the type traits named in `#[reflect(type_trait = ...)]`.
///
/// # Example
///
/// ```
/// use pb_reflect::derive::{Reflect, reflect_trait};
/// use pb_reflect::registry::GetTypeMeta;
///
/// #[reflect_trait]
/// trait Describe {
///     fn describe(&self) -> String;
/// }
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = ReflectDescribe)]
/// struct Lamp { on: bool }
///
/// impl Describe for Lamp {
///     fn describe(&self) -> String {
///         if self.on { "lit".into() } else { "dark".into() }
///     }
/// }
///
/// assert!(Lamp::get_type_meta().has_trait::<ReflectDescribe>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot be registered",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait GetTypeMeta: Typed {
    /// Returns the default [`TypeMeta`] of this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this type is built from (member types, base, items).
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
