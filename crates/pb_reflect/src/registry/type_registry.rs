use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pb_utils::TypeIdMap;
use pb_utils::hash::{FixedHashState, HashMap, HashSet};
use tracing::debug;

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};
use crate::shape::{self, ShapeError};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The store of registered types.
///
/// [Registering] a type records its [`TypeMeta`] under its [`TypeId`], its
/// type path and, when unambiguous, its short type name. The
/// [`RegistryBinder`](crate::binder::RegistryBinder) resolves type tags
/// against it, so only registered types can ever be instantiated from input.
///
/// # Example
///
/// ```
/// use pb_reflect::registry::{TypeRegistry, TypeTraitDefault};
/// use pb_reflect::info::DynamicTypePath;
///
/// let registry = TypeRegistry::new();
///
/// let generator = registry
///     .get_with_type_name("String").unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// let s = generator.default();
/// assert_eq!(s.reflect_type_path(), "alloc::string::String");
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the scalar types registered.
    ///
    /// - `bool` `char`
    /// - `i8 - i64` `isize`
    /// - `u8 - u64` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
        debug!(type_path = ty.path(), kind = %type_meta.type_info().kind(), "registered type");
    }

    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Inserts a meta unless its type is present. Returns `true` on insertion.
    ///
    /// Dependencies are _not_ registered, see [`register`](Self::register).
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.type_meta_table.try_insert(type_meta.type_id(), || {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            type_meta
        })
    }

    /// Registers `T` and, recursively, the types it is built from.
    ///
    /// Registering a type twice is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use pb_reflect::{derive::Reflect, registry::{TypeRegistry, TypeTraitDefault}};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default)]
    /// struct Foo {
    ///     name: Option<String>,
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Foo>();
    ///
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// assert!(registry.contains(TypeId::of::<Option<String>>()));
    /// assert!(registry.contains(TypeId::of::<i32>()));
    /// assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<Foo>()).is_some());
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Checks the shape of `T` before registering it.
    ///
    /// Rejects structs with duplicate member names and constructors whose
    /// parameters do not map onto a member of the same type. Nothing is
    /// registered on error.
    pub fn try_register<T: GetTypeMeta>(&mut self) -> Result<(), ShapeError> {
        if let Ok(info) = T::type_info().as_struct() {
            shape::validate(info)?;
        }
        self.register::<T>();
        Ok(())
    }

    /// Registers every non-generic type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `false` when the `auto_register` feature is disabled, the
    /// call is then a no-op. Repeated calls do not insert duplicates.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use pb_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default, auto_register)]
    /// struct Foo { value: i32 }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_types(self);
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the type trait `D` to the already registered type `T`.
    ///
    /// Returns `false` if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) -> bool {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => {
                type_meta.insert_trait(D::from_type());
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the meta of the type with this [type path].
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the meta of the type with this [type name].
    ///
    /// Returns `None` if the name is ambiguous.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered types share this [type name].
    ///
    /// # Example
    ///
    /// ```
    /// # use pb_reflect::registry::TypeRegistry;
    /// # mod foo {
    /// #     use pb_reflect::derive::Reflect;
    /// #     #[derive(Reflect)]
    /// #     pub struct MyType { pub a: i32 }
    /// # }
    /// # mod bar {
    /// #     use pb_reflect::derive::Reflect;
    /// #     #[derive(Reflect)]
    /// #     pub struct MyType { pub b: i32 }
    /// # }
    /// let mut registry = TypeRegistry::default();
    /// registry.register::<foo::MyType>();
    /// registry.register::<bar::MyType>();
    /// assert!(registry.is_ambiguous("MyType"));
    /// assert!(registry.get_with_type_name("MyType").is_none());
    /// ```
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the type trait `T` of the type `type_id`.
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    /// Returns the [`TypeInfo`] of the type `type_id`.
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Iterates the registered metas in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Iterates the registered types carrying the type trait `T`.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table
            .values()
            .filter_map(|item| item.get_trait::<T>().map(|t| (item, t)))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A [`TypeRegistry`] shared between threads.
///
/// # Example
///
/// ```
/// use pb_reflect::registry::TypeRegistryArc;
///
/// let shared = TypeRegistryArc::default();
/// let writer = shared.clone();
/// std::thread::spawn(move || writer.write().register::<Vec<i32>>())
///     .join()
///     .unwrap();
/// assert!(shared.read().get_with_type_path("alloc::vec::Vec<i32>").is_some());
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Takes a read lock on the registry.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the registry.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}
