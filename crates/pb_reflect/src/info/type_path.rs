use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// The engine uses [`type_path`](TypePath::type_path) as the canonical,
/// stable name of a type. Unlike [`core::any::type_name`], it is under the
/// implementor's control and does not change between compiler versions.
///
/// - `type_path`: fully qualified path, e.g. `demo::model::TestType`, `alloc::vec::Vec<i32>`.
/// - `type_name`: short name, e.g. `TestType`, `Vec<i32>`.
/// - `type_ident`: the bare identifier, e.g. `TestType`, `Vec`.
/// - `module_path`: e.g. `demo::model`.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect); the path
/// can be pinned with `#[reflect(type_path = "...")]`.
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "geometry::Point")]
/// struct Point { x: i32 }
///
/// assert_eq!(Point::type_path(), "geometry::Point");
/// assert_eq!(Point::type_name(), "Point");
/// assert_eq!(<Vec<Point>>::type_path(), "alloc::vec::Vec<geometry::Point>");
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    fn type_path() -> &'static str;

    /// Returns the short name of the type.
    fn type_name() -> &'static str;

    /// Returns the bare identifier of the type.
    fn type_ident() -> &'static str;

    /// Returns the module the type is defined in.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe mirror of [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Function pointers to the [`TypePath`] methods of a type.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates the table of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The descriptor of a concrete type: its [`TypeId`] plus its [`TypePathTable`].
///
/// Two `Type`s are equal when their ids are equal, the path is a projection.
///
/// # Example
///
/// ```
/// use pb_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// assert_ne!(ty, Type::of::<i32>());
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates the descriptor of `T`.
    #[inline]
    pub fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this describes `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the [`TypePathTable`].
    #[inline(always)]
    pub fn type_path_table(&self) -> &TypePathTable {
        &self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
