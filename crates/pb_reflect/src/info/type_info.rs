use core::any::TypeId;
use core::fmt;

use thiserror::Error;

use crate::info::{ListInfo, MapInfo, OptionInfo, PolyInfo, ScalarInfo, StructInfo, TupleInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a reflected type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Tuple,
    List,
    Map,
    Option,
    Poly,
    Scalar,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReflectKind::Struct => "struct",
            ReflectKind::Tuple => "tuple",
            ReflectKind::List => "list",
            ReflectKind::Map => "map",
            ReflectKind::Option => "option",
            ReflectKind::Poly => "poly",
            ReflectKind::Scalar => "scalar",
        })
    }
}

/// Returned by the `TypeInfo::as_*` accessors on a kind mismatch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information, one variant per [`ReflectKind`].
///
/// # Example
///
/// ```
/// use pb_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<String>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
/// assert_eq!(info.as_list().unwrap().item_ty().name(), "String");
/// assert!(info.as_map().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Tuple(TupleInfo),
    List(ListInfo),
    Map(MapInfo),
    Option(OptionInfo),
    Poly(PolyInfo),
    Scalar(ScalarInfo),
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        #[inline]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    /// Returns the descriptor of the described type.
    pub fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Tuple(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Poly(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Tuple(_) => ReflectKind::Tuple,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Poly(_) => ReflectKind::Poly,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }

    /// Returns `true` if a value of this type may stand where `expected` is declared.
    ///
    /// That is the case for the same type, or a struct listing `expected`
    /// among its transitive bases.
    pub fn is_assignable_to(&self, expected: TypeId) -> bool {
        if self.type_id() == expected {
            return true;
        }
        match self {
            Self::Struct(info) => info.extends(expected),
            _ => false,
        }
    }

    impl_cast_fn!(as_struct: Struct => StructInfo);
    impl_cast_fn!(as_tuple: Tuple => TupleInfo);
    impl_cast_fn!(as_list: List => ListInfo);
    impl_cast_fn!(as_map: Map => MapInfo);
    impl_cast_fn!(as_option: Option => OptionInfo);
    impl_cast_fn!(as_poly: Poly => PolyInfo);
    impl_cast_fn!(as_scalar: Scalar => ScalarInfo);
}
