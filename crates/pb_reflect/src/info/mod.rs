//! Static type descriptors.
//!
//! - [`TypePath`] / [`Type`]: canonical names and the type descriptor handle.
//! - [`Typed`] / [`TypeInfo`]: per-kind shape information, built once per type.
//! - [`StructInfo`], [`MemberInfo`], [`ConstructorInfo`], [`ParamInfo`]: the
//!   pieces the [`shape`](crate::shape) module reasons about.

// -----------------------------------------------------------------------------
// Modules

mod constructor_info;
mod list_info;
mod map_info;
mod member_info;
mod option_info;
mod poly_info;
mod scalar_info;
mod struct_info;
mod tuple_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use constructor_info::{ConstructError, ConstructFn, ConstructorArgs, ConstructorInfo, ParamInfo};
pub use list_info::{FromItemsFn, ListInfo};
pub use map_info::{FromEntriesFn, MapInfo};
pub use member_info::{Access, Inclusion, MemberInfo, Visibility};
pub use option_info::OptionInfo;
pub use poly_info::PolyInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use tuple_info::{TupleField, TupleInfo};
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
