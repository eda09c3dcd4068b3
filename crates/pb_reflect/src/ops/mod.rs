//! Kind-specific access to reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) hands out a
//! [`ReflectRef`] whose variants expose one trait per [`ReflectKind`](crate::info::ReflectKind).

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod option_ops;
mod poly;
mod scalar_ops;
mod struct_ops;
mod tuple_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListIter};
pub use map_ops::Map;
pub use option_ops::OptionValue;
pub use poly::{Poly, PolyValue};
pub use scalar_ops::Scalar;
pub use struct_ops::Struct;
pub use tuple_ops::Tuple;
