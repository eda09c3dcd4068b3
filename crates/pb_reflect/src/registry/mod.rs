//! The type registry: runtime lookup of reflected types by id, path or name.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability a type supports, stored type-erased.
//! - [`FromType`]: builds a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: the [`TypeInfo`] of a type plus its `TypeTrait` table.
//! - [`GetTypeMeta`]: builds the `TypeMeta` of a type, implemented by the derive.
//! - [`TypeRegistry`]: the store the [`binder`](crate::binder) resolves names against.
//! - Type traits:
//!     - [`TypeTraitDefault`]: builds a default value of the type.
//! - [`reflect_trait`]: generates a `Reflect{Trait}` type trait, the way
//!   behavior is dispatched on the runtime type of a [`Poly`](crate::ops::Poly) slot.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`]. Static registration is collected by
//! the [`inventory`] crate and needs the `auto_register` feature.
//!
//! [`reflect_trait`]: crate::derive::reflect_trait
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitDefault;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
