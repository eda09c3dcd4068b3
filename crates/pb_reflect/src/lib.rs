//! Type-directed serialization of polymorphic object graphs.
//!
//! `pb_reflect` walks a value through its reflected shape and produces a
//! format-agnostic [`Value`](value::Value) tree. When a value's runtime type
//! differs from the type it is declared as, the emitted object carries a
//! type tag (`"$type"` by default) naming the concrete type, so that the
//! deserializer can rebuild the exact subtype later.
//!
//! ## Menu
//!
//! - [`Reflect`]: the object-safe trait every serializable type implements.
//! - [`info`]: static type descriptors ([`TypeInfo`](info::TypeInfo), members, constructors).
//! - [`ops`]: kind-specific access (`Struct`, `List`, `Map` ...) and the [`Poly`](ops::Poly) slot.
//! - [`registry`]: [`TypeRegistry`](registry::TypeRegistry) and type traits (capabilities).
//! - [`shape`]: member listing and constructor selection.
//! - [`binder`]: type name <-> type resolution under an allow-list.
//! - [`value`]: the structured value tree.
//! - [`serde`]: [`SerializeDriver`](serde::SerializeDriver), [`DeserializeDriver`](serde::DeserializeDriver) and [`Settings`](serde::Settings).
//! - [`codec`]: text codecs and I/O helpers.
//!
//! ## Example
//!
//! ```
//! use pb_reflect::derive::Reflect;
//! use pb_reflect::binder::{AllowList, RegistryBinder};
//! use pb_reflect::info::Typed;
//! use pb_reflect::registry::TypeRegistry;
//! use pb_reflect::serde::{DeserializeDriver, SerializeDriver, Settings, TypeTagging};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default, type_path = "shop::Item")]
//! struct Item {
//!     name: String,
//!     count: u32,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Item>();
//!
//! let binder = RegistryBinder::new(&registry, AllowList::namespaces(["shop"]));
//! let settings = Settings::new()
//!     .with_binder(&binder)
//!     .with_type_tagging(TypeTagging::Always);
//!
//! let item = Item { name: "apple".into(), count: 3 };
//! let tree = SerializeDriver::new(&settings).unwrap().serialize_value(&item).unwrap();
//! assert_eq!(tree.as_object().unwrap().keys().next(), Some("$type"));
//!
//! let back: Item = DeserializeDriver::new(&settings).unwrap().deserialize_as(&tree).unwrap();
//! assert_eq!(back, item);
//! ```

// Generated code names this crate `pb_reflect`, in tests and doctests alike.
extern crate self as pb_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod binder;
pub mod codec;
pub mod error;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod serde;
pub mod shape;
pub mod value;

#[cfg(all(test, feature = "json"))]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use pb_reflect_derive as derive;
pub use reflection::{Extends, Reflect};
