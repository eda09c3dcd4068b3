//! Type-directed serialization of polymorphic object graphs.
//!
//! - [`reflect`]: the engine. Derive `Reflect`, register types, serialize
//!   through a declared (base) type and get the exact subtype back.
//! - [`utils`]: the `TypeId` keyed maps and hashers it is built on.
//!
//! ## Example
//!
//! ```
//! use polybind::prelude::*;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default, type_path = "app::Note")]
//! struct Note {
//!     title: String,
//!     pinned: bool,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Note>();
//! let binder = RegistryBinder::new(&registry, AllowList::namespaces(["app"]));
//! let settings = Settings::new()
//!     .with_binder(&binder)
//!     .with_type_tagging(TypeTagging::OnMismatch);
//!
//! let note = Note { title: "groceries".into(), pinned: true };
//! let text = to_text(&note, &settings, &JsonCodec::new()).unwrap();
//! assert_eq!(text, r#"{"title":"groceries","pinned":true}"#);
//!
//! let back: Note = from_text(&text, &settings, &JsonCodec::new()).unwrap();
//! assert_eq!(back, note);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pb_reflect as reflect;
pub use pb_utils as utils;

/// The items most programs need.
pub mod prelude {
    pub use pb_reflect::binder::{AllowList, Binder, NameStyle, RegistryBinder};
    pub use pb_reflect::codec::{TextCodec, from_text, read_value, to_text, write_value};
    pub use pb_reflect::derive::{Reflect, reflect_trait};
    pub use pb_reflect::error::{Error, ErrorKind};
    pub use pb_reflect::info::{TypePath, Typed};
    pub use pb_reflect::ops::Poly;
    pub use pb_reflect::registry::{GetTypeMeta, TypeRegistry};
    pub use pb_reflect::serde::{
        DeserializeDriver, SerializeDriver, Settings, SettingsConfig, TypeTagging,
    };
    pub use pb_reflect::value::Value;
    pub use pb_reflect::{Extends, Reflect};

    #[cfg(feature = "json")]
    pub use pb_reflect::codec::JsonCodec;
    #[cfg(feature = "ron")]
    pub use pb_reflect::codec::RonCodec;
}
