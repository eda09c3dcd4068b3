//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_meta;
mod reflect_struct;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectConstructor, ReflectStruct, StructField};
pub(crate) use type_attributes::{ConstructorDef, TypeAttributes};
