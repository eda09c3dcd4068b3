// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod struct_kind;

mod auto_register;
mod reflect_trait;
mod trait_get_type_meta;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;
pub(crate) use reflect_trait::impl_reflect_trait;

use auto_register::get_auto_register_impl;
use struct_kind::impl_struct;
use trait_get_type_meta::impl_trait_get_type_meta;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
