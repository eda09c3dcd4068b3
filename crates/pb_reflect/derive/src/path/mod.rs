//! The paths generated code refers to, kept in one place so that moving an
//! item in `pb_reflect` only touches this module.
//!
//! The only special one is the path of `pb_reflect` itself, see [`pb_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `pb_reflect` crate.
///
/// 1. For crates that depend on `pb_reflect`, `::pb_reflect` is returned.
/// 2. For crates that depend on `polybind`, `::polybind::reflect` is returned.
/// 3. Otherwise `::pb_reflect` is returned, which may be incorrect.
///
/// Reading the caller's manifest is not free, so the path is obtained once
/// per expansion and passed around.
pub(crate) fn pb_reflect() -> syn::Path {
    pb_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pb_reflect"))
}

// -----------------------------------------------------------------------------
// Fully qualified std paths

pub(crate) fn option_() -> TokenStream {
    quote!(::core::option::Option)
}

pub(crate) fn result_() -> TokenStream {
    quote!(::core::result::Result)
}

pub(crate) fn default_() -> TokenStream {
    quote!(::core::default::Default)
}

pub(crate) fn send_sync_static_() -> TokenStream {
    quote!(::core::marker::Send + ::core::marker::Sync + 'static)
}

// -----------------------------------------------------------------------------
// pb_reflect paths

#[inline(always)]
pub(crate) fn box_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::__macro_exports::alloc_utils::Box)
}

#[inline(always)]
pub(crate) fn concat_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::impls::concat)
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::__macro_exports::auto_register)
}

#[inline(always)]
pub(crate) fn reflect_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::Reflect)
}

#[inline(always)]
pub(crate) fn extends_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::Extends)
}

// info

#[inline(always)]
pub(crate) fn type_path_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::TypePath)
}

#[inline(always)]
pub(crate) fn typed_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::Typed)
}

#[inline(always)]
pub(crate) fn type_info_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::TypeInfo)
}

#[inline(always)]
pub(crate) fn struct_info_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::StructInfo)
}

#[inline(always)]
pub(crate) fn member_info_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::MemberInfo)
}

#[inline(always)]
pub(crate) fn access_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::Access)
}

#[inline(always)]
pub(crate) fn visibility_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::Visibility)
}

#[inline(always)]
pub(crate) fn inclusion_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::Inclusion)
}

#[inline(always)]
pub(crate) fn constructor_info_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::ConstructorInfo)
}

#[inline(always)]
pub(crate) fn constructor_args_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::ConstructorArgs)
}

#[inline(always)]
pub(crate) fn construct_error_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::ConstructError)
}

#[inline(always)]
pub(crate) fn param_info_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::ParamInfo)
}

#[inline(always)]
pub(crate) fn reflect_kind_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::info::ReflectKind)
}

// ops

#[inline(always)]
pub(crate) fn struct_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::ops::Struct)
}

#[inline(always)]
pub(crate) fn reflect_ref_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::ops::ReflectRef)
}

#[inline(always)]
pub(crate) fn reflect_mut_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::ops::ReflectMut)
}

// impls

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::impls::NonGenericTypeInfoCell)
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::impls::GenericTypeInfoCell)
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::impls::GenericTypePathCell)
}

// registry

#[inline(always)]
pub(crate) fn type_registry_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::registry::TypeRegistry)
}

#[inline(always)]
pub(crate) fn type_meta_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::registry::TypeMeta)
}

#[inline(always)]
pub(crate) fn get_type_meta_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::registry::GetTypeMeta)
}

#[inline(always)]
pub(crate) fn from_type_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::registry::FromType)
}

#[inline(always)]
pub(crate) fn type_trait_default_(pb_reflect_path: &syn::Path) -> TokenStream {
    quote!(#pb_reflect_path::registry::TypeTraitDefault)
}
