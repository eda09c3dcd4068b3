use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectMeta, ReflectStruct};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(info);

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta);

    // trait: Extends
    let extends_trait_tokens = impl_trait_extends(info);

    // trait: GetTypeMeta
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, get_registry_dependencies(info));

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #extends_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
///
/// `field` matches readable members and `field_mut` writable ones; unknown
/// names are forwarded to the base field.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let pb_reflect_path = meta.pb_reflect_path();
    let struct_ = crate::path::struct_(pb_reflect_path);
    let reflect_ = crate::path::reflect_(pb_reflect_path);
    let option_ = crate::path::option_();

    let readable = info
        .members()
        .iter()
        .filter(|f| f.attrs.writeonly.is_none());
    let readable_names = readable.clone().map(|f| &f.member);
    let readable_idents = readable.map(|f| f.ident);

    let writable = info
        .members()
        .iter()
        .filter(|f| f.attrs.readonly.is_none());
    let writable_names = writable.clone().map(|f| &f.member);
    let writable_idents = writable.map(|f| f.ident);

    let (fallback_ref, fallback_mut) = match info.base() {
        Some(base) => {
            let ty = base.ty;
            let ident = base.ident;
            (
                quote!(<#ty as #struct_>::field(&self.#ident, name)),
                quote!(<#ty as #struct_>::field_mut(&mut self.#ident, name)),
            )
        }
        None => (quote!(#option_::None), quote!(#option_::None)),
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#readable_names => #option_::Some(&self.#readable_idents as &dyn #reflect_),)*
                    _ => #fallback_ref,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#writable_names => #option_::Some(&mut self.#writable_idents as &mut dyn #reflect_),)*
                    _ => #fallback_mut,
                }
            }
        }
    }
}

/// Generate `Reflect` trait implementation tokens.
fn impl_trait_reflect(meta: &ReflectMeta) -> TokenStream {
    let pb_reflect_path = meta.pb_reflect_path();
    let reflect_ = crate::path::reflect_(pb_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(pb_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(pb_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(pb_reflect_path);
    let box_ = crate::path::box_(pb_reflect_path);
    let result_ = crate::path::result_();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(&mut self, value: #box_<dyn #reflect_>) -> #result_<(), #box_<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #result_::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }
        }
    }
}

/// Generate `Extends<Base>` for the type of the `#[reflect(base)]` field.
fn impl_trait_extends(info: &ReflectStruct) -> TokenStream {
    let Some(base) = info.base() else {
        return crate::utils::empty();
    };

    let meta = info.meta();
    let extends_ = crate::path::extends_(meta.pb_reflect_path());
    let base_ty = base.ty;

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #extends_<#base_ty> for #ident #ty_generics #where_clause {}
    }
}

/// Generate partial `GetTypeMeta` implementation tokens.
fn get_registry_dependencies(info: &ReflectStruct) -> TokenStream {
    let pb_reflect_path = info.meta().pb_reflect_path();
    let type_registry_ = crate::path::type_registry_(pb_reflect_path);

    let field_types = info.field_types();

    quote! {
        fn register_dependencies(__registry: &mut #type_registry_) {
            #(#type_registry_::register::<#field_types>(__registry);)*
        }
    }
}
