use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{Ident, spanned::Spanned};

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// `register_deps_tokens` is usually related to the type of field.
pub(crate) fn impl_trait_get_type_meta(
    meta: &ReflectMeta,
    register_deps_tokens: TokenStream,
) -> TokenStream {
    let pb_reflect_path = meta.pb_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(pb_reflect_path);
    let type_meta_ = crate::path::type_meta_(pb_reflect_path);
    let from_type_ = crate::path::from_type_(pb_reflect_path);

    let outer_ = Ident::new("__outer", Span::call_site());

    let mut trait_counter = meta.attrs().type_traits.len();

    let insert_default = match meta.attrs().default {
        Some(span) => {
            trait_counter += 1;
            let type_trait_default_ = crate::path::type_trait_default_(pb_reflect_path);
            quote_spanned! { span =>
                #type_meta_::insert_trait::<#type_trait_default_>(
                    &mut #outer_,
                    <#type_trait_default_ as #from_type_<Self>>::from_type(),
                );
            }
        }
        None => crate::utils::empty(),
    };

    let insert_extra_traits = meta.attrs().type_traits.iter().map(|extra_path| {
        let span = extra_path.span();
        quote_spanned! { span =>
            #type_meta_::insert_trait::<#extra_path>(
                &mut #outer_,
                <#extra_path as #from_type_<Self>>::from_type(),
            );
        }
    });

    let mutability = if trait_counter == 0 {
        crate::utils::empty()
    } else {
        quote!(mut)
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #get_type_meta_ for #ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                let #mutability #outer_ = #type_meta_::with_capacity::<Self>(#trait_counter);
                #insert_default
                #(#insert_extra_traits)*
                #outer_
            }

            #register_deps_tokens
        }
    }
}
