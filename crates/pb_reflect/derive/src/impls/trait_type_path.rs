use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

fn static_path_cell(pb_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(pb_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`
///
/// The path is `module_path!()::Ident` unless pinned by `type_path = "..."`.
/// Generic types append `<P0, P1>` built from the parameters' own paths.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let pb_reflect_path = meta.pb_reflect_path();
    let type_path_ = crate::path::type_path_(pb_reflect_path);
    let option_ = crate::path::option_();

    let ident = meta.ident();
    let ident_str = ident.to_string();

    let (base_path, module_path) = match &meta.attrs().type_path {
        Some(lit) => {
            let value = lit.value();
            let module_path = match value.rsplit_once("::") {
                Some((module, _)) => quote!(#option_::Some(#module)),
                None => quote!(#option_::None),
            };
            (quote!(#lit), module_path)
        }
        None => (
            quote!(::core::concat!(::core::module_path!(), "::", #ident_str)),
            quote!(#option_::Some(::core::module_path!())),
        ),
    };

    let type_ident = match &meta.attrs().type_path {
        Some(lit) => {
            let value = lit.value();
            let last = value.rsplit("::").next().unwrap_or(&value).to_owned();
            quote!(#last)
        }
        None => quote!(#ident_str),
    };

    let (type_path, type_name, inline_flag) = if meta.is_generic() {
        let concat_ = crate::path::concat_(pb_reflect_path);
        let params = meta.type_param_idents();

        let path_parts = generic_parts(&type_path_, &params, quote!(type_path));
        let name_parts = generic_parts(&type_path_, &params, quote!(type_name));

        (
            static_path_cell(
                pb_reflect_path,
                quote!(#concat_(&[#base_path, "<", #path_parts ">"])),
            ),
            static_path_cell(
                pb_reflect_path,
                quote!(#concat_(&[#type_ident, "<", #name_parts ">"])),
            ),
            crate::utils::empty(),
        )
    } else {
        (base_path, type_ident.clone(), quote! { #[inline] })
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #option_<&'static str> {
                #module_path
            }
        }
    }
}

/// `P0::f(), ", ", P1::f(),` for the `concat` array.
fn generic_parts(type_path_: &TokenStream, params: &[syn::Ident], f: TokenStream) -> TokenStream {
    let mut parts = TokenStream::new();
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            parts.extend(quote!(", ",));
        }
        parts.extend(quote!(<#param as #type_path_>::#f(),));
    }
    parts
}
