use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectConstructor, ReflectStruct, StructField};

/// Generate implementation codes for `Typed`
///
/// The info is built once and kept in a static cell: a `NonGenericTypeInfoCell`
/// for plain types, a `GenericTypeInfoCell` keyed by `Self` otherwise.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let pb_reflect_path = meta.pb_reflect_path();
    let typed_ = crate::path::typed_(pb_reflect_path);
    let type_info_ = crate::path::type_info_(pb_reflect_path);

    let info_tokens = struct_info_tokens(info);

    let cell_tokens = if meta.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(pb_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| {
                #info_tokens
            })
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(pb_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| {
                #info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #cell_tokens
            }
        }
    }
}

/// `TypeInfo::Struct(StructInfo::new::<Self>(&[..]).with_base::<B>().with_constructor(..))`
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let pb_reflect_path = info.meta().pb_reflect_path();
    let type_info_ = crate::path::type_info_(pb_reflect_path);
    let struct_info_ = crate::path::struct_info_(pb_reflect_path);
    let constructor_info_ = crate::path::constructor_info_(pb_reflect_path);

    let members = info.members().iter().map(|field| member_tokens(pb_reflect_path, field));

    let with_base = info.base().map(|base| {
        let ty = base.ty;
        quote!(.with_base::<#ty>())
    });

    let with_default = info.meta().attrs().default.map(|span| {
        quote::quote_spanned! { span =>
            .with_constructor(#constructor_info_::from_default::<Self>())
        }
    });

    let with_constructors = info
        .constructors()
        .iter()
        .map(|ctor| constructor_tokens(pb_reflect_path, ctor));

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#members),* ])
                #with_base
                #with_default
                #(.with_constructor(#with_constructors))*
        )
    }
}

fn member_tokens(pb_reflect_path: &syn::Path, field: &StructField) -> TokenStream {
    let member_info_ = crate::path::member_info_(pb_reflect_path);
    let access_ = crate::path::access_(pb_reflect_path);
    let visibility_ = crate::path::visibility_(pb_reflect_path);
    let inclusion_ = crate::path::inclusion_(pb_reflect_path);

    let ty = field.ty;
    let name = &field.member;
    let attrs = &field.attrs;

    let mut tokens = quote!(#member_info_::new::<#ty>(#name));

    if attrs.readonly.is_some() {
        tokens.extend(quote!(.with_access(#access_::Read)));
    } else if attrs.writeonly.is_some() {
        tokens.extend(quote!(.with_access(#access_::Write)));
    }
    // Visibility first, it resets the inclusion.
    if attrs.private.is_some() {
        tokens.extend(quote!(.with_visibility(#visibility_::Private)));
    }
    if attrs.exclude.is_some() {
        tokens.extend(quote!(.with_inclusion(#inclusion_::Excluded)));
    } else if attrs.include.is_some() {
        tokens.extend(quote!(.with_inclusion(#inclusion_::Included)));
    }
    if attrs.required.is_some() {
        tokens.extend(quote!(.with_required(true)));
    }
    tokens
}

fn constructor_tokens(pb_reflect_path: &syn::Path, ctor: &ReflectConstructor) -> TokenStream {
    let constructor_info_ = crate::path::constructor_info_(pb_reflect_path);
    let constructor_args_ = crate::path::constructor_args_(pb_reflect_path);
    let construct_error_ = crate::path::construct_error_(pb_reflect_path);
    let param_info_ = crate::path::param_info_(pb_reflect_path);
    let reflect_ = crate::path::reflect_(pb_reflect_path);
    let box_ = crate::path::box_(pb_reflect_path);
    let result_ = crate::path::result_();

    let ident = &ctor.ident;
    let name = ident.to_string();

    let params = ctor.params.iter().enumerate().map(|(index, param)| {
        let ty = &param.ty;
        let param_name = &param.name;
        let for_member = if param.member != param.name {
            let member = &param.member;
            quote!(.for_member(#member))
        } else {
            crate::utils::empty()
        };
        quote!(#param_info_::new::<#ty>(#param_name, #index) #for_member)
    });

    let mutability = if ctor.params.is_empty() {
        crate::utils::empty()
    } else {
        quote!(mut)
    };

    let takes = ctor.params.iter().map(|param| {
        let ty = &param.ty;
        quote!(__args.take::<#ty>()?)
    });

    quote! {
        #constructor_info_::new(
            #name,
            &[ #(#params),* ],
            |#mutability __args: #constructor_args_| -> #result_<#box_<dyn #reflect_>, #construct_error_> {
                let __value = Self::#ident( #(#takes),* );
                __args.finish()?;
                #result_::Ok(#box_::new(__value) as #box_<dyn #reflect_>)
            },
        )
    }
}
