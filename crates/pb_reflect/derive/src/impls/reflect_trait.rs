use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemTrait, parse_macro_input};

/// Generate `Reflect{Trait}` for `#[reflect_trait]`.
pub(crate) fn impl_reflect_trait(input: TokenStream) -> TokenStream {
    let item_trait = parse_macro_input!(input as ItemTrait);

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item_trait.generics,
            "`#[reflect_trait]` does not support generic traits",
        )
        .into_compile_error()
        .into();
    }

    let pb_reflect_path = crate::path::pb_reflect();
    let reflect_ = crate::path::reflect_(&pb_reflect_path);
    let typed_ = crate::path::typed_(&pb_reflect_path);
    let from_type_ = crate::path::from_type_(&pb_reflect_path);
    let box_ = crate::path::box_(&pb_reflect_path);
    let option_ = crate::path::option_();
    let result_ = crate::path::result_();

    let vis = &item_trait.vis;
    let trait_ident = &item_trait.ident;
    let reflect_trait_ident = format_ident!("Reflect{}", trait_ident);

    let struct_doc = format!(
        " A type trait casting reflected values to `dyn {trait_ident}`, generated by `#[reflect_trait]`."
    );
    let get_doc = format!(" Downcasts `value` to `&dyn {trait_ident}`.");
    let get_mut_doc = format!(" Downcasts `value` to `&mut dyn {trait_ident}`.");
    let get_boxed_doc = format!(
        " Downcasts `value` to `Box<dyn {trait_ident}>`, returning it back if its type does not match."
    );

    TokenStream::from(quote! {
        #item_trait

        #[doc = #struct_doc]
        #[derive(Clone)]
        #vis struct #reflect_trait_ident {
            get_func: fn(&dyn #reflect_) -> #option_<&dyn #trait_ident>,
            get_mut_func: fn(&mut dyn #reflect_) -> #option_<&mut dyn #trait_ident>,
            get_boxed_func: fn(#box_<dyn #reflect_>) -> #result_<#box_<dyn #trait_ident>, #box_<dyn #reflect_>>,
        }

        impl #reflect_trait_ident {
            #[doc = #get_doc]
            #[inline]
            pub fn get<'a>(&self, value: &'a dyn #reflect_) -> #option_<&'a dyn #trait_ident> {
                (self.get_func)(value)
            }

            #[doc = #get_mut_doc]
            #[inline]
            pub fn get_mut<'a>(&self, value: &'a mut dyn #reflect_) -> #option_<&'a mut dyn #trait_ident> {
                (self.get_mut_func)(value)
            }

            #[doc = #get_boxed_doc]
            #[inline]
            pub fn get_boxed(
                &self,
                value: #box_<dyn #reflect_>,
            ) -> #result_<#box_<dyn #trait_ident>, #box_<dyn #reflect_>> {
                (self.get_boxed_func)(value)
            }
        }

        impl<T: #trait_ident + #reflect_ + #typed_> #from_type_<T> for #reflect_trait_ident {
            fn from_type() -> Self {
                Self {
                    get_func: |value| {
                        <dyn #reflect_>::downcast_ref::<T>(value).map(|value| value as &dyn #trait_ident)
                    },
                    get_mut_func: |value| {
                        <dyn #reflect_>::downcast_mut::<T>(value).map(|value| value as &mut dyn #trait_ident)
                    },
                    get_boxed_func: |value| {
                        <dyn #reflect_>::downcast::<T>(value).map(|value| value as #box_<dyn #trait_ident>)
                    },
                }
            }
        }
    })
}
