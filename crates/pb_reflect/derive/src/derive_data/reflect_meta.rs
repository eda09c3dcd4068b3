use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// What every generated impl needs to know about the type itself.
pub(crate) struct ReflectMeta<'a> {
    pb_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types mentioning a type parameter, bounded in every `where` clause.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("pb_reflect_path", &self.pb_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        if let Some(param) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(param, "reflected types cannot have lifetime parameters"));
        }
        if let Some(param) = generics.const_params().next() {
            return Err(syn::Error::new_spanned(param, "reflected types cannot have const parameters"));
        }
        Ok(Self {
            pb_reflect_path: crate::path::pb_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        })
    }

    /// Records the field types, keeping those that mention a type parameter.
    pub(super) fn set_active_types<'t>(&mut self, field_types: impl Iterator<Item = &'t Type>) {
        let idents = self.type_param_idents();
        if idents.is_empty() {
            return;
        }
        for ty in field_types {
            let mentions = crate::utils::is_any_ident_in_token_stream(&idents, ty.to_token_stream());
            if mentions && !self.active_types.contains(ty) {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn pb_reflect_path(&self) -> &Path {
        &self.pb_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    pub fn type_param_idents(&self) -> Vec<Ident> {
        self.generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect()
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// Every type parameter and every field type mentioning one is bounded
    /// by `Reflect + GetTypeMeta`, and `Self` by `Send + Sync + 'static`
    /// (plus `Default` under `#[reflect(default)]`).
    /// The bounds are the same for all generated impls.
    pub fn split_generics(&self) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let pb_reflect_path = &self.pb_reflect_path;
        let reflect_ = crate::path::reflect_(pb_reflect_path);
        let get_type_meta_ = crate::path::get_type_meta_(pb_reflect_path);
        let send_sync_static_ = crate::path::send_sync_static_();

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        if self.is_generic() {
            generic_where_clause.extend(quote! { Self: #send_sync_static_, });

            if self.attrs.default.is_some() {
                let default_ = crate::path::default_();
                generic_where_clause.extend(quote! { Self: #default_, });
            }

            for param in self.generics.type_params() {
                let ident = &param.ident;
                generic_where_clause.extend(quote! { #ident: #reflect_ + #get_type_meta_, });
            }

            for ty in &self.active_types {
                generic_where_clause.extend(quote! { #ty: #reflect_ + #get_type_meta_, });
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}
