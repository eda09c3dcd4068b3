use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `base`
    pub base: Option<Span>,
    /// `rename = "..."`
    pub rename: Option<LitStr>,
    /// `readonly`
    pub readonly: Option<Span>,
    /// `writeonly`
    pub writeonly: Option<Span>,
    /// `private`
    pub private: Option<Span>,
    /// `exclude`
    pub exclude: Option<Span>,
    /// `include`
    pub include: Option<Span>,
    /// `required`
    pub required: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| res.parse_meta(meta))?;
            }
        }
        res.check()?;
        Ok(res)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();
        let slot = if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "member name cannot be empty"));
            }
            self.rename = Some(lit);
            return Ok(());
        } else if meta.path.is_ident("base") {
            &mut self.base
        } else if meta.path.is_ident("readonly") {
            &mut self.readonly
        } else if meta.path.is_ident("writeonly") {
            &mut self.writeonly
        } else if meta.path.is_ident("private") {
            &mut self.private
        } else if meta.path.is_ident("exclude") {
            &mut self.exclude
        } else if meta.path.is_ident("include") {
            &mut self.include
        } else if meta.path.is_ident("required") {
            &mut self.required
        } else {
            return Err(meta.error(
                "unsupported reflect attribute, expected one of: `base`, `rename`, `readonly`, `writeonly`, `private`, `exclude`, `include`, `required`",
            ));
        };
        *slot = Some(span);
        Ok(())
    }

    fn check(&self) -> syn::Result<()> {
        if let (Some(_), Some(span)) = (self.readonly, self.writeonly) {
            return Err(syn::Error::new(span, "`readonly` and `writeonly` cannot be combined"));
        }
        if let (Some(_), Some(span)) = (self.exclude, self.include) {
            return Err(syn::Error::new(span, "`exclude` and `include` cannot be combined"));
        }
        if let Some(span) = self.base {
            let alone = self.rename.is_none()
                && self.readonly.is_none()
                && self.writeonly.is_none()
                && self.private.is_none()
                && self.exclude.is_none()
                && self.include.is_none()
                && self.required.is_none();
            if !alone {
                return Err(syn::Error::new(span, "a `base` field takes no other reflect attribute"));
            }
        }
        Ok(())
    }
}
