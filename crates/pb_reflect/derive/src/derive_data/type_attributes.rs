use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Path, Token, Type, token};

use crate::REFLECT_ATTRIBUTE_NAME;

/// A parameter of a `constructor(name(...))` attribute: `x` or `x: Type`.
#[derive(Debug)]
pub(crate) struct ParamDef {
    pub ident: Ident,
    pub ty: Option<Type>,
}

impl Parse for ParamDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let ty = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self { ident, ty })
    }
}

/// `constructor(name(p0, p1, ...))`, an associated function building the type.
#[derive(Debug)]
pub(crate) struct ConstructorDef {
    pub ident: Ident,
    pub params: Vec<ParamDef>,
}

/// Type level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `type_path = "..."`
    pub type_path: Option<LitStr>,
    /// `default`, the type implements `Default`.
    pub default: Option<Span>,
    /// `auto_register`
    pub auto_register: Option<Span>,
    /// `type_trait = X` or `type_trait(X, Y)`
    pub type_traits: Vec<Path>,
    /// `constructor(...)`, in declaration order.
    pub constructors: Vec<ConstructorDef>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| res.parse_meta(meta))?;
            }
        }
        Ok(res)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            let value = lit.value();
            if value.is_empty() || value.starts_with(':') || value.ends_with(':') || value.contains('<') {
                return Err(syn::Error::new(
                    lit.span(),
                    "`type_path` must be a non-empty path like \"module::Name\", without generics",
                ));
            }
            self.type_path = Some(lit);
            Ok(())
        } else if meta.path.is_ident("default") {
            self.default = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("type_trait") {
            self.parse_type_traits(meta)
        } else if meta.path.is_ident("constructor") {
            self.parse_constructors(meta)
        } else {
            Err(meta.error(
                "unsupported reflect attribute, expected one of: `type_path`, `default`, `constructor`, `type_trait`, `auto_register`",
            ))
        }
    }

    fn parse_type_traits(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.input.peek(Token![=]) {
            let value = meta.value()?;
            if value.peek(token::Paren) {
                let content;
                syn::parenthesized!(content in value);
                let paths = content.parse_terminated(Path::parse, Token![,])?;
                self.type_traits.extend(paths);
            } else {
                self.type_traits.push(value.parse()?);
            }
            Ok(())
        } else {
            meta.parse_nested_meta(|inner| {
                self.type_traits.push(inner.path);
                Ok(())
            })
        }
    }

    fn parse_constructors(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        meta.parse_nested_meta(|ctor| {
            let ident = ctor.path.require_ident()?.clone();
            if self.constructors.iter().any(|c| c.ident == ident) {
                return Err(ctor.error("duplicate constructor"));
            }
            let content;
            syn::parenthesized!(content in ctor.input);
            let params = content.parse_terminated(ParamDef::parse, Token![,])?;
            self.constructors.push(ConstructorDef {
                ident,
                params: params.into_iter().collect(),
            });
            Ok(())
        })
    }
}
