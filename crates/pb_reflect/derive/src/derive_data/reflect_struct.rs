use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{ConstructorDef, FieldAttributes, ReflectMeta, TypeAttributes};

/// A named field of the struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// The member name, `rename` applied.
    pub member: String,
}

/// A constructor parameter, resolved against the fields.
pub(crate) struct ReflectParam {
    pub name: String,
    pub member: String,
    pub ty: Type,
}

/// A declared constructor with resolved parameters.
pub(crate) struct ReflectConstructor {
    pub ident: Ident,
    pub params: Vec<ReflectParam>,
}

/// Everything `#[derive(Reflect)]` needs about a struct.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    base: Option<StructField<'a>>,
    members: Vec<StructField<'a>>,
    constructors: Vec<ReflectConstructor>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Some(&fields.named),
                Fields::Unit => None,
                Fields::Unnamed(fields) => {
                    return Err(syn::Error::new(
                        fields.span(),
                        "`#[derive(Reflect)]` does not support tuple structs, use named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`#[derive(Reflect)]` does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`#[derive(Reflect)]` does not support unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let mut meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        let mut base: Option<StructField<'a>> = None;
        let mut members: Vec<StructField<'a>> = Vec::new();

        for field in named.into_iter().flatten() {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let member = match &attrs.rename {
                Some(lit) => lit.value(),
                None => ident.to_string(),
            };
            let is_base = attrs.base.is_some();
            let field = StructField {
                ident,
                ty: &field.ty,
                attrs,
                member,
            };
            if is_base {
                if base.is_some() {
                    return Err(syn::Error::new(ident.span(), "only one field can be the `base`"));
                }
                base = Some(field);
            } else {
                if members.iter().any(|m| m.member == field.member) {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("duplicate member name `{}`", field.member),
                    ));
                }
                members.push(field);
            }
        }

        meta.set_active_types(base.iter().chain(&members).map(|f| f.ty));

        let constructors = meta
            .attrs()
            .constructors
            .iter()
            .map(|def| resolve_constructor(def, &members))
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            meta,
            base,
            members,
            constructors,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn base(&self) -> Option<&StructField<'a>> {
        self.base.as_ref()
    }

    /// The own members in declaration order, the base field excluded.
    #[inline]
    pub fn members(&self) -> &[StructField<'a>] {
        &self.members
    }

    #[inline]
    pub fn constructors(&self) -> &[ReflectConstructor] {
        &self.constructors
    }

    /// Every field type, the base first, without duplicates.
    pub fn field_types(&self) -> Vec<&'a Type> {
        let mut types: Vec<&'a Type> = Vec::new();
        for field in self.base.iter().chain(&self.members) {
            if !types.contains(&field.ty) {
                types.push(field.ty);
            }
        }
        types
    }
}

/// Finds the field a bare parameter names: by identifier or member name,
/// exactly first, then ignoring ASCII case.
fn find_field<'f, 'a>(members: &'f [StructField<'a>], name: &str) -> Option<&'f StructField<'a>> {
    members
        .iter()
        .find(|f| *f.ident == name || f.member == name)
        .or_else(|| {
            members.iter().find(|f| {
                f.ident.to_string().eq_ignore_ascii_case(name) || f.member.eq_ignore_ascii_case(name)
            })
        })
}

fn resolve_constructor(def: &ConstructorDef, members: &[StructField]) -> syn::Result<ReflectConstructor> {
    let mut params = Vec::with_capacity(def.params.len());
    for param in &def.params {
        let name = param.ident.to_string();
        let field = find_field(members, &name);
        let resolved = match (&param.ty, field) {
            (Some(ty), Some(field)) => ReflectParam {
                member: field.member.clone(),
                name,
                ty: ty.clone(),
            },
            (Some(ty), None) => ReflectParam {
                member: name.clone(),
                name,
                ty: ty.clone(),
            },
            (None, Some(field)) => ReflectParam {
                member: field.member.clone(),
                name,
                ty: field.ty.clone(),
            },
            (None, None) => {
                return Err(syn::Error::new(
                    param.ident.span(),
                    format!(
                        "parameter `{name}` of constructor `{}` names no field, write its type as `{name}: Type`",
                        def.ident
                    ),
                ));
            }
        };
        params.push(resolved);
    }
    Ok(ReflectConstructor {
        ident: def.ident.clone(),
        params,
    })
}
