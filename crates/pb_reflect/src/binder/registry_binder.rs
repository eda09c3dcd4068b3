use alloc::borrow::Cow;
use alloc::string::ToString;

use serde::Deserialize;
use tracing::warn;

use crate::binder::{AllowList, Binder};
use crate::error::ErrorKind;
use crate::info::{Type, TypeInfo};
use crate::registry::{TypeMeta, TypeRegistry};

/// How a [`RegistryBinder`] names types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// The full type path, e.g. `shop::cart::Line`.
    #[default]
    TypePath,
    /// The short type name, e.g. `Line`. Ambiguous names cannot be used.
    TypeName,
}

/// A [`Binder`] backed by a [`TypeRegistry`] and an [`AllowList`].
///
/// Names resolve only to registered types whose type path is allowed.
/// Everything else is reported as [`ErrorKind::UnknownType`] and logged.
///
/// # Example
///
/// ```
/// use pb_reflect::derive::Reflect;
/// use pb_reflect::binder::{AllowList, Binder, RegistryBinder};
/// use pb_reflect::error::ErrorKind;
/// use pb_reflect::info::{Type, Typed};
/// use pb_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::Item")]
/// struct Item { name: String }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Item>();
///
/// let binder = RegistryBinder::new(&registry, AllowList::namespaces(["shop"]));
/// assert_eq!(binder.name_for(&Type::of::<Item>()).unwrap(), "shop::Item");
/// assert_eq!(binder.type_for("shop::Item").unwrap().type_path(), "shop::Item");
///
/// // Registered, but outside the allow-list.
/// assert!(matches!(
///     binder.type_for("alloc::string::String"),
///     Err(ErrorKind::UnknownType { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBinder<'r> {
    registry: &'r TypeRegistry,
    allow: AllowList,
    style: NameStyle,
}

impl<'r> RegistryBinder<'r> {
    pub fn new(registry: &'r TypeRegistry, allow: AllowList) -> Self {
        Self {
            registry,
            allow,
            style: NameStyle::TypePath,
        }
    }

    #[inline]
    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn allow_list(&self) -> &AllowList {
        &self.allow
    }

    #[inline]
    pub fn name_style(&self) -> NameStyle {
        self.style
    }

    #[inline]
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    fn lookup(&self, name: &str) -> Option<&'r TypeMeta> {
        match self.style {
            NameStyle::TypePath => self.registry.get_with_type_path(name),
            NameStyle::TypeName => self.registry.get_with_type_name(name),
        }
    }
}

impl Binder for RegistryBinder<'_> {
    fn name_for(&self, ty: &Type) -> Result<Cow<'static, str>, ErrorKind> {
        let unresolvable = || ErrorKind::UnresolvableType {
            type_path: Cow::Borrowed(ty.path()),
        };

        if !self.registry.contains(ty.id()) || ty.path().starts_with(['(', '[']) {
            return Err(unresolvable());
        }
        match self.style {
            NameStyle::TypePath => Ok(Cow::Borrowed(ty.path())),
            NameStyle::TypeName if self.registry.is_ambiguous(ty.name()) => Err(unresolvable()),
            NameStyle::TypeName => Ok(Cow::Borrowed(ty.name())),
        }
    }

    fn type_for(&self, name: &str) -> Result<&'static TypeInfo, ErrorKind> {
        let reject = |reason: &'static str| {
            warn!(name, reason, "rejected type name");
            ErrorKind::UnknownType {
                name: name.to_string(),
            }
        };

        if self.style == NameStyle::TypePath && !self.allow.allows(name) {
            return Err(reject("not allowed"));
        }
        let Some(meta) = self.lookup(name) else {
            return Err(reject("not registered"));
        };
        if !self.allow.allows(meta.type_path()) {
            return Err(reject("not allowed"));
        }
        Ok(meta.type_info())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{NameStyle, RegistryBinder};
    use crate::binder::{AllowList, Binder};
    use crate::error::ErrorKind;
    use crate::info::Type;
    use crate::registry::TypeRegistry;

    #[test]
    fn deny_all_rejects_registered_types() {
        let registry = TypeRegistry::new();
        let binder = RegistryBinder::new(&registry, AllowList::default());
        let err = binder.type_for("alloc::string::String").unwrap_err();
        assert!(matches!(err, ErrorKind::UnknownType { ref name } if name == "alloc::string::String"));
        assert!(err.is_rejection());
    }

    #[test]
    fn unregistered_names_are_unknown() {
        let registry = TypeRegistry::new();
        let binder = RegistryBinder::new(&registry, AllowList::any_registered());
        assert!(matches!(
            binder.type_for("SomeNamespace.Evil"),
            Err(ErrorKind::UnknownType { .. })
        ));
        assert!(binder.type_for("alloc::string::String").is_ok());
    }

    #[test]
    fn short_names() {
        let registry = TypeRegistry::new();
        let binder = RegistryBinder::new(&registry, AllowList::namespaces(["alloc"]))
            .with_name_style(NameStyle::TypeName);
        assert_eq!(binder.name_for(&Type::of::<String>()).unwrap(), "String");
        assert_eq!(binder.type_for("String").unwrap().type_path(), "alloc::string::String");
        // `i32` has no namespace, so no allow-list can name it.
        assert!(binder.type_for("i32").is_err());
    }

    #[test]
    fn unnamed_types() {
        let mut registry = TypeRegistry::new();
        registry.register::<(i32, String)>();
        let binder = RegistryBinder::new(&registry, AllowList::any_registered());
        assert!(matches!(
            binder.name_for(&Type::of::<(i32, String)>()),
            Err(ErrorKind::UnresolvableType { .. })
        ));
        assert!(matches!(
            binder.name_for(&Type::of::<Vec<u8>>()),
            Err(ErrorKind::UnresolvableType { .. })
        ));
    }
}
