use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::binder::{AllowList, Binder, NameStyle, RegistryBinder};
use crate::registry::TypeRegistry;
use crate::serde::{Settings, TypeTagging};

/// The loadable form of [`Settings`] and of the [`RegistryBinder`] policy.
///
/// Every field is optional; unknown fields are rejected so that a misspelt
/// `allowed_type_namespaces` cannot silently leave the allow-list empty.
///
/// # Example
///
/// ```
/// use pb_reflect::registry::TypeRegistry;
/// use pb_reflect::serde::{SettingsConfig, TypeTagging};
///
/// let config: SettingsConfig = serde_json::from_str(r#"{
///     "type_tagging": "on_mismatch",
///     "allowed_type_namespaces": ["shop"]
/// }"#).unwrap();
///
/// let registry = TypeRegistry::new();
/// let binder = config.binder(&registry);
/// let settings = config.settings(&binder);
/// assert_eq!(settings.type_tagging(), TypeTagging::OnMismatch);
/// assert_eq!(settings.type_tag_key(), "$type");
/// assert!(binder.allow_list().allows("shop::Item"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    pub type_tagging: TypeTagging,
    pub type_tag_key: String,
    pub value_key: String,
    /// Namespaces whose types may be named by a payload.
    pub allowed_type_namespaces: Vec<String>,
    /// Allows every registered type. Overrides `allowed_type_namespaces`.
    pub allow_any_registered: bool,
    pub name_style: NameStyle,
    pub max_depth: usize,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            type_tagging: TypeTagging::Off,
            type_tag_key: String::from(Settings::DEFAULT_TYPE_TAG_KEY),
            value_key: String::from(Settings::DEFAULT_VALUE_KEY),
            allowed_type_namespaces: Vec::new(),
            allow_any_registered: false,
            name_style: NameStyle::TypePath,
            max_depth: Settings::DEFAULT_MAX_DEPTH,
        }
    }
}

impl SettingsConfig {
    /// Returns the allow-list described by this config.
    pub fn allow_list(&self) -> AllowList {
        if self.allow_any_registered {
            AllowList::any_registered()
        } else if self.allowed_type_namespaces.is_empty() {
            AllowList::deny_all()
        } else {
            AllowList::namespaces(self.allowed_type_namespaces.iter().cloned())
        }
    }

    /// Builds the binder over `registry`.
    pub fn binder<'r>(&self, registry: &'r TypeRegistry) -> RegistryBinder<'r> {
        RegistryBinder::new(registry, self.allow_list()).with_name_style(self.name_style)
    }

    /// Builds the settings around `binder`.
    pub fn settings<'a>(&self, binder: &'a dyn Binder) -> Settings<'a> {
        Settings::new()
            .with_type_tagging(self.type_tagging)
            .with_type_tag_key(self.type_tag_key.clone())
            .with_value_key(self.value_key.clone())
            .with_max_depth(self.max_depth)
            .with_binder(binder)
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsConfig;
    use crate::binder::{AllowList, NameStyle};
    use crate::serde::TypeTagging;

    #[test]
    fn defaults_deny_everything() {
        let config: SettingsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SettingsConfig::default());
        assert_eq!(config.allow_list(), AllowList::DenyAll);
    }

    #[test]
    fn ron_config() {
        let config: SettingsConfig = ron::from_str(
            r#"(type_tagging: always, name_style: type_name, allow_any_registered: true, max_depth: 16)"#,
        )
        .unwrap();
        assert_eq!(config.type_tagging, TypeTagging::Always);
        assert_eq!(config.name_style, NameStyle::TypeName);
        assert_eq!(config.allow_list(), AllowList::AnyRegistered);
        assert_eq!(config.max_depth, 16);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<SettingsConfig>(r#"{"allowed_namespaces": ["a"]}"#);
        assert!(err.is_err());
    }
}
