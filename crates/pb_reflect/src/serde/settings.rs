use alloc::string::String;
use core::fmt;

use serde::Deserialize;

use crate::binder::Binder;
use crate::error::ErrorKind;

// -----------------------------------------------------------------------------
// TypeTagging

/// When the serializer writes a type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTagging {
    /// Never write tags, and ignore them when reading.
    #[default]
    Off,
    /// Tag a value whose runtime type differs from its declared type.
    OnMismatch,
    /// Tag every object.
    Always,
}

// -----------------------------------------------------------------------------
// Settings

/// Per-call options shared by the [`SerializeDriver`] and the [`DeserializeDriver`].
///
/// Tagging requires a [`Binder`]; the drivers check this when they are
/// created and fail with [`ErrorKind::InvalidSettings`] otherwise.
///
/// # Example
///
/// ```
/// use pb_reflect::binder::{AllowList, RegistryBinder};
/// use pb_reflect::registry::TypeRegistry;
/// use pb_reflect::serde::{SerializeDriver, Settings, TypeTagging};
///
/// let registry = TypeRegistry::new();
/// let binder = RegistryBinder::new(&registry, AllowList::deny_all());
///
/// let settings = Settings::new().with_type_tagging(TypeTagging::OnMismatch);
/// assert!(SerializeDriver::new(&settings).is_err());
///
/// let settings = settings.with_binder(&binder).with_type_tag_key("@t");
/// assert!(SerializeDriver::new(&settings).is_ok());
/// assert_eq!(settings.type_tag_key(), "@t");
/// ```
///
/// [`SerializeDriver`]: crate::serde::SerializeDriver
/// [`DeserializeDriver`]: crate::serde::DeserializeDriver
#[derive(Clone)]
pub struct Settings<'a> {
    type_tagging: TypeTagging,
    type_tag_key: String,
    value_key: String,
    binder: Option<&'a dyn Binder>,
    max_depth: usize,
}

impl Default for Settings<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Settings<'a> {
    pub const DEFAULT_TYPE_TAG_KEY: &'static str = "$type";
    pub const DEFAULT_VALUE_KEY: &'static str = "$value";
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Tagging off, no binder, `"$type"` / `"$value"` keys, depth limit 128.
    pub fn new() -> Self {
        Self {
            type_tagging: TypeTagging::Off,
            type_tag_key: String::from(Self::DEFAULT_TYPE_TAG_KEY),
            value_key: String::from(Self::DEFAULT_VALUE_KEY),
            binder: None,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    #[inline]
    pub fn with_type_tagging(mut self, type_tagging: TypeTagging) -> Self {
        self.type_tagging = type_tagging;
        self
    }

    #[inline]
    pub fn with_type_tag_key(mut self, key: impl Into<String>) -> Self {
        self.type_tag_key = key.into();
        self
    }

    /// Sets the key holding the payload of a tagged value that is not an object.
    #[inline]
    pub fn with_value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    #[inline]
    pub fn with_binder(mut self, binder: &'a dyn Binder) -> Self {
        self.binder = Some(binder);
        self
    }

    /// Sets how deep values may nest before a walk fails.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn type_tagging(&self) -> TypeTagging {
        self.type_tagging
    }

    #[inline]
    pub fn type_tag_key(&self) -> &str {
        &self.type_tag_key
    }

    #[inline]
    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    #[inline]
    pub fn binder(&self) -> Option<&'a dyn Binder> {
        self.binder
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the binder when tags are written and read.
    #[inline]
    pub(crate) fn tagging_binder(&self) -> Option<&'a dyn Binder> {
        match self.type_tagging {
            TypeTagging::Off => None,
            TypeTagging::OnMismatch | TypeTagging::Always => self.binder,
        }
    }

    /// Checks the combination of options.
    pub fn validate(&self) -> Result<(), ErrorKind> {
        if self.type_tagging != TypeTagging::Off && self.binder.is_none() {
            return Err(ErrorKind::InvalidSettings("type tagging requires a binder"));
        }
        if self.type_tag_key.is_empty() || self.value_key.is_empty() {
            return Err(ErrorKind::InvalidSettings("tag and value keys must not be empty"));
        }
        if self.type_tag_key == self.value_key {
            return Err(ErrorKind::InvalidSettings("tag and value keys must differ"));
        }
        if self.max_depth == 0 {
            return Err(ErrorKind::InvalidSettings("max_depth must be at least 1"));
        }
        Ok(())
    }
}

impl fmt::Debug for Settings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("type_tagging", &self.type_tagging)
            .field("type_tag_key", &self.type_tag_key)
            .field("value_key", &self.value_key)
            .field("binder", &self.binder.is_some())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, TypeTagging};
    use crate::error::ErrorKind;

    #[test]
    fn invalid_combinations() {
        let check = |s: Settings<'_>| matches!(s.validate(), Err(ErrorKind::InvalidSettings(_)));
        assert!(check(Settings::new().with_type_tagging(TypeTagging::Always)));
        assert!(check(Settings::new().with_type_tag_key("")));
        assert!(check(Settings::new().with_value_key("$type")));
        assert!(check(Settings::new().with_max_depth(0)));
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn tagging_off_hides_the_binder() {
        let settings = Settings::new();
        assert!(settings.tagging_binder().is_none());
    }
}
