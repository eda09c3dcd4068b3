use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// Builds a default value of a registered type.
///
/// # Example
///
/// ```
/// use pb_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// let registry = TypeRegistry::new();
///
/// let generator = registry
///     .get_with_type_name("String").unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// assert_eq!(generator.default().take::<String>().unwrap(), "");
/// ```
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    /// Calls the type's [`Default`].
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Typed + Reflect> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}
