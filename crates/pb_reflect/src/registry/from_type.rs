use crate::info::Typed;

/// Builds a [`TypeTrait`] for the concrete type `T`.
///
/// `#[derive(Reflect)]` calls this for every `#[reflect(type_trait = ...)]`
/// and passes the result to [`TypeMeta::insert_trait`].
///
/// # Example
///
/// ```
/// use pb_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
///
/// [`TypeTrait`]: crate::registry::TypeTrait
/// [`TypeMeta::insert_trait`]: crate::registry::TypeMeta::insert_trait
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
