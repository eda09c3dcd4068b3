use crate::Reflect;

/// Marks that `Self` declares `B` as its base type.
///
/// `#[derive(Reflect)]` implements this for the type of a `#[reflect(base)]`
/// field, and every reflected type extends itself. It gates the compile-time
/// constructor [`Poly::new`](crate::ops::Poly::new); the runtime relation used by
/// the deserializer lives in [`TypeInfo::is_assignable_to`](crate::info::TypeInfo::is_assignable_to).
///
/// # Example
///
/// ```
/// use pb_reflect::{Extends, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Shape { sides: u8 }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Square {
///     #[reflect(base)]
///     shape: Shape,
///     side: f32,
/// }
///
/// fn accepts<T: Extends<Shape>>(_: &T) {}
/// accepts(&Square::default());
/// accepts(&Shape::default());
/// ```
pub trait Extends<B: ?Sized>: Reflect {}

impl<T: Reflect> Extends<T> for T {}
