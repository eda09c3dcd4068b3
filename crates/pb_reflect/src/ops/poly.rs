use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use crate::info::{Type, TypeInfo, Typed};
use crate::{Extends, Reflect};

// -----------------------------------------------------------------------------
// Poly

/// A slot declared as base type `B` that holds any value extending `B`.
///
/// This is the polymorphic member: it serializes with the type tag of the
/// value it holds whenever that differs from `B`, and the deserializer
/// restores the exact subtype. Behavior that depends on the held type is
/// resolved through the registry (see [`reflect_trait`](crate::derive::reflect_trait)).
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, ops::Poly};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Animal { name: String }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
///     good: bool,
/// }
///
/// let pet: Poly<Animal> = Poly::new(Dog { animal: Animal { name: "rex".into() }, good: true });
/// assert!(pet.is::<Dog>());
/// assert_eq!(pet.downcast_ref::<Dog>().unwrap().animal.name, "rex");
///
/// // A value that does not extend the base is refused at runtime.
/// assert!(Poly::<Animal>::try_from_boxed(Box::new(3_i32)).is_err());
/// ```
pub struct Poly<B> {
    value: Box<dyn Reflect>,
    marker: PhantomData<fn() -> B>,
}

impl<B: Typed> Poly<B> {
    /// Wraps a value whose type declares `B` as its base.
    #[inline]
    pub fn new<S: Extends<B>>(value: S) -> Self {
        Self {
            value: Box::new(value),
            marker: PhantomData,
        }
    }

    /// Wraps a boxed value if its type is assignable to `B`.
    pub fn try_from_boxed(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        if value
            .reflect_type_info()
            .is_assignable_to(TypeId::of::<B>())
        {
            Ok(Self {
                value,
                marker: PhantomData,
            })
        } else {
            Err(value)
        }
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> &dyn Reflect {
        &*self.value
    }

    /// Returns the held value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.value
    }

    /// Returns the held value.
    #[inline]
    pub fn into_inner(self) -> Box<dyn Reflect> {
        self.value
    }

    /// Returns `true` if the held value is a `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Downcasts the held value.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns the info of the held value's runtime type.
    #[inline]
    pub fn runtime_type_info(&self) -> &'static TypeInfo {
        self.value.reflect_type_info()
    }
}

impl<B: Typed + Reflect + Default> Default for Poly<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B> fmt::Debug for Poly<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// PolyValue

/// Object-safe access to a [`Poly`] slot.
pub trait PolyValue: Reflect {
    /// Returns the held value.
    fn value(&self) -> &dyn Reflect;

    /// Returns the held value mutably.
    fn value_mut(&mut self) -> &mut dyn Reflect;

    /// Returns the declared base type.
    fn base_ty(&self) -> Type;
}
