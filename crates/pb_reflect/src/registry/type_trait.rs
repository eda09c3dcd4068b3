use alloc::boxed::Box;
use core::any::Any;

/// A capability of a type, stored in its [`TypeMeta`](crate::registry::TypeMeta).
///
/// Any `Clone + Send + Sync + 'static` type is a type trait. They are usually
/// tables of function pointers built by [`FromType`](crate::registry::FromType).
pub trait TypeTrait: Any + Send + Sync {
    /// Clones the trait object.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    /// Returns `true` if the underlying type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts to the concrete type trait.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts to the concrete type trait.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl core::fmt::Debug for dyn TypeTrait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("TypeTrait")
    }
}
