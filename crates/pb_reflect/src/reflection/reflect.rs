use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of reflection.
///
/// A type implementing `Reflect` exposes its shape through [`reflect_ref`]
/// and [`reflect_mut`], its static descriptor through [`reflect_type_info`]
/// and its canonical name through [`reflect_type_path`].
///
/// Implement it with [`#[derive(Reflect)]`](crate::derive::Reflect), manual
/// implementations are rarely needed.
///
/// # Example
///
/// ```
/// use pb_reflect::{Reflect, derive::Reflect};
/// use pb_reflect::ops::ReflectRef;
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Box<dyn Reflect> = Box::new(Point { x: 1, y: 2 });
/// let ReflectRef::Struct(s) = point.reflect_ref() else { unreachable!() };
/// assert_eq!(s.field("y").unwrap().downcast_ref::<i32>(), Some(&2));
///
/// let point = point.take::<Point>().unwrap();
/// assert_eq!(point.x, 1);
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`reflect_type_path`]: crate::info::DynamicTypePath::reflect_type_path
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value` if both have the same type.
    ///
    /// Returns `value` back on a type mismatch.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the kind of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatter used by `impl Debug for dyn Reflect`.
    ///
    /// The default walks the reflected shape.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        reflect_debug(self.reflect_ref(), f)
    }
}

/// Formats a value through its reflected shape.
fn reflect_debug(value: ReflectRef<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        ReflectRef::Struct(s) => {
            let info = s.reflect_type_info();
            let mut debug = f.debug_struct(info.ty().name());
            if let Ok(info) = info.as_struct() {
                for member in info.members() {
                    if let Some(field) = s.field(member.name()) {
                        debug.field(member.name(), &field as &dyn fmt::Debug);
                    }
                }
            }
            debug.finish()
        }
        ReflectRef::Tuple(t) => {
            let mut debug = f.debug_tuple("");
            for index in 0..t.field_len() {
                if let Some(field) = t.field(index) {
                    debug.field(&field as &dyn fmt::Debug);
                }
            }
            debug.finish()
        }
        ReflectRef::List(l) => f.debug_list().entries(l.iter()).finish(),
        ReflectRef::Map(m) => f.debug_map().entries(m.iter()).finish(),
        ReflectRef::Option(o) => match o.value() {
            Some(v) => f.debug_tuple("Some").field(&v as &dyn fmt::Debug).finish(),
            None => f.write_str("None"),
        },
        ReflectRef::Poly(p) => p.value().reflect_debug(f),
        ReflectRef::Scalar(s) => fmt::Debug::fmt(&s.to_value(), f),
    }
}

// -----------------------------------------------------------------------------
// dyn Reflect

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to type `T`.
    ///
    /// Returns the original box if the underlying type is not `T`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before the downcast"),
        }
    }

    /// Downcasts the boxed value to type `T`, unboxing it.
    ///
    /// Returns the original box if the underlying type is not `T`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}
