use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::info::{ConstructorInfo, MemberInfo, Type, TypePath, Typed};

/// The shape of a struct: its members, base types and constructors.
///
/// Members keep declaration order. A declared base contributes its members
/// first, so the members of a subtype start with those of its base.
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Base { a: i32 }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Derived {
///     #[reflect(base)]
///     base: Base,
///     b: String,
/// }
///
/// let info = Derived::type_info().as_struct().unwrap();
/// let names: Vec<_> = info.members().iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["a", "b"]);
/// assert!(info.extends(core::any::TypeId::of::<Base>()));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    members: Box<[MemberInfo]>,
    bases: Box<[Type]>,
    constructors: Box<[ConstructorInfo]>,
}

impl StructInfo {
    /// Creates the info of `T` with the given members and no constructor.
    pub fn new<T: TypePath>(members: &[MemberInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            members: members.into(),
            bases: Box::new([]),
            constructors: Box::new([]),
        }
    }

    /// Declares `B` as the base: its members are prepended and its bases inherited.
    pub fn with_base<B: Typed>(mut self) -> Self {
        let mut bases = Vec::with_capacity(1 + self.bases.len());
        bases.push(Type::of::<B>());
        if let Ok(base) = B::type_info().as_struct() {
            let mut members = base.members.to_vec();
            members.extend(self.members.iter().cloned());
            self.members = members.into_boxed_slice();
            bases.extend(base.bases.iter().copied());
        }
        bases.extend(self.bases.iter().copied());
        self.bases = bases.into_boxed_slice();
        self
    }

    /// Appends a constructor. Declaration order breaks ranking ties.
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        let mut constructors = self.constructors.into_vec();
        constructors.push(constructor);
        self.constructors = constructors.into_boxed_slice();
        self
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns all members in declaration order.
    #[inline]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    /// Returns the member with exactly this name.
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Returns the member with this name, ignoring ASCII case if no exact match exists.
    pub fn member_ignore_case(&self, name: &str) -> Option<&MemberInfo> {
        self.member(name).or_else(|| {
            self.members
                .iter()
                .find(|m| m.name().eq_ignore_ascii_case(name))
        })
    }

    /// Returns the transitive base types, nearest first.
    #[inline]
    pub fn bases(&self) -> &[Type] {
        &self.bases
    }

    /// Returns `true` if `type_id` is a (transitive) base of this struct.
    pub fn extends(&self, type_id: TypeId) -> bool {
        self.bases.iter().any(|base| base.id() == type_id)
    }

    /// Returns the declared constructors in declaration order.
    #[inline]
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }
}
