use core::fmt;

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Policies

/// Which accessors a member exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// Read-only: serialized, but only restored through a constructor.
    Read,
    /// Write-only: never serialized, assigned when present in the payload.
    Write,
    ReadWrite,
}

impl Access {
    #[inline]
    pub const fn is_readable(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// Declared visibility of a member.
///
/// This is declared per member, not inferred from the Rust `pub` modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// Whether a member takes part in the round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inclusion {
    Included,
    /// Skipped when serializing, and left at its construction default when
    /// deserializing even if the payload carries a value for it.
    Excluded,
}

// -----------------------------------------------------------------------------
// MemberInfo

/// The descriptor of a named member of a struct.
///
/// Members are public and included by default. Marking a member
/// [`Visibility::Private`] also excludes it, unless inclusion is set again
/// afterwards.
///
/// # Example
///
/// ```
/// use pb_reflect::info::{Inclusion, MemberInfo, Visibility};
///
/// let hidden = MemberInfo::new::<i32>("secret").with_visibility(Visibility::Private);
/// assert_eq!(hidden.inclusion(), Inclusion::Excluded);
///
/// let opted_in = MemberInfo::new::<i32>("secret")
///     .with_visibility(Visibility::Private)
///     .with_inclusion(Inclusion::Included);
/// assert!(opted_in.is_serialized());
/// ```
#[derive(Clone)]
pub struct MemberInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    access: Access,
    visibility: Visibility,
    inclusion: Inclusion,
    required: bool,
}

impl MemberInfo {
    /// Creates a public, included, read-write member of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            access: Access::ReadWrite,
            visibility: Visibility::Public,
            inclusion: Inclusion::Included,
            required: false,
        }
    }

    #[inline]
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Sets the visibility. `Private` resets the inclusion to `Excluded`.
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        if visibility == Visibility::Private {
            self.inclusion = Inclusion::Excluded;
        }
        self
    }

    #[inline]
    pub fn with_inclusion(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Marks the member as non-optional: deserialization fails with
    /// `UnresolvedMember` when the payload lacks it.
    #[inline]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type.
    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the info of the declared type.
    ///
    /// Resolved lazily, so recursive types do not recurse while building their info.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub fn access(&self) -> Access {
        self.access
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns `true` if the member is included in the round trip.
    #[inline]
    pub fn is_serialized(&self) -> bool {
        self.inclusion == Inclusion::Included
    }
}

impl fmt::Debug for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("access", &self.access)
            .field("visibility", &self.visibility)
            .field("inclusion", &self.inclusion)
            .field("required", &self.required)
            .finish()
    }
}
