//! Mapping between types and their serialized names, under a trust policy.
//!
//! The [`Binder`] is the single place where a payload's type tag turns into
//! a type to instantiate, so it is where untrusted input is filtered.
//! [`RegistryBinder`] only resolves names that are both inside its
//! [`AllowList`] and registered in its [`TypeRegistry`](crate::registry::TypeRegistry).

// -----------------------------------------------------------------------------
// Modules

mod allow_list;
mod registry_binder;

// -----------------------------------------------------------------------------
// Exports

pub use allow_list::AllowList;
pub use registry_binder::{NameStyle, RegistryBinder};

use alloc::borrow::Cow;

use crate::error::ErrorKind;
use crate::info::{Type, TypeInfo};

/// Maps types to canonical names and back.
///
/// Implementations must reject, with [`ErrorKind::UnknownType`], every name
/// they are not prepared to instantiate from untrusted input.
pub trait Binder: Send + Sync {
    /// Returns the canonical name of `ty`.
    ///
    /// Fails with [`ErrorKind::UnresolvableType`] if the type cannot be named.
    fn name_for(&self, ty: &Type) -> Result<Cow<'static, str>, ErrorKind>;

    /// Resolves a canonical name to the info of a constructible type.
    ///
    /// Fails with [`ErrorKind::UnknownType`] if the name is unknown or not allowed.
    fn type_for(&self, name: &str) -> Result<&'static TypeInfo, ErrorKind>;
}
