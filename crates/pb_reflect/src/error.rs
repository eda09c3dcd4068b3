//! The error taxonomy shared by the binder, the drivers and the codecs.
//!
//! Every failure is terminal for the call that raised it: no partial value is
//! returned and nothing is retried. [`ErrorKind::UnknownType`] and
//! [`ErrorKind::TypeMismatch`] raised while reading untrusted input are
//! rejections, callers must not fall back to a "nearest" type.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::info::{ConstructError, ReflectKindError};

// -----------------------------------------------------------------------------
// ErrorKind

/// What went wrong.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The binder cannot produce a name for the type.
    #[error("type `{type_path}` cannot be named by the binder")]
    UnresolvableType { type_path: Cow<'static, str> },

    /// The name is not registered, or lies outside the allow-list.
    #[error("type name `{name}` is unknown or not allowed")]
    UnknownType { name: String },

    /// No declared constructor can be satisfied by the available members.
    #[error(
        "no constructor of `{type_path}` can be satisfied by the members [{}]",
        .available.join(", ")
    )]
    NoMatchingConstructor {
        type_path: &'static str,
        available: Vec<String>,
    },

    /// The payload, or the type it claims, does not fit the expected type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: Cow<'static, str>,
        found: Cow<'static, str>,
    },

    /// `null` was read for a type that cannot represent absence.
    #[error("null is not a valid `{type_path}`")]
    NonNullableViolation { type_path: &'static str },

    /// A member marked as required is absent and no constructor covers it.
    #[error("required member `{member}` of `{type_path}` is missing")]
    UnresolvedMember {
        type_path: &'static str,
        member: &'static str,
    },

    /// The codec could not parse (or render) the text.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The value graph nests deeper than [`Settings::max_depth`](crate::serde::Settings::max_depth).
    #[error("nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// The [`Settings`](crate::serde::Settings) are inconsistent.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),

    /// The I/O collaborator failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ErrorKind {
    /// Shorthand for a [`TypeMismatch`](ErrorKind::TypeMismatch).
    pub fn mismatch(
        expected: impl Into<Cow<'static, str>>,
        found: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns `true` for the kinds that reject untrusted input on security grounds.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnknownType { .. } | Self::TypeMismatch { .. })
    }
}

impl From<ConstructError> for ErrorKind {
    fn from(value: ConstructError) -> Self {
        match value {
            ConstructError::ArgumentType {
                expected, found, ..
            } => Self::mismatch(expected, found),
            other => Self::mismatch("a valid constructor call", other.to_string()),
        }
    }
}

impl From<ReflectKindError> for ErrorKind {
    #[inline]
    fn from(value: ReflectKindError) -> Self {
        Self::mismatch(value.expected.to_string(), value.received.to_string())
    }
}

// -----------------------------------------------------------------------------
// Error

/// An [`ErrorKind`] plus the value path where it was raised.
///
/// The path (e.g. `$.member7.x`) is only recorded with the `debug` feature.
#[derive(Debug, Error)]
#[error("{kind}{location}")]
pub struct Error {
    kind: ErrorKind,
    location: Location,
}

impl Error {
    pub(crate) fn at(kind: ErrorKind, path: String) -> Self {
        Self {
            kind,
            location: Location(path),
        }
    }

    /// Returns what went wrong.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consumes the error, returning its kind.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns the value path of the failing node, if one was recorded.
    pub fn path(&self) -> Option<&str> {
        if self.location.0.is_empty() {
            None
        } else {
            Some(&self.location.0)
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::at(kind, String::new())
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(value: std::io::Error) -> Self {
        ErrorKind::Io(value).into()
    }
}

#[derive(Debug)]
struct Location(String);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, " (at `{}`)", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn display_with_and_without_path() {
        let plain: Error = ErrorKind::NonNullableViolation { type_path: "i32" }.into();
        assert_eq!(plain.to_string(), "null is not a valid `i32`");
        assert!(plain.path().is_none());

        let located = Error::at(ErrorKind::mismatch("i32", "string"), "$.a".into());
        assert_eq!(located.to_string(), "expected i32, found string (at `$.a`)");
        assert_eq!(located.path(), Some("$.a"));
        assert!(located.kind().is_rejection());
    }

    #[test]
    fn constructor_list_is_joined() {
        let err = ErrorKind::NoMatchingConstructor {
            type_path: "demo::Point",
            available: ["x".to_string(), "z".to_string()].into(),
        };
        assert_eq!(
            err.to_string(),
            "no constructor of `demo::Point` can be satisfied by the members [x, z]"
        );
    }
}
