//! The shape introspector: which members take part in the round trip, and
//! which constructor rebuilds a struct from the members a payload carries.
//!
//! - [`members_of`] / [`serializable_members`]: members in declaration order.
//! - [`constructor_params_of`]: the parameter list of every constructor.
//! - [`select_constructor`]: ranks constructors against the available names.
//! - [`validate`]: checks a struct shape once, at registration.

use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use thiserror::Error;
use tracing::trace;

use crate::error::ErrorKind;
use crate::info::{ConstructorInfo, MemberInfo, ParamInfo, StructInfo, TypeInfo};

// -----------------------------------------------------------------------------
// Members

/// Returns the members of a struct in declaration order, base members first.
///
/// Other kinds have no members.
pub fn members_of(info: &TypeInfo) -> &[MemberInfo] {
    match info {
        TypeInfo::Struct(info) => info.members(),
        _ => &[],
    }
}

/// Returns the members the serializer emits: included and readable.
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, info::Typed, shape};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Config {
///     name: String,
///     #[reflect(exclude)]
///     cache: String,
///     #[reflect(private)]
///     secret: String,
///     #[reflect(private, include)]
///     level: u8,
///     #[reflect(writeonly)]
///     password: String,
/// }
///
/// let info = Config::type_info().as_struct().unwrap();
/// let names: Vec<_> = shape::serializable_members(info).map(|m| m.name()).collect();
/// assert_eq!(names, ["name", "level"]);
/// ```
pub fn serializable_members(info: &StructInfo) -> impl Iterator<Item = &MemberInfo> {
    info.members()
        .iter()
        .filter(|m| m.is_serialized() && m.access().is_readable())
}

/// Returns the parameter list of every constructor, in declaration order.
pub fn constructor_params_of(info: &StructInfo) -> impl ExactSizeIterator<Item = &[ParamInfo]> {
    info.constructors().iter().map(ConstructorInfo::params)
}

/// Returns the index of the key naming `member`: exact match first, then ASCII case-insensitive.
pub fn find_key<S: AsRef<str>>(keys: &[S], member: &str) -> Option<usize> {
    keys.iter()
        .position(|k| k.as_ref() == member)
        .or_else(|| {
            keys.iter()
                .position(|k| k.as_ref().eq_ignore_ascii_case(member))
        })
}

// -----------------------------------------------------------------------------
// Constructor selection

/// The constructor chosen for a payload.
#[derive(Debug, Clone)]
pub struct ConstructorMatch<'a> {
    pub constructor: &'a ConstructorInfo,
    /// For each parameter in positional order, the index of the available
    /// name bound to it. `None` only for optional parameters.
    pub bindings: Vec<Option<usize>>,
}

impl ConstructorMatch<'_> {
    /// Returns the number of parameters bound to a payload value.
    pub fn bound(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_some()).count()
    }
}

/// Picks the constructor to rebuild `info` from the `available` payload names.
///
/// A constructor is satisfiable when each parameter finds a value among
/// `available`, matching its member name exactly, then ignoring ASCII case,
/// then its own name ignoring case. Parameters of an `Option` type may stay
/// unbound and receive `None`. A parameter mapped to an excluded member is
/// never bound. Among satisfiable constructors the one binding the most
/// parameters wins; ties go to the first declared.
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, info::Typed, shape};
///
/// #[derive(Reflect)]
/// #[reflect(constructor(new(x, y)), constructor(on_axis(x)))]
/// struct Point {
///     #[reflect(readonly)]
///     x: i32,
///     #[reflect(readonly)]
///     y: i32,
/// }
///
/// impl Point {
///     fn new(x: i32, y: i32) -> Self { Self { x, y } }
///     fn on_axis(x: i32) -> Self { Self { x, y: 0 } }
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
///
/// let m = shape::select_constructor(info, &["X", "y"]).unwrap();
/// assert_eq!(m.constructor.name(), "new");
/// assert_eq!(m.bindings, [Some(0), Some(1)]);
///
/// let m = shape::select_constructor(info, &["x"]).unwrap();
/// assert_eq!(m.constructor.name(), "on_axis");
///
/// assert!(shape::select_constructor(info, &["y"]).is_err());
/// ```
pub fn select_constructor<'a, S: AsRef<str>>(
    info: &'a StructInfo,
    available: &[S],
) -> Result<ConstructorMatch<'a>, ErrorKind> {
    let mut best: Option<ConstructorMatch<'a>> = None;

    for constructor in info.constructors() {
        let Some(bindings) = bind_params(info, constructor, available) else {
            trace!(
                type_path = info.type_path(),
                constructor = constructor.name(),
                "constructor not satisfiable"
            );
            continue;
        };
        let candidate = ConstructorMatch {
            constructor,
            bindings,
        };
        match &best {
            Some(current) if current.bound() >= candidate.bound() => {}
            _ => best = Some(candidate),
        }
    }

    match best {
        Some(found) => {
            trace!(
                type_path = info.type_path(),
                constructor = found.constructor.name(),
                bound = found.bound(),
                "selected constructor"
            );
            Ok(found)
        }
        None => Err(ErrorKind::NoMatchingConstructor {
            type_path: info.type_path(),
            available: available.iter().map(|s| s.as_ref().to_owned()).collect(),
        }),
    }
}

fn bind_params<S: AsRef<str>>(
    info: &StructInfo,
    constructor: &ConstructorInfo,
    available: &[S],
) -> Option<Vec<Option<usize>>> {
    let mut bindings = Vec::with_capacity(constructor.params().len());
    for param in constructor.params() {
        let excluded = info
            .member_ignore_case(param.member())
            .is_some_and(|m| !m.is_serialized());
        let bound = if excluded {
            None
        } else {
            find_key(available, param.member()).or_else(|| {
                available
                    .iter()
                    .position(|k| k.as_ref().eq_ignore_ascii_case(param.name()))
            })
        };
        if bound.is_none() && !param.is_optional() {
            return None;
        }
        bindings.push(bound);
    }
    Some(bindings)
}

// -----------------------------------------------------------------------------
// Validation

/// A struct shape that cannot be registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("`{type_path}` declares the member `{member}` twice")]
    DuplicateMember {
        type_path: &'static str,
        member: &'static str,
    },
    #[error("parameter `{param}` of constructor `{constructor}` of `{type_path}` maps to no member")]
    UnmappedParam {
        type_path: &'static str,
        constructor: &'static str,
        param: &'static str,
    },
    #[error(
        "parameter `{param}` of constructor `{constructor}` of `{type_path}` is `{param_type}` but its member is `{member_type}`"
    )]
    ParamTypeMismatch {
        type_path: &'static str,
        constructor: &'static str,
        param: &'static str,
        param_type: &'static str,
        member_type: &'static str,
    },
}

/// Checks that member names are unique and that every constructor parameter
/// maps to a member of the same type (or of the type wrapped by an `Option` parameter).
pub fn validate(info: &StructInfo) -> Result<(), ShapeError> {
    let members = info.members();
    for (index, member) in members.iter().enumerate() {
        if members[..index].iter().any(|m| m.name() == member.name()) {
            return Err(ShapeError::DuplicateMember {
                type_path: info.type_path(),
                member: member.name(),
            });
        }
    }

    for constructor in info.constructors() {
        for param in constructor.params() {
            let Some(member) = info.member_ignore_case(param.member()) else {
                return Err(ShapeError::UnmappedParam {
                    type_path: info.type_path(),
                    constructor: constructor.name(),
                    param: param.name(),
                });
            };
            let same = param.ty() == member.ty()
                || param
                    .type_info()
                    .as_option()
                    .is_ok_and(|o| o.some_ty() == member.ty());
            if !same {
                return Err(ShapeError::ParamTypeMismatch {
                    type_path: info.type_path(),
                    constructor: constructor.name(),
                    param: param.name(),
                    param_type: param.ty().path(),
                    member_type: member.type_path(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::{ShapeError, select_constructor, validate};
    use crate::Reflect;
    use crate::error::ErrorKind;
    use crate::info::{ConstructorArgs, ConstructorInfo, MemberInfo, ParamInfo, StructInfo};

    struct Probe;

    impl crate::info::TypePath for Probe {
        fn type_path() -> &'static str {
            "tests::Probe"
        }
        fn type_name() -> &'static str {
            "Probe"
        }
        fn type_ident() -> &'static str {
            "Probe"
        }
    }

    fn unit(_: ConstructorArgs) -> Result<Box<dyn Reflect>, crate::info::ConstructError> {
        Ok(Box::new(0_i32))
    }

    fn shape() -> StructInfo {
        StructInfo::new::<Probe>(&[
            MemberInfo::new::<i32>("width"),
            MemberInfo::new::<i32>("height"),
            MemberInfo::new::<String>("label"),
        ])
        .with_constructor(ConstructorInfo::new(
            "sized",
            &[ParamInfo::new::<i32>("width", 0), ParamInfo::new::<i32>("height", 1)],
            unit,
        ))
        .with_constructor(ConstructorInfo::new(
            "labeled",
            &[
                ParamInfo::new::<i32>("w", 0).for_member("width"),
                ParamInfo::new::<Option<String>>("label", 1),
            ],
            unit,
        ))
    }

    #[test]
    fn most_bound_wins_and_ties_keep_declaration_order() {
        let info = shape();
        let m = select_constructor(&info, &["width", "height", "label"]).unwrap();
        assert_eq!(m.constructor.name(), "sized");

        let m = select_constructor(&info, &["WIDTH"]).unwrap();
        assert_eq!(m.constructor.name(), "labeled");
        assert_eq!(m.bindings, [Some(0), None]);

        let m = select_constructor(&info, &["width", "label"]).unwrap();
        assert_eq!(m.constructor.name(), "labeled");
        assert_eq!(m.bound(), 2);
    }

    #[test]
    fn parameter_name_is_the_last_resort() {
        let info = shape();
        let m = select_constructor(&info, &["W"]).unwrap();
        assert_eq!(m.constructor.name(), "labeled");
        assert_eq!(m.bindings, [Some(0), None]);
    }

    #[test]
    fn nothing_satisfiable() {
        let info = shape();
        let err = select_constructor(&info, &["height"]).unwrap_err();
        assert!(matches!(
            err,
            ErrorKind::NoMatchingConstructor { type_path: "tests::Probe", ref available }
                if available == &["height"]
        ));
    }

    #[test]
    fn validation() {
        assert_eq!(validate(&shape()), Ok(()));

        let dup = StructInfo::new::<Probe>(&[
            MemberInfo::new::<i32>("a"),
            MemberInfo::new::<i32>("a"),
        ]);
        assert!(matches!(validate(&dup), Err(ShapeError::DuplicateMember { member: "a", .. })));

        let unmapped = StructInfo::new::<Probe>(&[MemberInfo::new::<i32>("a")]).with_constructor(
            ConstructorInfo::new("new", &[ParamInfo::new::<i32>("b", 0)], unit),
        );
        assert!(matches!(validate(&unmapped), Err(ShapeError::UnmappedParam { param: "b", .. })));

        let mismatch = StructInfo::new::<Probe>(&[MemberInfo::new::<i32>("a")]).with_constructor(
            ConstructorInfo::new("new", &[ParamInfo::new::<u8>("a", 0)], unit),
        );
        assert!(matches!(
            validate(&mismatch),
            Err(ShapeError::ParamTypeMismatch { param_type: "u8", member_type: "i32", .. })
        ));
    }
}
