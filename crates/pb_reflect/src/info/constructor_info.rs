use alloc::boxed::Box;
use alloc::vec::{self, Vec};
use core::fmt;

use thiserror::Error;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// ConstructError

/// A constructor (or container builder) was called with unsuitable arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructError {
    #[error("expected {expected} arguments, found {found}")]
    ArgumentCount { expected: usize, found: usize },
    #[error("argument {index} should be `{expected}`, found `{found}`")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{found}` does not extend `{base}`")]
    NotAssignable {
        base: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// ConstructorArgs

/// Positional arguments handed to a [`ConstructFn`].
///
/// Arguments are taken in order with [`take`](ConstructorArgs::take); the
/// generated constructors call [`finish`](ConstructorArgs::finish) last.
pub struct ConstructorArgs {
    args: vec::IntoIter<Box<dyn Reflect>>,
    index: usize,
    expected: usize,
}

impl ConstructorArgs {
    /// Wraps arguments for a call expecting exactly `expected` of them.
    pub fn new(args: Vec<Box<dyn Reflect>>, expected: usize) -> Result<Self, ConstructError> {
        if args.len() != expected {
            return Err(ConstructError::ArgumentCount {
                expected,
                found: args.len(),
            });
        }
        Ok(Self {
            args: args.into_iter(),
            index: 0,
            expected,
        })
    }

    /// Takes the next argument as a `T`.
    pub fn take<T: Reflect + Typed>(&mut self) -> Result<T, ConstructError> {
        let index = self.index;
        let arg = self.args.next().ok_or(ConstructError::ArgumentCount {
            expected: self.expected,
            found: index,
        })?;
        self.index += 1;
        arg.take::<T>().map_err(|arg| ConstructError::ArgumentType {
            index,
            expected: T::type_path(),
            found: arg.reflect_type_path(),
        })
    }

    /// Takes the next argument without converting it.
    pub fn take_boxed(&mut self) -> Result<Box<dyn Reflect>, ConstructError> {
        let arg = self.args.next().ok_or(ConstructError::ArgumentCount {
            expected: self.expected,
            found: self.index,
        })?;
        self.index += 1;
        Ok(arg)
    }

    /// Checks that every argument was consumed.
    pub fn finish(self) -> Result<(), ConstructError> {
        match self.args.len() {
            0 => Ok(()),
            left => Err(ConstructError::ArgumentCount {
                expected: self.index,
                found: self.index + left,
            }),
        }
    }
}

/// Builds a value from positional arguments.
pub type ConstructFn = fn(ConstructorArgs) -> Result<Box<dyn Reflect>, ConstructError>;

// -----------------------------------------------------------------------------
// ParamInfo

/// The descriptor of one constructor parameter.
///
/// `member` names the member the parameter initializes. Matching a payload
/// key against it is case-insensitive.
#[derive(Clone)]
pub struct ParamInfo {
    name: &'static str,
    member: &'static str,
    index: usize,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
}

impl ParamInfo {
    /// Creates the parameter at `index`, mapped to the member named like it.
    #[inline]
    pub fn new<T: Typed>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            member: name,
            index,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Maps the parameter to the member `member`.
    #[inline]
    pub fn for_member(mut self, member: &'static str) -> Self {
        self.member = member;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn member(&self) -> &'static str {
        self.member
    }

    /// Returns the positional index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the parameter can be omitted (its type is an `Option`).
    #[inline]
    pub fn is_optional(&self) -> bool {
        self.type_info().as_option().is_ok()
    }
}

impl fmt::Debug for ParamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamInfo")
            .field("name", &self.name)
            .field("member", &self.member)
            .field("index", &self.index)
            .field("ty", &self.ty)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

/// A declared way to build a struct from named parameters.
///
/// # Example
///
/// ```
/// use pb_reflect::info::{ConstructorArgs, ConstructorInfo, ParamInfo};
///
/// let ctor = ConstructorInfo::new(
///     "pair",
///     &[ParamInfo::new::<i32>("a", 0), ParamInfo::new::<i32>("b", 1)],
///     |mut args: ConstructorArgs| {
///         let a = args.take::<i32>()?;
///         let b = args.take::<i32>()?;
///         args.finish()?;
///         Ok(Box::new((a, b)))
///     },
/// );
///
/// let value = ctor.construct(vec![Box::new(1_i32), Box::new(2_i32)]).unwrap();
/// assert_eq!(value.take::<(i32, i32)>().unwrap(), (1, 2));
/// ```
#[derive(Clone)]
pub struct ConstructorInfo {
    name: &'static str,
    params: Box<[ParamInfo]>,
    func: ConstructFn,
}

impl ConstructorInfo {
    /// Creates a constructor. Parameters are kept in positional order.
    pub fn new(name: &'static str, params: &[ParamInfo], func: ConstructFn) -> Self {
        let mut params: Box<[ParamInfo]> = params.into();
        params.sort_by_key(ParamInfo::index);
        Self { name, params, func }
    }

    /// The zero-parameter constructor backed by [`Default`].
    pub fn from_default<T: Default + Reflect>() -> Self {
        Self {
            name: "default",
            params: Box::new([]),
            func: |args| {
                args.finish()?;
                Ok(Box::<T>::default())
            },
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameters in positional order.
    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    /// Calls the constructor with positional arguments.
    pub fn construct(&self, args: Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ConstructError> {
        (self.func)(ConstructorArgs::new(args, self.params.len())?)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstructError, ConstructorArgs};
    use crate::Reflect;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn wrong_argument_type() {
        let mut args = ConstructorArgs::new(vec![Box::new(String::new()) as Box<dyn Reflect>], 1).unwrap();
        let err = args.take::<i32>().unwrap_err();
        assert_eq!(
            err,
            ConstructError::ArgumentType {
                index: 0,
                expected: "i32",
                found: "alloc::string::String",
            }
        );
    }

    #[test]
    fn wrong_argument_count() {
        let err = ConstructorArgs::new(vec![], 2).err().unwrap();
        assert_eq!(err, ConstructError::ArgumentCount { expected: 2, found: 0 });
    }
}
