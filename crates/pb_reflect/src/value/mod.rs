//! The format-agnostic value tree exchanged with codecs.
//!
//! [`Value`] is what the [`SerializeDriver`](crate::serde::SerializeDriver)
//! produces and the [`DeserializeDriver`](crate::serde::DeserializeDriver)
//! consumes. It implements [`serde::Serialize`](serde_core::Serialize) and
//! [`serde::Deserialize`](serde_core::Deserialize), so any self-describing
//! serde data format can render and parse it.

// -----------------------------------------------------------------------------
// Modules

mod number;
mod object;
mod serde_impl;

// -----------------------------------------------------------------------------
// Exports

pub use number::Number;
pub use object::Object;

use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Value

/// A structured value: null, bool, number, string, array or ordered object.
///
/// # Example
///
/// ```
/// use pb_reflect::value::{Object, Value};
///
/// let mut object = Object::new();
/// object.insert("a", Value::from(11_i32));
/// object.insert("b", Value::from("hello"));
/// let value = Value::Object(object);
///
/// assert_eq!(value.as_object().unwrap().get("a").and_then(Value::as_i64), Some(11));
/// assert_eq!(value.kind_name(), "object");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns a short name of the variant, used in mismatch reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer in range.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the value as `f64` if it is a number `f64` holds exactly.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::to_f64_exact)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::Number(Number::from(value))
            }
        }
    )*};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}
