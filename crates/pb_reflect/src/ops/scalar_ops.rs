use alloc::string::String;

use crate::Reflect;
use crate::value::Value;

/// A leaf value with a direct [`Value`] representation.
pub trait Scalar: Reflect {
    /// Converts to a payload value.
    fn to_value(&self) -> Value;

    /// Renders the value as an object key.
    fn to_key(&self) -> String;
}
