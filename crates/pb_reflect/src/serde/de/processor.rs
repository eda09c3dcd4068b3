use alloc::boxed::Box;

use crate::Reflect;
use crate::error::ErrorKind;
use crate::info::TypeInfo;
use crate::serde::Settings;
use crate::value::Value;

/// A hook that takes over the deserialization of some values.
///
/// [`DeserializeDriver`](crate::serde::DeserializeDriver) consults it before
/// resolving tags or walking each value. A produced value must be
/// assignable to `expected`, otherwise the driver reports a type mismatch.
///
/// ## Return Value Semantics
///
/// - **`Some(Ok(value))`**: the value was built.
/// - **`Some(Err(kind))`**: the value is handled but building it failed.
/// - **`None`**: not handled; the default walk applies.
///
/// `()` handles nothing.
pub trait DeserializeProcessor {
    fn try_deserialize(
        &mut self,
        value: &Value,
        expected: &'static TypeInfo,
        settings: &Settings<'_>,
    ) -> Option<Result<Box<dyn Reflect>, ErrorKind>>;
}

impl DeserializeProcessor for () {
    #[inline]
    fn try_deserialize(
        &mut self,
        _value: &Value,
        _expected: &'static TypeInfo,
        _settings: &Settings<'_>,
    ) -> Option<Result<Box<dyn Reflect>, ErrorKind>> {
        None
    }
}
