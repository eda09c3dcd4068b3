use crate::Reflect;
use crate::error::ErrorKind;
use crate::info::TypeInfo;
use crate::serde::Settings;
use crate::value::Value;

/// A hook that takes over the serialization of some values.
///
/// [`SerializeDriver`](crate::serde::SerializeDriver) consults it before
/// walking each value.
///
/// ## Return Value Semantics
///
/// - **`Some(Ok(value))`**: the value was converted; nothing else is done for it.
/// - **`Some(Err(kind))`**: the value is handled but the conversion failed.
/// - **`None`**: not handled; the default walk applies.
///
/// `()` handles nothing.
///
/// # Example
///
/// ```
/// use pb_reflect::Reflect;
/// use pb_reflect::error::ErrorKind;
/// use pb_reflect::info::TypeInfo;
/// use pb_reflect::serde::{SerializeDriver, SerializeProcessor, Settings};
/// use pb_reflect::value::Value;
///
/// /// Writes booleans as `0` / `1`.
/// struct BoolAsInt;
///
/// impl SerializeProcessor for BoolAsInt {
///     fn try_serialize(
///         &self,
///         value: &dyn Reflect,
///         _declared: &'static TypeInfo,
///         _settings: &Settings<'_>,
///     ) -> Option<Result<Value, ErrorKind>> {
///         let b = value.downcast_ref::<bool>()?;
///         Some(Ok(Value::from(u8::from(*b))))
///     }
/// }
///
/// let settings = Settings::new();
/// let driver = SerializeDriver::new(&settings).unwrap().with_processor(&BoolAsInt);
/// assert_eq!(driver.serialize_value(&vec![true, false]).unwrap(),
///            Value::Array(vec![Value::from(1), Value::from(0)]));
/// ```
pub trait SerializeProcessor {
    fn try_serialize(
        &self,
        value: &dyn Reflect,
        declared: &'static TypeInfo,
        settings: &Settings<'_>,
    ) -> Option<Result<Value, ErrorKind>>;
}

impl SerializeProcessor for () {
    #[inline]
    fn try_serialize(
        &self,
        _value: &dyn Reflect,
        _declared: &'static TypeInfo,
        _settings: &Settings<'_>,
    ) -> Option<Result<Value, ErrorKind>> {
        None
    }
}
