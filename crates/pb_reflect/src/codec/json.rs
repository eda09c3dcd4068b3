use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use std::io;

use crate::codec::TextCodec;
use crate::error::{Error, ErrorKind};
use crate::value::{Number, Value};

/// JSON through `serde_json`. Object keys keep their order.
///
/// # Example
///
/// ```
/// use pb_reflect::codec::{JsonCodec, TextCodec};
///
/// let codec = JsonCodec::new();
/// let value = codec.parse(br#"{"$type": "shop::Item", "d": 3.14159265}"#).unwrap();
/// assert_eq!(codec.render(&value).unwrap(), br#"{"$type":"shop::Item","d":3.14159265}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    /// Render with indentation.
    pub pretty: bool,
}

impl JsonCodec {
    #[inline]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    #[inline]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TextCodec for JsonCodec {
    fn parse(&self, bytes: &[u8]) -> Result<Value, Error> {
        serde_json::from_slice(bytes).map_err(|e| ErrorKind::MalformedInput(e.to_string()).into())
    }

    /// Fails with [`ErrorKind::Io`] on NaN and infinities, which JSON cannot spell.
    fn render(&self, value: &Value) -> Result<Vec<u8>, Error> {
        if let Some(n) = first_non_finite(value) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON has no representation for the number {n}"),
            )
            .into());
        }
        let rendered = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        rendered.map_err(|e| io::Error::other(e).into())
    }
}

fn first_non_finite(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) if n.is_f64() && !n.as_f64().is_finite() => Some(*n),
        Value::Array(items) => items.iter().find_map(first_non_finite),
        Value::Object(object) => object.iter().find_map(|(_, v)| first_non_finite(v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::JsonCodec;
    use crate::codec::TextCodec;
    use crate::error::ErrorKind;
    use crate::value::{Object, Value};

    #[test]
    fn non_finite_numbers_fail_to_render() {
        let mut object = Object::new();
        object.insert("ok", Value::from(1.5_f64));
        object.insert("d", Value::Array(vec![Value::from(f64::INFINITY)]));
        let err = JsonCodec::new().render(&Value::Object(object)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io(_)));
        assert!(err.to_string().contains("inf"));

        let err = JsonCodec::pretty().render(&Value::from(f64::NAN)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io(_)));

        assert_eq!(JsonCodec::new().render(&Value::from(1.5_f64)).unwrap(), b"1.5");
    }
}
