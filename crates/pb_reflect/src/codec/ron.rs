use alloc::string::ToString;
use alloc::vec::Vec;
use std::io;

use ron::ser::PrettyConfig;

use crate::codec::TextCodec;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// RON through the `ron` crate. `null` is written as `()`.
///
/// # Example
///
/// ```
/// use pb_reflect::codec::{RonCodec, TextCodec};
/// use pb_reflect::value::Value;
///
/// let codec = RonCodec::new();
/// let value = codec.parse(br#"{"a": [1, 2], "b": ()}"#).unwrap();
/// let object = value.as_object().unwrap();
/// assert_eq!(object.get("a").and_then(Value::as_array).map(<[Value]>::len), Some(2));
/// assert!(object.get("b").unwrap().is_null());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RonCodec {
    /// Render with indentation.
    pub pretty: bool,
}

impl RonCodec {
    #[inline]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    #[inline]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TextCodec for RonCodec {
    fn parse(&self, bytes: &[u8]) -> Result<Value, Error> {
        ron::de::from_bytes(bytes).map_err(|e| ErrorKind::MalformedInput(e.to_string()).into())
    }

    fn render(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let rendered = if self.pretty {
            ron::ser::to_string_pretty(value, PrettyConfig::default())
        } else {
            ron::to_string(value)
        };
        rendered
            .map(String::into_bytes)
            .map_err(|e| io::Error::other(e).into())
    }
}
