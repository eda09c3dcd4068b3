//! The text boundary: codecs between [`Value`] trees and bytes, and I/O helpers.
//!
//! The engine never owns a file or a stream. It parses bytes supplied by an
//! [`io::Read`] and renders bytes into an [`io::Write`].
//!
//! # Example
//!
//! ```
//! use pb_reflect::derive::Reflect;
//! use pb_reflect::codec::{self, JsonCodec};
//! use pb_reflect::serde::Settings;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Point { x: i32, y: i32 }
//!
//! let settings = Settings::new();
//! let text = codec::to_text(&Point { x: 1, y: 2 }, &settings, &JsonCodec::new()).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//!
//! let back: Point = codec::from_text(&text, &settings, &JsonCodec::new()).unwrap();
//! assert_eq!(back, Point { x: 1, y: 2 });
//! ```

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "ron")]
mod ron;

// -----------------------------------------------------------------------------
// Exports

#[cfg(feature = "json")]
pub use self::json::JsonCodec;
#[cfg(feature = "ron")]
pub use self::ron::RonCodec;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::io;

use crate::Reflect;
use crate::error::{Error, ErrorKind};
use crate::info::Typed;
use crate::serde::{DeserializeDriver, SerializeDriver, Settings};
use crate::value::Value;

// -----------------------------------------------------------------------------
// TextCodec

/// Converts [`Value`] trees to and from a text format.
pub trait TextCodec {
    /// Parses text, failing with [`ErrorKind::MalformedInput`].
    fn parse(&self, bytes: &[u8]) -> Result<Value, Error>;

    /// Renders a tree as text.
    fn render(&self, value: &Value) -> Result<Vec<u8>, Error>;
}

// -----------------------------------------------------------------------------
// Helpers

/// Reads all of `reader` and parses it.
pub fn read_value<R: io::Read, C: TextCodec + ?Sized>(mut reader: R, codec: &C) -> Result<Value, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    codec.parse(&bytes)
}

/// Renders `value` into `writer`.
pub fn write_value<W: io::Write, C: TextCodec + ?Sized>(
    mut writer: W,
    codec: &C,
    value: &Value,
) -> Result<(), Error> {
    let bytes = codec.render(value)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Serializes `value` as declared with its own type and renders it.
pub fn to_text<T, C>(value: &T, settings: &Settings<'_>, codec: &C) -> Result<String, Error>
where
    T: Reflect + Typed,
    C: TextCodec + ?Sized,
{
    let tree = SerializeDriver::new(settings)?.serialize_value(value)?;
    let bytes = codec.render(&tree)?;
    String::from_utf8(bytes).map_err(|e| ErrorKind::MalformedInput(e.to_string()).into())
}

/// Parses `text` and deserializes a `T` from it.
pub fn from_text<T, C>(text: &str, settings: &Settings<'_>, codec: &C) -> Result<T, Error>
where
    T: Reflect + Typed,
    C: TextCodec + ?Sized,
{
    let tree = codec.parse(text.as_bytes())?;
    DeserializeDriver::new(settings)?.deserialize_as(&tree)
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use alloc::vec::Vec;

    use super::{JsonCodec, TextCodec, read_value, write_value};
    use crate::error::ErrorKind;
    use crate::value::Value;

    #[test]
    fn malformed_input() {
        let err = JsonCodec::new().parse(br#"{"a": 1"#).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedInput(_)));
    }

    #[test]
    fn read_and_write() {
        let value = read_value(&br#"{"e": ["hello world!"]}"#[..], &JsonCodec::new()).unwrap();
        let mut out = Vec::new();
        write_value(&mut out, &JsonCodec::new(), &value).unwrap();
        assert_eq!(out, br#"{"e":["hello world!"]}"#);
        assert_eq!(
            value.as_object().and_then(|o| o.get("e")),
            Some(&Value::Array(alloc::vec![Value::from("hello world!")]))
        );
    }
}
