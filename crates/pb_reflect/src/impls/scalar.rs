//! Scalars: `bool`, `char`, integers, floats and `String`.

use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::Scalar;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};
use crate::value::Value;

macro_rules! impl_scalar {
    ($ty:ty, $path:expr, $name:expr, $kind:ident,
     from_value: $from_value:expr,
     from_key: $from_key:expr,
     to_value: $to_value:expr $(,)?) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Scalar(ScalarInfo::new::<$ty>(
                        ScalarKind::$kind,
                        |value| {
                            let convert: fn(&Value) -> Option<$ty> = $from_value;
                            convert(value).map(|v| Box::new(v) as Box<dyn Reflect>)
                        },
                        |key| {
                            let parse: fn(&str) -> Option<$ty> = $from_key;
                            parse(key).map(|v| Box::new(v) as Box<dyn Reflect>)
                        },
                    ))
                })
            }
        }

        impl Reflect for $ty {
            crate::impls::impl_reflect_kind!(Scalar);

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl Scalar for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                let convert: fn(&$ty) -> Value = $to_value;
                convert(self)
            }

            #[inline]
            fn to_key(&self) -> String {
                self.to_string()
            }
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut type_meta = TypeMeta::with_capacity::<Self>(1);
                type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                type_meta
            }
        }
    };
}

macro_rules! impl_signed {
    ($($ty:ident),*) => {$(
        impl_scalar!($ty, stringify!($ty), stringify!($ty), Int,
            from_value: |v| v.as_i64().and_then(|n| $ty::try_from(n).ok()),
            from_key: |k| k.parse().ok(),
            to_value: |v| Value::from(*v),
        );
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ident),*) => {$(
        impl_scalar!($ty, stringify!($ty), stringify!($ty), UInt,
            from_value: |v| v.as_u64().and_then(|n| $ty::try_from(n).ok()),
            from_key: |k| k.parse().ok(),
            to_value: |v| Value::from(*v),
        );
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl_scalar!(f64, "f64", "f64", Float,
    from_value: Value::as_f64,
    from_key: |k| k.parse().ok(),
    to_value: |v| Value::from(*v),
);

impl_scalar!(f32, "f32", "f32", Float,
    from_value: |v| v.as_f64().and_then(narrow_f32),
    from_key: |k| k.parse().ok(),
    to_value: |v| Value::from(*v),
);

impl_scalar!(bool, "bool", "bool", Bool,
    from_value: Value::as_bool,
    from_key: |k| k.parse().ok(),
    to_value: |v| Value::Bool(*v),
);

impl_scalar!(char, "char", "char", Char,
    from_value: |v| v.as_str().and_then(single_char),
    from_key: single_char,
    to_value: |v| Value::String(v.to_string()),
);

impl_scalar!(String, "alloc::string::String", "String", String,
    from_value: |v| v.as_str().map(ToString::to_string),
    from_key: |k| Some(k.to_string()),
    to_value: |v| Value::String(v.clone()),
);

/// Narrows to `f32`, refusing finite values out of its range.
fn narrow_f32(n: f64) -> Option<f32> {
    let narrowed = n as f32;
    (narrowed.is_finite() || !n.is_finite()).then_some(narrowed)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::Typed;
    use crate::ops::Scalar;
    use crate::value::Value;

    #[test]
    fn integers_check_range() {
        let info = u8::type_info().as_scalar().unwrap();
        assert!(info.from_value(&Value::from(255_i32)).is_some());
        assert!(info.from_value(&Value::from(256_i32)).is_none());
        assert!(info.from_value(&Value::from(-1_i32)).is_none());
        assert!(info.from_value(&Value::from(1.5_f64)).is_none());
    }

    #[test]
    fn floats_accept_integers() {
        let info = f64::type_info().as_scalar().unwrap();
        let v = info.from_value(&Value::from(3_i32)).unwrap();
        assert_eq!(v.take::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn floats_refuse_lossy_values() {
        let info = f32::type_info().as_scalar().unwrap();
        assert!(info.from_value(&Value::from(1e300_f64)).is_none());
        assert!(info.from_value(&Value::from(-1e300_f64)).is_none());
        let v = info.from_value(&Value::from(f64::INFINITY)).unwrap();
        assert_eq!(v.take::<f32>().unwrap(), f32::INFINITY);
        let v = info.from_value(&Value::from(2.5_f64)).unwrap();
        assert_eq!(v.take::<f32>().unwrap(), 2.5);

        let info = f64::type_info().as_scalar().unwrap();
        assert!(info.from_value(&Value::from(9_007_199_254_740_993_u64)).is_none());
        let v = info.from_value(&Value::from(9_007_199_254_740_992_u64)).unwrap();
        assert_eq!(v.take::<f64>().unwrap(), 9_007_199_254_740_992.0);
    }

    #[test]
    fn keys_round_trip() {
        assert_eq!(123_i32.to_key(), "123");
        let info = i32::type_info().as_scalar().unwrap();
        assert_eq!(info.from_key("456").unwrap().take::<i32>().unwrap(), 456);
        assert!(info.from_key("x").is_none());

        let info = char::type_info().as_scalar().unwrap();
        assert!(info.from_key("ab").is_none());
        assert_eq!(info.from_key("a").unwrap().take::<char>().unwrap(), 'a');
    }

    #[test]
    fn string_path() {
        assert_eq!(<String as crate::info::TypePath>::type_path(), "alloc::string::String");
        assert_eq!(String::from("x").to_value(), Value::from("x"));
    }
}
