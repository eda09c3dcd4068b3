use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use tracing::{trace, warn};

use crate::Reflect;
use crate::error::{Error, ErrorKind};
use crate::info::{ConstructorArgs, ListInfo, MapInfo, ReflectKind, StructInfo, TupleInfo, TypeInfo, Typed};
use crate::ops::ReflectMut;
use crate::serde::value_path::{Segment, ValuePath};
use crate::serde::{DeserializeProcessor, Settings};
use crate::shape;
use crate::value::{Object, Value};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Rebuilds reflected values from [`Value`] trees.
///
/// # Deserialization Rules
///
/// 1. **Processor Priority**: the [`DeserializeProcessor`], if any, is asked first.
/// 2. **Absence**: `null` becomes `None` for an `Option`, and fails with
///    [`ErrorKind::NonNullableViolation`] for any other type.
/// 3. **Type Tag**: when tagging is enabled, an object carrying the tag key
///    names its concrete type. The name goes through the [`Binder`]; the
///    resolved type must be assignable to the expected type, otherwise the
///    value is rejected with [`ErrorKind::TypeMismatch`] before anything is built.
/// 4. **Construction**: a struct is built by the constructor that
///    [`shape::select_constructor`] picks for the keys present. Writable,
///    included members not taken by that constructor are then assigned.
///    Excluded members keep the value the constructor gave them.
/// 5. **Other kinds**: arrays build tuples and lists, objects (or arrays of
///    `[key, value]` pairs) build maps, and scalars convert directly.
///
/// # Example
///
/// ```
/// use pb_reflect::derive::Reflect;
/// use pb_reflect::serde::{DeserializeDriver, Settings};
/// use pb_reflect::value::Value;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// #[reflect(constructor(new(x, y)))]
/// struct Vector2Int {
///     #[reflect(readonly)]
///     x: i32,
///     #[reflect(readonly)]
///     y: i32,
/// }
///
/// impl Vector2Int {
///     fn new(x: i32, y: i32) -> Self { Self { x, y } }
/// }
///
/// let tree: Value = serde_json::from_str(r#"{"X": 1, "Y": 2}"#).unwrap();
///
/// let settings = Settings::new();
/// let mut driver = DeserializeDriver::new(&settings).unwrap();
/// let v: Vector2Int = driver.deserialize_as(&tree).unwrap();
/// assert_eq!(v, Vector2Int::new(1, 2));
/// ```
///
/// [`Binder`]: crate::binder::Binder
pub struct DeserializeDriver<'a, P: DeserializeProcessor = ()> {
    settings: &'a Settings<'a>,
    processor: Option<&'a mut P>,
}

impl<'a> DeserializeDriver<'a, ()> {
    /// Creates a driver with no processor, validating the settings.
    pub fn new(settings: &'a Settings<'a>) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            settings,
            processor: None,
        })
    }
}

impl<'a, P: DeserializeProcessor> DeserializeDriver<'a, P> {
    /// Returns this driver with a processor.
    #[inline]
    pub fn with_processor<Q: DeserializeProcessor>(
        self,
        processor: &'a mut Q,
    ) -> DeserializeDriver<'a, Q> {
        DeserializeDriver {
            settings: self.settings,
            processor: Some(processor),
        }
    }

    #[inline]
    pub fn settings(&self) -> &'a Settings<'a> {
        self.settings
    }

    /// Builds a value of type `expected`, or of a subtype named by the payload's tag.
    pub fn deserialize(
        &mut self,
        value: &Value,
        expected: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>, Error> {
        DeserializeWalk {
            settings: self.settings,
            processor: self.processor.as_deref_mut(),
            depth: 0,
            path: ValuePath::new(),
        }
        .read(value, expected)
    }

    /// Builds a `T`.
    ///
    /// A payload tagged with a subtype of `T` yields a type mismatch here,
    /// since the result must be exactly `T`; read it as a
    /// [`Poly<T>`](crate::ops::Poly) instead.
    pub fn deserialize_as<T: Reflect + Typed>(&mut self, value: &Value) -> Result<T, Error> {
        self.deserialize(value, T::type_info())?
            .take::<T>()
            .map_err(|other| ErrorKind::mismatch(T::type_path(), other.reflect_type_path()).into())
    }
}

// -----------------------------------------------------------------------------
// DeserializeWalk

struct DeserializeWalk<'a, 'p, P> {
    settings: &'a Settings<'a>,
    processor: Option<&'p mut P>,
    depth: usize,
    path: ValuePath,
}

impl<P: DeserializeProcessor> DeserializeWalk<'_, '_, P> {
    #[inline]
    fn error(&self, kind: impl Into<ErrorKind>) -> Error {
        Error::at(kind.into(), self.path.render())
    }

    fn mismatch(&self, expected: &'static TypeInfo, found: &Value) -> Error {
        self.error(ErrorKind::mismatch(expected.type_path(), found.kind_name()))
    }

    fn read(&mut self, value: &Value, expected: &'static TypeInfo) -> Result<Box<dyn Reflect>, Error> {
        let limit = self.settings.max_depth();
        if self.depth >= limit {
            return Err(self.error(ErrorKind::DepthLimitExceeded { limit }));
        }
        self.depth += 1;
        let output = self.read_inner(value, expected);
        self.depth -= 1;
        output
    }

    fn read_inner(&mut self, value: &Value, expected: &'static TypeInfo) -> Result<Box<dyn Reflect>, Error> {
        if let Some(processor) = self.processor.as_deref_mut()
            && let Some(output) = processor.try_deserialize(value, expected, self.settings)
        {
            let built = output.map_err(|kind| self.error(kind))?;
            if !built.reflect_type_info().is_assignable_to(expected.type_id()) {
                return Err(self.error(ErrorKind::mismatch(
                    expected.type_path(),
                    built.reflect_type_path(),
                )));
            }
            return Ok(built);
        }

        match expected {
            TypeInfo::Option(info) => {
                if value.is_null() {
                    return Ok(info.none());
                }
                let inner = self.read(value, info.some_info())?;
                return info.wrap_some(inner).map_err(|e| self.error(e));
            }
            TypeInfo::Poly(info) => {
                if value.is_null() {
                    return Err(self.error(ErrorKind::NonNullableViolation {
                        type_path: expected.type_path(),
                    }));
                }
                let inner = self.read(value, info.base_info())?;
                return info.wrap(inner).map_err(|e| self.error(e));
            }
            _ => {}
        }

        if value.is_null() {
            return Err(self.error(ErrorKind::NonNullableViolation {
                type_path: expected.type_path(),
            }));
        }

        let (target, payload) = self.resolve(value, expected)?;
        match target {
            TypeInfo::Struct(info) => self.read_struct(payload, info),
            TypeInfo::Tuple(info) => self.read_tuple(payload, target, info),
            TypeInfo::List(info) => self.read_list(payload, target, info),
            TypeInfo::Map(info) => self.read_map(payload, target, info),
            TypeInfo::Scalar(info) => info
                .from_value(payload)
                .ok_or_else(|| self.mismatch(target, payload)),
            TypeInfo::Option(_) | TypeInfo::Poly(_) => self.read(payload, target),
        }
    }

    /// Returns the type to build and the value holding its payload.
    fn resolve<'v>(
        &self,
        value: &'v Value,
        expected: &'static TypeInfo,
    ) -> Result<(&'static TypeInfo, &'v Value), Error> {
        let Some(binder) = self.settings.tagging_binder() else {
            return Ok((expected, value));
        };
        // Map keys are data, never tags.
        if expected.kind() == ReflectKind::Map {
            return Ok((expected, value));
        }
        let Value::Object(object) = value else {
            return Ok((expected, value));
        };
        let Some(tag) = object.get(self.settings.type_tag_key()) else {
            return Ok((expected, value));
        };
        let Some(name) = tag.as_str() else {
            return Err(self.error(ErrorKind::mismatch("a type name", tag.kind_name())));
        };

        let target = binder.type_for(name).map_err(|kind| self.error(kind))?;
        if !target.is_assignable_to(expected.type_id()) {
            warn!(
                name,
                expected = expected.type_path(),
                "rejected type tag not assignable to the expected type"
            );
            return Err(self.error(ErrorKind::mismatch(expected.type_path(), target.type_path())));
        }
        trace!(name, expected = expected.type_path(), "resolved type tag");

        if target.kind() == ReflectKind::Struct {
            return Ok((target, value));
        }
        match object.get(self.settings.value_key()) {
            Some(payload) => Ok((target, payload)),
            None => Err(self.error(ErrorKind::MalformedInput(format!(
                "tagged `{name}` value has no `{}` key",
                self.settings.value_key()
            )))),
        }
    }

    fn read_struct(&mut self, payload: &Value, info: &'static StructInfo) -> Result<Box<dyn Reflect>, Error> {
        let Value::Object(object) = payload else {
            return Err(self.error(ErrorKind::mismatch(info.type_path(), payload.kind_name())));
        };
        let entries = self.payload_entries(object);
        let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();

        let found = shape::select_constructor(info, &keys).map_err(|kind| self.error(kind))?;

        let params = found.constructor.params();
        let mut args = Vec::with_capacity(params.len());
        for (param, binding) in params.iter().zip(&found.bindings) {
            let arg = match binding {
                Some(index) => {
                    self.path.push(Segment::Member(param.member()));
                    let arg = self.read(entries[*index].1, param.type_info())?;
                    self.path.pop();
                    arg
                }
                None => param
                    .type_info()
                    .as_option()
                    .map_err(|e| self.error(e))?
                    .none(),
            };
            args.push(arg);
        }
        let mut built = found
            .constructor
            .construct(args)
            .map_err(|e| self.error(e))?;
        let built_path = built.reflect_type_path();

        let ReflectMut::Struct(target) = built.reflect_mut() else {
            return Err(self.error(ErrorKind::mismatch(info.type_path(), built_path)));
        };
        for member in info.members() {
            if !member.is_serialized() {
                continue;
            }
            let covered = params
                .iter()
                .any(|p| p.member().eq_ignore_ascii_case(member.name()));
            let index = shape::find_key(&keys, member.name())
                .filter(|index| !found.bindings.contains(&Some(*index)));

            match index {
                Some(index) if member.access().is_writable() => {
                    self.path.push(Segment::Member(member.name()));
                    let value = self.read(entries[index].1, member.type_info())?;
                    if let Some(field) = target.field_mut(member.name()) {
                        field.set(value).map_err(|value| {
                            self.error(ErrorKind::mismatch(member.type_path(), value.reflect_type_path()))
                        })?;
                    }
                    self.path.pop();
                }
                _ if member.is_required() && !covered => {
                    return Err(self.error(ErrorKind::UnresolvedMember {
                        type_path: info.type_path(),
                        member: member.name(),
                    }));
                }
                _ => {}
            }
        }
        Ok(built)
    }

    /// Returns the entries of an object payload, without the type tag.
    fn payload_entries<'v>(&self, object: &'v Object) -> Vec<(&'v str, &'v Value)> {
        let tag_key = self
            .settings
            .tagging_binder()
            .map(|_| self.settings.type_tag_key());
        object
            .iter()
            .filter(|(key, _)| Some(*key) != tag_key)
            .collect()
    }

    fn read_tuple(
        &mut self,
        payload: &Value,
        target: &'static TypeInfo,
        info: &'static TupleInfo,
    ) -> Result<Box<dyn Reflect>, Error> {
        let Some(items) = payload.as_array() else {
            return Err(self.mismatch(target, payload));
        };
        if items.len() != info.field_len() {
            return Err(self.error(ErrorKind::mismatch(
                target.type_path(),
                format!("an array of {} items", items.len()),
            )));
        }
        let mut fields = Vec::with_capacity(items.len());
        for (field, item) in info.fields().iter().zip(items) {
            self.path.push(Segment::Index(field.index()));
            fields.push(self.read(item, field.type_info())?);
            self.path.pop();
        }
        let args = ConstructorArgs::new(fields, info.field_len()).map_err(|e| self.error(e))?;
        (info.from_fields())(args).map_err(|e| self.error(e))
    }

    fn read_list(
        &mut self,
        payload: &Value,
        target: &'static TypeInfo,
        info: &'static ListInfo,
    ) -> Result<Box<dyn Reflect>, Error> {
        let Some(items) = payload.as_array() else {
            return Err(self.mismatch(target, payload));
        };
        let item_info = info.item_info();
        let mut built = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push(Segment::Index(index));
            built.push(self.read(item, item_info)?);
            self.path.pop();
        }
        (info.from_items())(built).map_err(|e| self.error(e))
    }

    fn read_map(
        &mut self,
        payload: &Value,
        target: &'static TypeInfo,
        info: &'static MapInfo,
    ) -> Result<Box<dyn Reflect>, Error> {
        let key_info = info.key_info();
        let value_info = info.value_info();
        let mut entries = Vec::new();

        match (payload, key_info) {
            (Value::Object(object), TypeInfo::Scalar(scalar)) => {
                entries.reserve(object.len());
                for (index, (key, value)) in object.iter().enumerate() {
                    self.path.push(Segment::Index(index));
                    let Some(key) = scalar.from_key(key) else {
                        return Err(self.error(ErrorKind::mismatch(
                            key_info.type_path(),
                            format!("the key `{key}`"),
                        )));
                    };
                    let value = self.read(value, value_info)?;
                    self.path.pop();
                    entries.push((key, value));
                }
            }
            (Value::Array(pairs), _) => {
                entries.reserve(pairs.len());
                for (index, pair) in pairs.iter().enumerate() {
                    self.path.push(Segment::Index(index));
                    let [key, value] = pair.as_array().unwrap_or_default() else {
                        return Err(self.error(ErrorKind::mismatch(
                            "a [key, value] pair",
                            pair.kind_name(),
                        )));
                    };
                    let key = self.read(key, key_info)?;
                    let value = self.read(value, value_info)?;
                    self.path.pop();
                    entries.push((key, value));
                }
            }
            _ => return Err(self.mismatch(target, payload)),
        }

        (info.from_entries())(entries).map_err(|e| self.error(e))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::DeserializeDriver;
    use crate::error::ErrorKind;
    use crate::serde::Settings;
    use crate::value::Value;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn null_handling() {
        let settings = Settings::new();
        let mut driver = DeserializeDriver::new(&settings).unwrap();
        assert_eq!(driver.deserialize_as::<Option<i32>>(&Value::Null).unwrap(), None);
        assert_eq!(driver.deserialize_as::<Option<i32>>(&Value::from(4)).unwrap(), Some(4));

        let err = driver.deserialize_as::<i32>(&Value::Null).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::NonNullableViolation { type_path: "i32" }));
    }

    #[test]
    fn scalar_kind_mismatch() {
        let settings = Settings::new();
        let mut driver = DeserializeDriver::new(&settings).unwrap();
        let err = driver.deserialize_as::<Vec<i32>>(&parse(r#"[1, "two"]"#)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
        #[cfg(feature = "debug")]
        assert_eq!(err.path(), Some("$[1]"));
    }

    #[test]
    fn lossy_floats_mismatch() {
        let settings = Settings::new();
        let mut driver = DeserializeDriver::new(&settings).unwrap();

        let err = driver.deserialize_as::<f32>(&parse("1e300")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
        let err = driver.deserialize_as::<f64>(&parse("9007199254740993")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));

        assert_eq!(driver.deserialize_as::<f64>(&parse("9007199254740992")).unwrap(), 9007199254740992.0);
        assert_eq!(driver.deserialize_as::<f32>(&parse("0.5")).unwrap(), 0.5);
    }

    #[test]
    fn maps_from_objects_and_pairs() {
        let settings = Settings::new();
        let mut driver = DeserializeDriver::new(&settings).unwrap();

        let map: BTreeMap<i32, String> =
            driver.deserialize_as(&parse(r#"{"123": "123", "456": "456"}"#)).unwrap();
        assert_eq!(map, BTreeMap::from([(123, "123".into()), (456, "456".into())]));

        let map: BTreeMap<(i32, i32), bool> =
            driver.deserialize_as(&parse("[[[1, 2], true]]")).unwrap();
        assert_eq!(map, BTreeMap::from([((1, 2), true)]));

        let err = driver
            .deserialize_as::<BTreeMap<i32, String>>(&parse(r#"{"x": "1"}"#))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn tuples_check_arity() {
        let settings = Settings::new();
        let mut driver = DeserializeDriver::new(&settings).unwrap();
        let h: (i32, String) = driver.deserialize_as(&parse(r#"[234, "567"]"#)).unwrap();
        assert_eq!(h, (234, String::from("567")));
        assert!(driver.deserialize_as::<(i32, String)>(&parse("[234]")).is_err());
    }

    #[test]
    fn depth_limit() {
        let settings = Settings::new().with_max_depth(3);
        let mut driver = DeserializeDriver::new(&settings).unwrap();
        let nested = Value::Array(vec![Value::Array(vec![Value::Array(vec![])])]);
        let err = driver.deserialize_as::<Vec<Vec<Vec<Vec<i32>>>>>(
            &Value::Array(vec![nested]),
        );
        assert!(matches!(
            err.unwrap_err().kind(),
            ErrorKind::DepthLimitExceeded { limit: 3 }
        ));
    }
}
