use alloc::vec::Vec;

use crate::Reflect;
use crate::error::{Error, ErrorKind};
use crate::info::{PolyInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{List, Map, ReflectRef, Struct, Tuple};
use crate::serde::value_path::{Segment, ValuePath};
use crate::serde::{SerializeProcessor, Settings, TypeTagging};
use crate::shape;
use crate::value::{Object, Value};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Converts reflected values into [`Value`] trees.
///
/// # Serialization Rules
///
/// 1. **Processor Priority**: the [`SerializeProcessor`], if any, is asked first.
/// 2. **Reflection Default**: otherwise the value is walked by kind:
///     - structs become objects, one key per [serialized member] in declaration order;
///     - tuples and lists become arrays;
///     - maps with scalar keys become objects with rendered keys, other maps
///       become arrays of `[key, value]` pairs;
///     - `None` becomes `null`, `Some(v)` is written as `v`;
///     - a [`Poly`](crate::ops::Poly) slot writes its value against the slot's base type.
///
/// # Type Tags
///
/// With [`TypeTagging::OnMismatch`] a value whose runtime type differs from
/// its declared type is tagged; [`TypeTagging::Always`] tags every struct
/// as well. A struct receives the tag as its first key. Other values are
/// wrapped as `{"$type": name, "$value": payload}`.
///
/// # Example
///
/// ```
/// use pb_reflect::derive::Reflect;
/// use pb_reflect::binder::{AllowList, RegistryBinder};
/// use pb_reflect::ops::Poly;
/// use pb_reflect::registry::TypeRegistry;
/// use pb_reflect::serde::{SerializeDriver, Settings, TypeTagging};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "zoo::Animal")]
/// struct Animal { name: String }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "zoo::Dog")]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
///     good: bool,
/// }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "zoo::Pen")]
/// struct Pen { resident: Poly<Animal> }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Pen>();
/// registry.register::<Dog>();
///
/// let binder = RegistryBinder::new(&registry, AllowList::namespaces(["zoo"]));
/// let settings = Settings::new()
///     .with_binder(&binder)
///     .with_type_tagging(TypeTagging::OnMismatch);
///
/// let pen = Pen { resident: Poly::new(Dog { animal: Animal { name: "rex".into() }, good: true }) };
/// let tree = SerializeDriver::new(&settings).unwrap().serialize_value(&pen).unwrap();
///
/// let json = serde_json::to_string(&tree).unwrap();
/// assert_eq!(json, r#"{"resident":{"$type":"zoo::Dog","name":"rex","good":true}}"#);
/// ```
///
/// [serialized member]: crate::shape::serializable_members
pub struct SerializeDriver<'a, P: SerializeProcessor = ()> {
    settings: &'a Settings<'a>,
    processor: Option<&'a P>,
}

impl<'a> SerializeDriver<'a, ()> {
    /// Creates a driver with no processor, validating the settings.
    pub fn new(settings: &'a Settings<'a>) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            settings,
            processor: None,
        })
    }
}

impl<'a, P: SerializeProcessor> SerializeDriver<'a, P> {
    /// Returns this driver with a processor.
    #[inline]
    pub fn with_processor<Q: SerializeProcessor>(self, processor: &'a Q) -> SerializeDriver<'a, Q> {
        SerializeDriver {
            settings: self.settings,
            processor: Some(processor),
        }
    }

    #[inline]
    pub fn settings(&self) -> &'a Settings<'a> {
        self.settings
    }

    /// Serializes `value` as a value declared with the type `declared`.
    pub fn serialize(&self, value: &dyn Reflect, declared: &'static TypeInfo) -> Result<Value, Error> {
        SerializeWalk {
            settings: self.settings,
            processor: self.processor,
            depth: 0,
            path: ValuePath::new(),
        }
        .value(value, declared)
    }

    /// Serializes `value` as declared with the type `T`.
    #[inline]
    pub fn serialize_as<T: Typed>(&self, value: &dyn Reflect) -> Result<Value, Error> {
        self.serialize(value, T::type_info())
    }

    /// Serializes `value` as declared with its own type.
    #[inline]
    pub fn serialize_value<T: Reflect + Typed>(&self, value: &T) -> Result<Value, Error> {
        self.serialize(value, T::type_info())
    }
}

// -----------------------------------------------------------------------------
// SerializeWalk

struct SerializeWalk<'a, P> {
    settings: &'a Settings<'a>,
    processor: Option<&'a P>,
    depth: usize,
    path: ValuePath,
}

impl<P: SerializeProcessor> SerializeWalk<'_, P> {
    #[inline]
    fn error(&self, kind: impl Into<ErrorKind>) -> Error {
        Error::at(kind.into(), self.path.render())
    }

    fn value(&mut self, value: &dyn Reflect, declared: &'static TypeInfo) -> Result<Value, Error> {
        let limit = self.settings.max_depth();
        if self.depth >= limit {
            return Err(self.error(ErrorKind::DepthLimitExceeded { limit }));
        }
        self.depth += 1;
        let output = self.value_inner(value, declared);
        self.depth -= 1;
        output
    }

    fn value_inner(&mut self, value: &dyn Reflect, declared: &'static TypeInfo) -> Result<Value, Error> {
        if let Some(processor) = self.processor
            && let Some(output) = processor.try_serialize(value, declared, self.settings)
        {
            return output.map_err(|kind| self.error(kind));
        }

        // A plain value declared through an option or a slot is compared to the inner type.
        let declared = match (declared, value.reflect_kind()) {
            (TypeInfo::Option(info), kind) if kind != ReflectKind::Option => info.some_info(),
            (TypeInfo::Poly(info), kind) if kind != ReflectKind::Poly => info.base_info(),
            _ => declared,
        };
        let runtime = value.reflect_type_info();

        let body = match value.reflect_ref() {
            ReflectRef::Option(option) => {
                return match option.value() {
                    Some(inner) => self.value(inner, inner.reflect_type_info()),
                    None => Ok(Value::Null),
                };
            }
            ReflectRef::Poly(poly) => {
                let base = runtime
                    .as_poly()
                    .map_or_else(|_| poly.value().reflect_type_info(), PolyInfo::base_info);
                return self.value(poly.value(), base);
            }
            ReflectRef::Struct(s) => self.struct_body(s, runtime)?,
            ReflectRef::Tuple(t) => self.tuple_body(t, runtime)?,
            ReflectRef::List(l) => self.list_body(l, runtime)?,
            ReflectRef::Map(m) => self.map_body(m, runtime)?,
            ReflectRef::Scalar(s) => s.to_value(),
        };

        self.tag(body, runtime, declared)
    }

    fn tag(
        &self,
        body: Value,
        runtime: &'static TypeInfo,
        declared: &'static TypeInfo,
    ) -> Result<Value, Error> {
        let Some(binder) = self.settings.tagging_binder() else {
            return Ok(body);
        };
        let is_struct = runtime.kind() == ReflectKind::Struct;
        let mismatch = runtime.type_id() != declared.type_id();
        let tagged = match self.settings.type_tagging() {
            TypeTagging::Off => false,
            TypeTagging::OnMismatch => mismatch,
            TypeTagging::Always => mismatch || is_struct,
        };
        if !tagged {
            return Ok(body);
        }

        let name = binder
            .name_for(runtime.ty())
            .map_err(|kind| self.error(kind))?;
        let tag = Value::String(name.into_owned());
        match body {
            Value::Object(mut object) if is_struct => {
                object.insert_first(self.settings.type_tag_key(), tag);
                Ok(Value::Object(object))
            }
            other => {
                let mut object = Object::with_capacity(2);
                object.insert(self.settings.type_tag_key(), tag);
                object.insert(self.settings.value_key(), other);
                Ok(Value::Object(object))
            }
        }
    }

    fn struct_body(&mut self, s: &dyn Struct, runtime: &'static TypeInfo) -> Result<Value, Error> {
        let info = runtime.as_struct().map_err(|e| self.error(e))?;
        let mut object = Object::with_capacity(info.members().len() + 1);
        for member in shape::serializable_members(info) {
            let Some(field) = s.field(member.name()) else {
                continue;
            };
            self.path.push(Segment::Member(member.name()));
            let item = self.value(field, member.type_info())?;
            self.path.pop();
            object.insert(member.name(), item);
        }
        Ok(Value::Object(object))
    }

    fn tuple_body(&mut self, t: &dyn Tuple, runtime: &'static TypeInfo) -> Result<Value, Error> {
        let info = runtime.as_tuple().map_err(|e| self.error(e))?;
        let mut items = Vec::with_capacity(info.field_len());
        for field_info in info.fields() {
            let index = field_info.index();
            let Some(field) = t.field(index) else {
                continue;
            };
            self.path.push(Segment::Index(index));
            items.push(self.value(field, field_info.type_info())?);
            self.path.pop();
        }
        Ok(Value::Array(items))
    }

    fn list_body(&mut self, l: &dyn List, runtime: &'static TypeInfo) -> Result<Value, Error> {
        let item_info = runtime.as_list().map_err(|e| self.error(e))?.item_info();
        let mut items = Vec::with_capacity(l.len());
        for (index, item) in l.iter().enumerate() {
            self.path.push(Segment::Index(index));
            items.push(self.value(item, item_info)?);
            self.path.pop();
        }
        Ok(Value::Array(items))
    }

    fn map_body(&mut self, m: &dyn Map, runtime: &'static TypeInfo) -> Result<Value, Error> {
        let info = runtime.as_map().map_err(|e| self.error(e))?;
        let value_info = info.value_info();

        if info.key_info().kind() == ReflectKind::Scalar {
            let mut object = Object::with_capacity(m.len());
            for (index, (key, value)) in m.iter().enumerate() {
                let ReflectRef::Scalar(key) = key.reflect_ref() else {
                    return Err(self.error(ErrorKind::mismatch("a scalar key", key.reflect_type_path())));
                };
                self.path.push(Segment::Index(index));
                let item = self.value(value, value_info)?;
                self.path.pop();
                object.insert(key.to_key(), item);
            }
            return Ok(Value::Object(object));
        }

        let key_info = info.key_info();
        let mut entries = Vec::with_capacity(m.len());
        for (index, (key, value)) in m.iter().enumerate() {
            self.path.push(Segment::Index(index));
            let pair = alloc::vec![self.value(key, key_info)?, self.value(value, value_info)?];
            self.path.pop();
            entries.push(Value::Array(pair));
        }
        Ok(Value::Array(entries))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use super::SerializeDriver;
    use crate::binder::{AllowList, RegistryBinder};
    use crate::error::ErrorKind;
    use crate::registry::TypeRegistry;
    use crate::serde::{Settings, TypeTagging};
    use crate::value::{Object, Value};

    #[test]
    fn maps_with_scalar_keys_become_objects() {
        let settings = Settings::new();
        let driver = SerializeDriver::new(&settings).unwrap();
        let map = BTreeMap::from([(123, String::from("123")), (456, String::from("456"))]);
        let tree = driver.serialize_value(&map).unwrap();
        let expected: Object = [("123", Value::from("123")), ("456", Value::from("456"))]
            .into_iter()
            .collect();
        assert_eq!(tree, Value::Object(expected));
    }

    #[test]
    fn maps_with_composite_keys_become_pairs() {
        let settings = Settings::new();
        let driver = SerializeDriver::new(&settings).unwrap();
        let map = BTreeMap::from([((1, 2), true)]);
        let tree = driver.serialize_value(&map).unwrap();
        assert_eq!(
            tree,
            Value::Array(vec![Value::Array(vec![
                Value::Array(vec![Value::from(1), Value::from(2)]),
                Value::from(true),
            ])])
        );
    }

    #[test]
    fn options_and_tuples() {
        let settings = Settings::new();
        let driver = SerializeDriver::new(&settings).unwrap();
        assert_eq!(driver.serialize_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(
            driver.serialize_value(&(234, String::from("567"))).unwrap(),
            Value::Array(vec![Value::from(234), Value::from("567")])
        );
    }

    #[test]
    fn mismatched_scalars_are_wrapped() {
        let registry = TypeRegistry::new();
        let binder = RegistryBinder::new(&registry, AllowList::any_registered());
        let settings = Settings::new()
            .with_binder(&binder)
            .with_type_tagging(TypeTagging::OnMismatch);
        let driver = SerializeDriver::new(&settings).unwrap();

        let tree = driver.serialize_as::<i64>(&7_u8).unwrap();
        let object = tree.as_object().unwrap();
        assert_eq!(object.get("$type"), Some(&Value::from("u8")));
        assert_eq!(object.get("$value"), Some(&Value::from(7)));

        // Matching declared type: no tag.
        assert_eq!(driver.serialize_value(&7_u8).unwrap(), Value::from(7));
    }

    #[test]
    fn depth_limit() {
        let settings = Settings::new().with_max_depth(2);
        let driver = SerializeDriver::new(&settings).unwrap();
        assert!(driver.serialize_value(&vec![1]).is_ok());
        let err = driver.serialize_value(&vec![vec![1]]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DepthLimitExceeded { limit: 2 }));
    }
}
