//! End to end behavior of derived types through both drivers.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::binder::{AllowList, Binder, RegistryBinder};
use crate::codec::{JsonCodec, TextCodec, from_text, to_text};
use crate::derive::{Reflect, reflect_trait};
use crate::error::ErrorKind;
use crate::info::{TypePath, Typed};
use crate::ops::Poly;
use crate::registry::{TypeRegistry, TypeTraitDefault};
use crate::serde::{DeserializeDriver, SerializeDriver, Settings, TypeTagging};
use crate::value::Value;

#[reflect_trait]
trait Render {
    fn display(&self) -> String;
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(type_path = "scene::Vector2Int", constructor(new(x, y)))]
struct Vector2Int {
    #[reflect(readonly)]
    x: i32,
    #[reflect(readonly)]
    y: i32,
}

impl Vector2Int {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default, type_path = "scene::TestType", type_trait = ReflectRender)]
struct TestType {
    a: i32,
    b: String,
    #[reflect(exclude)]
    c: String,
    #[reflect(private, include)]
    d: f64,
    e: Vec<String>,
    f: BTreeMap<i32, String>,
    g: Vector2Int,
    h: (i32, String),
}

impl TestType {
    fn sample() -> Self {
        Self {
            a: 11,
            b: "hello".into(),
            c: "hello".into(),
            d: 3.14159265,
            e: vec!["hello world!".into()],
            f: BTreeMap::from([(123, "123".into()), (456, "456".into())]),
            g: Vector2Int::new(1, 2),
            h: (234, "567".into()),
        }
    }
}

impl Render for TestType {
    fn display(&self) -> String {
        format!("a = {}, b = {}", self.a, self.b)
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default, type_path = "scene::Labelled", type_trait = ReflectRender)]
struct Labelled {
    #[reflect(base)]
    base: TestType,
    label: String,
}

impl Render for Labelled {
    fn display(&self) -> String {
        format!("label = {}\n{}", self.label, self.base.display())
    }
}

#[derive(Reflect, Default)]
#[reflect(default, type_path = "scene::Holder")]
struct Holder {
    item: Poly<TestType>,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(type_path = "scene::Extent", constructor(create(width, height)))]
struct Extent {
    #[reflect(readonly, rename = "Width")]
    width: u32,
    #[reflect(readonly, rename = "Height")]
    height: u32,
}

impl Extent {
    fn create(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Reflect, Default, Debug)]
#[reflect(default, type_path = "scene::Ticket")]
struct Ticket {
    #[reflect(required)]
    id: u32,
    note: String,
}

#[derive(Reflect, Default)]
#[reflect(default)]
struct Wrapper<T> {
    inner: T,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.try_register::<TestType>().unwrap();
    registry.try_register::<Labelled>().unwrap();
    registry.try_register::<Holder>().unwrap();
    registry.try_register::<Extent>().unwrap();
    registry.try_register::<Ticket>().unwrap();
    registry
}

fn parse(text: &str) -> Value {
    JsonCodec::new().parse(text.as_bytes()).unwrap()
}

fn render(registry: &TypeRegistry, value: &dyn crate::Reflect) -> String {
    registry
        .get_type_trait::<ReflectRender>(value.ty_id())
        .and_then(|render| render.get(value))
        .map(|shown| shown.display())
        .unwrap()
}

#[test]
fn concrete_scenario() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);

    let text = to_text(&TestType::sample(), &settings, &JsonCodec::new()).unwrap();
    assert_eq!(
        text,
        r#"{"a":11,"b":"hello","d":3.14159265,"e":["hello world!"],"f":{"123":"123","456":"456"},"g":{"x":1,"y":2},"h":[234,"567"]}"#
    );

    let back: TestType = from_text(&text, &settings, &JsonCodec::new()).unwrap();
    assert_eq!(back.a, 11);
    assert_eq!(back.b, "hello");
    assert_eq!(back.c, "");
    assert_eq!(back.d, 3.14159265);
    assert_eq!(back.e, ["hello world!"]);
    assert_eq!(back.f, BTreeMap::from([(123, "123".into()), (456, "456".into())]));
    assert_eq!(back.g, Vector2Int::new(1, 2));
    assert_eq!(back.h, (234, "567".into()));
}

#[test]
fn subtype_through_base() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);

    let original = Labelled {
        base: TestType::sample(),
        label: "through the base".into(),
    };
    let tree = SerializeDriver::new(&settings)
        .unwrap()
        .serialize_as::<TestType>(&original)
        .unwrap();
    let object = tree.as_object().unwrap();
    assert_eq!(object.first(), Some(("$type", &Value::from("scene::Labelled"))));
    assert_eq!(object.get("label"), Some(&Value::from("through the base")));

    let restored = DeserializeDriver::new(&settings)
        .unwrap()
        .deserialize(&tree, TestType::type_info())
        .unwrap();
    assert_eq!(restored.reflect_type_path(), "scene::Labelled");
    assert_eq!(
        render(&registry, &*restored),
        "label = through the base\na = 11, b = hello"
    );

    let restored = restored.take::<Labelled>().unwrap();
    assert_eq!(restored.base.c, "");
    assert_eq!(restored.base.g, Vector2Int::new(1, 2));
}

#[test]
fn poly_member_keeps_its_subtype() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);

    let holder = Holder {
        item: Poly::new(Labelled {
            base: TestType::default(),
            label: "inner".into(),
        }),
    };
    let text = to_text(&holder, &settings, &JsonCodec::new()).unwrap();
    assert!(text.starts_with(r#"{"item":{"$type":"scene::Labelled","#));

    let back: Holder = from_text(&text, &settings, &JsonCodec::new()).unwrap();
    assert!(back.item.is::<Labelled>());
    assert_eq!(back.item.downcast_ref::<Labelled>().unwrap().label, "inner");

    let plain = Holder::default();
    let text = to_text(&plain, &settings, &JsonCodec::new()).unwrap();
    assert!(!text.contains("$type"));
    let back: Holder = from_text(&text, &settings, &JsonCodec::new()).unwrap();
    assert!(back.item.is::<TestType>());
}

#[test]
fn constructor_only_types() {
    let settings = Settings::new();
    let mut driver = DeserializeDriver::new(&settings).unwrap();

    let extent: Extent = driver
        .deserialize_as(&parse(r#"{"width": 3, "HEIGHT": 4}"#))
        .unwrap();
    assert_eq!(extent, Extent::create(3, 4));

    let err = driver
        .deserialize_as::<Extent>(&parse(r#"{"width": 3}"#))
        .unwrap_err();
    match err.kind() {
        ErrorKind::NoMatchingConstructor { available, .. } => assert_eq!(available, &["width"]),
        other => panic!("unexpected error: {other}"),
    }

    let text = to_text(&Extent::create(5, 6), &settings, &JsonCodec::new()).unwrap();
    assert_eq!(text, r#"{"Width":5,"Height":6}"#);
}

#[test]
fn member_lookup_ignores_case() {
    let settings = Settings::new();
    let mut driver = DeserializeDriver::new(&settings).unwrap();
    let value: TestType = driver
        .deserialize_as(&parse(r#"{"A": 5, "b": "x", "C": "ignored"}"#))
        .unwrap();
    assert_eq!(value.a, 5);
    assert_eq!(value.b, "x");
    assert_eq!(value.c, "");
}

#[test]
fn required_members() {
    let settings = Settings::new();
    let mut driver = DeserializeDriver::new(&settings).unwrap();

    let err = driver
        .deserialize_as::<Ticket>(&parse(r#"{"note": "late"}"#))
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::UnresolvedMember { member: "id", .. }
    ));

    let ticket: Ticket = driver.deserialize_as(&parse(r#"{"id": 7}"#)).unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.note, "");
}

#[test]
fn allow_list_rejects_before_lookup() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));

    let err = binder.type_for("evil::Payload").unwrap_err();
    assert!(matches!(err, ErrorKind::UnknownType { .. }));
    assert!(err.is_rejection());

    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);
    let mut driver = DeserializeDriver::new(&settings).unwrap();
    let err = driver
        .deserialize_as::<TestType>(&parse(r#"{"$type": "evil::Payload", "a": 1}"#))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnknownType { name } if name == "evil::Payload"));
}

#[test]
fn tags_must_name_a_subtype() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);
    let mut driver = DeserializeDriver::new(&settings).unwrap();

    let err = driver
        .deserialize(
            &parse(r#"{"$type": "scene::Vector2Int", "x": 1, "y": 2}"#),
            TestType::type_info(),
        )
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));

    // With tagging off the tag is an unknown member and nothing is resolved.
    let settings = Settings::new();
    let mut driver = DeserializeDriver::new(&settings).unwrap();
    let value: TestType = driver
        .deserialize_as(&parse(r#"{"$type": "scene::Labelled", "a": 2}"#))
        .unwrap();
    assert_eq!(value.a, 2);
}

#[test]
fn reserialization_is_stable() {
    let registry = registry();
    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["scene"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::Always);

    let serializer = SerializeDriver::new(&settings).unwrap();
    let original = Labelled {
        base: TestType::sample(),
        label: "again".into(),
    };
    let first = serializer.serialize_as::<TestType>(&original).unwrap();
    let restored = DeserializeDriver::new(&settings)
        .unwrap()
        .deserialize(&first, TestType::type_info())
        .unwrap();
    let second = serializer
        .serialize(&*restored, TestType::type_info())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn nested_errors_carry_their_path() {
    let settings = Settings::new();
    let mut driver = DeserializeDriver::new(&settings).unwrap();
    let err = driver
        .deserialize_as::<TestType>(&parse(r#"{"g": {"x": 1, "y": "two"}}"#))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    #[cfg(feature = "debug")]
    assert_eq!(err.path(), Some("$.g.y"));

    let err = driver
        .deserialize_as::<TestType>(&parse(r#"{"b": null}"#))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NonNullableViolation { .. }));
}

#[test]
fn generic_types() {
    assert_eq!(
        Wrapper::<i32>::type_path(),
        "pb_reflect::tests::Wrapper<i32>"
    );
    assert_eq!(Wrapper::<i32>::type_name(), "Wrapper<i32>");

    let settings = Settings::new();
    let value: Wrapper<Vec<u8>> = DeserializeDriver::new(&settings)
        .unwrap()
        .deserialize_as(&parse(r#"{"inner": [1, 2]}"#))
        .unwrap();
    assert_eq!(value.inner, [1, 2]);

    let value: Wrapper<u8> = DeserializeDriver::new(&settings)
        .unwrap()
        .deserialize_as(&parse("{}"))
        .unwrap();
    assert_eq!(value.inner, 0);

    let mut registry = TypeRegistry::new();
    registry.register::<Wrapper<String>>();
    assert!(
        registry
            .get_type_trait::<TypeTraitDefault>(core::any::TypeId::of::<Wrapper<String>>())
            .is_some()
    );
}

#[test]
fn registration_pulls_dependencies() {
    let mut registry = TypeRegistry::new();
    registry.register::<Labelled>();
    assert!(registry.get_with_type_path("scene::TestType").is_some());
    assert!(registry.get_with_type_path("scene::Vector2Int").is_some());
    assert!(registry.get_type_trait::<ReflectRender>(core::any::TypeId::of::<Labelled>()).is_some());
}
