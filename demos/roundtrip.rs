//! Writes a subtype through its base type to `data.json` and reads it back.
//!
//! ```text
//! RUST_LOG=polybind=trace,pb_reflect=trace cargo run --example roundtrip
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::Context;
use polybind::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DATA_FILE: &str = "data.json";

#[reflect_trait]
trait Render {
    fn display(&self) -> String;
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(type_path = "demo::Vector2Int", constructor(new(x, y)))]
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

#[derive(Reflect, Default, Debug)]
#[reflect(default, type_path = "demo::TestType", type_trait = ReflectRender)]
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
        format!(
            "a = {}\nb = {}\nc = {:?}\nd = {}\ne = {:?}\nf = {:?}\ng = ({}, {})\nh = {:?}",
            self.a, self.b, self.c, self.d, self.e, self.f, self.g.x, self.g.y, self.h,
        )
    }
}

#[derive(Reflect, Default, Debug)]
#[reflect(default, type_path = "demo::Labelled", type_trait = ReflectRender)]
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

fn render(registry: &TypeRegistry, value: &dyn Reflect) -> anyhow::Result<String> {
    let render = registry
        .get_type_trait::<ReflectRender>(value.ty_id())
        .with_context(|| format!("`{}` cannot be displayed", value.reflect_type_path()))?;
    let shown = render
        .get(value)
        .context("type trait registered for another type")?;
    Ok(shown.display())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = TypeRegistry::new();
    registry.try_register::<Vector2Int>()?;
    registry.try_register::<TestType>()?;
    registry.try_register::<Labelled>()?;

    let binder = RegistryBinder::new(&registry, AllowList::namespaces(["demo"]));
    let settings = Settings::new()
        .with_binder(&binder)
        .with_type_tagging(TypeTagging::OnMismatch);
    let codec = JsonCodec::pretty();

    let original = Labelled {
        base: TestType::sample(),
        label: "written through TestType".into(),
    };
    println!("before:\n{}\n", render(&registry, &original)?);

    let tree = SerializeDriver::new(&settings)?.serialize_as::<TestType>(&original)?;
    write_value(BufWriter::new(File::create(DATA_FILE)?), &codec, &tree)?;
    info!(path = DATA_FILE, "payload written");

    let tree = read_value(BufReader::new(File::open(DATA_FILE)?), &codec)?;
    let restored = DeserializeDriver::new(&settings)?.deserialize(&tree, TestType::type_info())?;
    info!(type_path = restored.reflect_type_path(), "payload read");

    println!("after:\n{}", render(&registry, &*restored)?);
    Ok(())
}
