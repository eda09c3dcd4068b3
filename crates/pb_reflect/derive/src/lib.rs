//! See following macros:
//!
//! - [`Reflect`]
//! - [`reflect_trait`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `TypePath`
/// - `Typed`, describing the struct as a `StructInfo`
/// - `Reflect`
/// - `Struct`
/// - `GetTypeMeta`
/// - `Extends<Base>`, when a field is marked `#[reflect(base)]`
///
/// Enums, tuple structs and unions are rejected.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// The type path is the stable name written into type tags. It defaults to
/// `module_path!()::Ident` and can be pinned:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::Item")]
/// struct Item { /* ... */ }
/// ```
///
/// Generic parameters are appended automatically.
///
/// ### Constructors
///
/// The deserializer builds a struct through one of its declared constructors,
/// then assigns the remaining writable members. `default` declares the
/// `Default` constructor (and inserts `TypeTraitDefault`); `constructor`
/// declares an associated function and the members its parameters map to.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(constructor(new(x, y)), constructor(on_axis(x)))]
/// struct Point {
///     #[reflect(readonly)]
///     x: i32,
///     #[reflect(readonly)]
///     y: i32,
/// }
///
/// impl Point {
///     fn new(x: i32, y: i32) -> Self { /* ... */ }
///     fn on_axis(x: i32) -> Self { /* ... */ }
/// }
/// ```
///
/// A parameter written as a bare name takes the type of the field with that
/// name (ignoring ASCII case). Parameters mapping to a member of the base are
/// written with their type: `constructor(new(name: String, good))`.
///
/// ### Type Traits
///
/// `#[reflect(type_trait = ReflectDescribe)]` or
/// `#[reflect(type_trait(ReflectDescribe, ReflectRender))]` inserts the
/// given type traits into the `TypeMeta`, see [`reflect_trait`].
///
/// ### Auto Registration
///
/// `#[reflect(auto_register)]` submits the type to
/// `TypeRegistry::auto_register`. It is a no-op for generic types and when
/// the `auto_register` feature is disabled.
///
/// ## Field Attributes
///
/// - `base`: the field holds the base type. Its members are listed first and
///   reached through it, and `Self: Extends<Base>`. At most one per struct.
/// - `rename = "..."`: the member name used in payloads.
/// - `readonly` / `writeonly`: restrict the accessors. A read-only member is
///   serialized but only restored through a constructor; a write-only member
///   is never serialized.
/// - `private`: declares the member private, which also excludes it.
/// - `exclude` / `include`: take the member out of (or back into) the round trip.
///   `include` after `private` opts a private member in.
/// - `required`: deserialization fails when the payload lacks the member.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Config {
///     name: String,
///     #[reflect(exclude)]
///     cache: String,
///     #[reflect(private, include)]
///     level: u8,
///     #[reflect(rename = "Id", required)]
///     id: u64,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// Impl `TypeTrait` for specific trait with a new struct.
///
/// This macro will generate a `Reflect{trait_name}` struct, which implements
/// `TypeTrait` and `FromType<T>` for every `T` implementing the trait.
///
/// It only contains three methods internally:
/// - `get`: cast `&dyn Reflect` to `&dyn {trait_name}`
/// - `get_mut`: cast `&mut dyn Reflect` to `&mut dyn {trait_name}`
/// - `get_boxed`: cast `Box<dyn Reflect>` to `Box<dyn {trait_name}>`
///
/// Looking the struct up in the registry by the runtime type id of a value
/// dispatches a trait method on a value only known as its base type.
///
/// ## Example
///
/// ```rust, ignore
/// #[reflect_trait]
/// pub trait Describe {
///     fn describe(&self) -> String;
/// }
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = ReflectDescribe)]
/// struct Dog { /* ... */ }
///
/// impl Describe for Dog { /* ... */ }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Dog>();
///
/// let pet: Poly<Animal> = /* ... */;
/// let describe = registry
///     .get_type_trait::<ReflectDescribe>(pet.get().ty_id())
///     .unwrap();
/// println!("{}", describe.get(pet.get()).unwrap().describe());
/// ```
#[proc_macro_attribute]
pub fn reflect_trait(_args: TokenStream, input: TokenStream) -> TokenStream {
    impls::impl_reflect_trait(input)
}
