//! Tuples with up to six fields, serialized as arrays.

use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ConstructorArgs, TupleField, TupleInfo, TypeInfo, TypePath, Typed};
use crate::ops::Tuple;
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

/// Renders `(A, B)`, or `(A,)` for a single field.
fn tuple_path(parts: &[&str]) -> String {
    let mut res = String::from("(");
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            res.push_str(", ");
        }
        res.push_str(part);
    }
    if parts.len() == 1 {
        res.push(',');
    }
    res.push(')');
    res
}

macro_rules! impl_tuple {
    ($len:literal: [$($index:tt $name:ident),+]) => {
        impl<$($name: TypePath),+> TypePath for ($($name,)+) {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| tuple_path(&[$($name::type_path()),+]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| tuple_path(&[$($name::type_name()),+]))
            }

            fn type_ident() -> &'static str {
                Self::type_name()
            }
        }

        impl<$($name: Reflect + Typed),+> Typed for ($($name,)+) {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Tuple(TupleInfo::new::<Self>(
                        &[$(TupleField::new::<$name>($index)),+],
                        |mut args: ConstructorArgs| {
                            let value = ($(args.take::<$name>()?,)+);
                            args.finish()?;
                            Ok(Box::new(value))
                        },
                    ))
                })
            }
        }

        impl<$($name: Reflect + Typed),+> Reflect for ($($name,)+) {
            crate::impls::impl_reflect_kind!(Tuple);
        }

        impl<$($name: Reflect + Typed),+> Tuple for ($($name,)+) {
            fn field(&self, index: usize) -> Option<&dyn Reflect> {
                match index {
                    $($index => Some(&self.$index as &dyn Reflect),)+
                    _ => None,
                }
            }

            fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                match index {
                    $($index => Some(&mut self.$index as &mut dyn Reflect),)+
                    _ => None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                $len
            }
        }

        impl<$($name: Reflect + GetTypeMeta),+> GetTypeMeta for ($($name,)+) {
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                $(registry.register::<$name>();)+
            }
        }
    };
}

impl_tuple!(1: [0 P0]);
impl_tuple!(2: [0 P0, 1 P1]);
impl_tuple!(3: [0 P0, 1 P1, 2 P2]);
impl_tuple!(4: [0 P0, 1 P1, 2 P2, 3 P3]);
impl_tuple!(5: [0 P0, 1 P1, 2 P2, 3 P3, 4 P4]);
impl_tuple!(6: [0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5]);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn paths() {
        assert_eq!(<(i32,)>::type_path(), "(i32,)");
        assert_eq!(<(i32, String)>::type_path(), "(i32, alloc::string::String)");
        assert_eq!(<(i32, String)>::type_name(), "(i32, String)");
    }

    #[test]
    fn builds_in_order() {
        let info = <(i32, String)>::type_info().as_tuple().unwrap();
        assert_eq!(info.field_len(), 2);
        let args = crate::info::ConstructorArgs::new(
            vec![Box::new(234_i32) as Box<dyn Reflect>, Box::new(String::from("567"))],
            2,
        )
        .unwrap();
        let value = (info.from_fields())(args).unwrap();
        assert_eq!(value.take::<(i32, String)>().unwrap(), (234, String::from("567")));
    }
}
