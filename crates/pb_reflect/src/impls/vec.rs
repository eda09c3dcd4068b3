use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, take_item};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::List;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(ListInfo::new::<Self, T>(|items| {
                let mut list = Vec::<T>::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    list.push(take_item::<T>(item, index)?);
                }
                Ok(Box::new(list))
            }))
        })
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    crate::impls::impl_reflect_kind!(List);
}

impl<T: Reflect + Typed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Vec<T> {
    fn get_type_meta() -> TypeMeta {
        let mut type_meta = TypeMeta::with_capacity::<Self>(1);
        type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        type_meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ConstructError, TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn type_path_nests() {
        assert_eq!(<Vec<Vec<u8>>>::type_path(), "alloc::vec::Vec<alloc::vec::Vec<u8>>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");
    }

    #[test]
    fn builds_from_items() {
        let info = <Vec<i32>>::type_info().as_list().unwrap();
        let list = (info.from_items())(vec![Box::new(1_i32) as Box<dyn Reflect>, Box::new(2_i32)]);
        assert_eq!(list.unwrap().take::<Vec<i32>>().unwrap(), [1, 2]);

        let err = (info.from_items())(vec![Box::new(1_i32) as Box<dyn Reflect>, Box::new(2_u8)]);
        assert!(matches!(err, Err(ConstructError::ArgumentType { index: 1, .. })));
    }

    #[test]
    fn reflects_as_list() {
        let value = vec![String::from("a"), String::from("b")];
        let ReflectRef::List(list) = value.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().nth(1).unwrap().downcast_ref::<String>().unwrap(), "b");
    }
}
