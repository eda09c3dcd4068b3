use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, take_item};
use crate::info::{OptionInfo, TypeInfo, TypePath, Typed};
use crate::ops::OptionValue;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Option(OptionInfo::new::<Self, T>(
                || Box::new(None::<T>),
                |value| Ok(Box::new(Some(take_item::<T>(value, 0)?))),
            ))
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::impls::impl_reflect_kind!(Option);
}

impl<T: Reflect + Typed> OptionValue for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut type_meta = TypeMeta::with_capacity::<Self>(1);
        type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        type_meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}
