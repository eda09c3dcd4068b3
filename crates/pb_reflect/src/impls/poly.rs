use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ConstructError, PolyInfo, Type, TypeInfo, TypePath, Typed};
use crate::ops::{Poly, PolyValue};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<B: TypePath> TypePath for Poly<B> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["pb_reflect::ops::Poly<", B::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Poly<", B::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Poly"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("pb_reflect::ops")
    }
}

impl<B: Typed> Typed for Poly<B> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Poly(PolyInfo::new::<Self, B>(|value| {
                match Poly::<B>::try_from_boxed(value) {
                    Ok(slot) => Ok(Box::new(slot)),
                    Err(value) => Err(ConstructError::NotAssignable {
                        base: B::type_path(),
                        found: value.reflect_type_path(),
                    }),
                }
            }))
        })
    }
}

impl<B: Typed> Reflect for Poly<B> {
    crate::impls::impl_reflect_kind!(Poly);

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.get().reflect_debug(f)
    }
}

impl<B: Typed> PolyValue for Poly<B> {
    #[inline]
    fn value(&self) -> &dyn Reflect {
        self.get()
    }

    #[inline]
    fn value_mut(&mut self) -> &mut dyn Reflect {
        self.get_mut()
    }

    #[inline]
    fn base_ty(&self) -> Type {
        Type::of::<B>()
    }
}

impl<B: GetTypeMeta> GetTypeMeta for Poly<B> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<B>();
    }
}
