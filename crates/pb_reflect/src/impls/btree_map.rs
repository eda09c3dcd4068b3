use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, take_item};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "alloc::collections::BTreeMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "BTreeMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Map(MapInfo::new::<Self, K, V>(|entries| {
                let mut map = BTreeMap::<K, V>::new();
                for (index, (key, value)) in entries.into_iter().enumerate() {
                    map.insert(take_item::<K>(key, index)?, take_item::<V>(value, index)?);
                }
                Ok(Box::new(map))
            }))
        })
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    crate::impls::impl_reflect_kind!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

impl<K, V> GetTypeMeta for BTreeMap<K, V>
where
    K: Reflect + GetTypeMeta + Ord,
    V: Reflect + GetTypeMeta,
{
    fn get_type_meta() -> TypeMeta {
        let mut type_meta = TypeMeta::with_capacity::<Self>(1);
        type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        type_meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<K>();
        registry.register::<V>();
    }
}
