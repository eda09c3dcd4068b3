//! `std::collections::HashMap` with the default hasher.
//!
//! Entries are emitted in the map's iteration order, which is not stable
//! between runs. Use `BTreeMap` when the output must be reproducible.

use alloc::boxed::Box;
use core::hash::Hash;
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, take_item};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<K: TypePath, V: TypePath> TypePath for HashMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<",
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
            concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "HashMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::collections")
    }
}

impl<K, V> Typed for HashMap<K, V>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Map(MapInfo::new::<Self, K, V>(|entries| {
                let mut map = HashMap::<K, V>::with_capacity(entries.len());
                for (index, (key, value)) in entries.into_iter().enumerate() {
                    map.insert(take_item::<K>(key, index)?, take_item::<V>(value, index)?);
                }
                Ok(Box::new(map))
            }))
        })
    }
}

impl<K, V> Reflect for HashMap<K, V>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
{
    crate::impls::impl_reflect_kind!(Map);
}

impl<K, V> Map for HashMap<K, V>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

impl<K, V> GetTypeMeta for HashMap<K, V>
where
    K: Reflect + GetTypeMeta + Eq + Hash,
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
