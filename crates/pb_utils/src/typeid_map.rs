use core::any::TypeId;
use core::fmt::Debug;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::hash::NoOpHashState;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// `TypeId` is already a high quality hash, so the map stores it with a
/// pass-through hasher. The [`HashMap`] behind it is not part of the API.
///
/// Cloning is cheap enough for copy-on-write snapshots when `V` is a
/// reference or a small handle.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use pb_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// map.insert(TypeId::of::<u8>(), "u8");
///
/// assert_eq!(map.get_type::<u8>(), Some(&"u8"));
/// assert!(!map.contains_type::<u16>());
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Creates an empty `TypeIdMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    /// Inserts the value produced by `f` unless the key is present.
    ///
    /// Returns `true` if a value was inserted. `f` is only called on insertion.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the value for `type_id`, inserting the result of `f` first if absent.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value for `type_id`.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value stored for `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns a mutable reference to the value for `type_id`.
    pub fn get_mut(&mut self, type_id: &TypeId) -> Option<&mut V> {
        self.0.get_mut(type_id)
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.0.remove(type_id)
    }

    /// Returns `true` if the map contains `type_id`.
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Returns `true` if the map contains `T`.
    #[inline(always)]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains(&TypeId::of::<T>())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.0.iter()
    }

    /// Iterates all values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }

    /// Iterates all values mutably in arbitrary order.
    #[inline]
    pub fn values_mut(&mut self) -> impl ExactSizeIterator<Item = &mut V> {
        self.0.values_mut()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn try_insert_keeps_first() {
        let mut map = TypeIdMap::new();
        assert!(map.try_insert(TypeId::of::<i32>(), || 1));
        assert!(!map.try_insert(TypeId::of::<i32>(), || 2));
        assert_eq!(map.get_type::<i32>(), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut map = TypeIdMap::new();
        map.insert(TypeId::of::<u8>(), 8);
        let snapshot = map.clone();
        map.insert(TypeId::of::<u16>(), 16);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(map.len(), 2);
    }
}
