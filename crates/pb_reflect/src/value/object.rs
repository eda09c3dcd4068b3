use alloc::string::String;

use indexmap::IndexMap;
use indexmap::map::{self, Entry};

use crate::value::Value;

/// An object whose keys keep their insertion order.
///
/// Order matters: the type tag is always the first key, and a codec that
/// reorders keys would break readers that rely on it. Two objects are equal
/// only when their entries are equal in the same order.
///
/// # Example
///
/// ```
/// use pb_reflect::value::{Object, Value};
///
/// let mut object = Object::new();
/// object.insert("x", Value::from(1));
/// object.insert("y", Value::from(2));
/// object.insert_first("$type", Value::from("geo::Point"));
///
/// let keys: Vec<_> = object.keys().collect();
/// assert_eq!(keys, ["$type", "x", "y"]);
///
/// // Re-inserting keeps the original position.
/// object.insert("x", Value::from(5));
/// assert_eq!(object.keys().nth(1), Some("x"));
/// assert_eq!(object.get("x").and_then(Value::as_i64), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts or replaces the entry for `key`, returning the old value.
    ///
    /// A replaced entry keeps its position.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Inserts the entry only if `key` is absent.
    ///
    /// Returns the key back when it is already present.
    pub fn try_insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), String> {
        match self.entries.entry(key.into()) {
            Entry::Occupied(entry) => Err(entry.key().clone()),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Inserts the entry as the first key, removing any previous entry for `key`.
    pub fn insert_first(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        let old = self.entries.shift_remove(&key);
        self.entries.shift_insert(0, key, value);
        old
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the entry for `key`, shifting the following entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the first entry.
    #[inline]
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

// -----------------------------------------------------------------------------
// Iteration

/// Iterator over the entries of an [`Object`], in order.
pub struct Iter<'a> {
    inner: map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut object = Object::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::Object;
    use crate::value::Value;

    #[test]
    fn insert_first_moves_an_existing_key() {
        let mut object: Object = [("a", Value::from(1)), ("$type", Value::from("x"))]
            .into_iter()
            .collect();
        let old = object.insert_first("$type", Value::from("y"));
        assert_eq!(old, Some(Value::from("x")));
        assert_eq!(object.first().map(|(k, _)| k), Some("$type"));
        assert_eq!(object.len(), 2);
    }

    #[test]
    fn duplicate_keys_collapse_on_collect() {
        let mut object: Object = [("a", Value::from(1)), ("a", Value::from(2))]
            .into_iter()
            .collect();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("a"), Some(&Value::from(2)));
        assert!(object.remove("b").is_none());
        assert_eq!(object.try_insert("a", Value::from(3)), Err("a".into()));
        assert_eq!(object.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn equality_follows_order() {
        let ab: Object = [("a", Value::from(1)), ("b", Value::from(2))].into_iter().collect();
        let ba: Object = [("b", Value::from(2)), ("a", Value::from(1))].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn wide_objects_stay_linear() {
        let mut object = Object::new();
        for i in 0..100_000 {
            assert!(object.try_insert(format!("k{i}"), Value::from(i)).is_ok());
        }
        object.insert_first("$type", Value::from("t"));
        assert_eq!(object.len(), 100_001);
        assert_eq!(object.first().map(|(k, _)| k), Some("$type"));
        assert_eq!(object.get("k99999").and_then(Value::as_i64), Some(99_999));
    }
}
