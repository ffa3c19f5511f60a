//! Key to set-of-values map with an always-present read view.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Map from a key to a set of values.
///
/// Sets are created on first insert and never removed. Reads go through
/// `SetView`, so a missing key and an empty set look the same to callers.
#[derive(Clone, Debug)]
pub(crate) struct MultiMap<K, V> {
    map: FxHashMap<K, FxHashSet<V>>,
}

impl<K, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        MultiMap {
            map: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash, V: Eq + Hash> MultiMap<K, V> {
    /// Add `value` to the set under `key`. Returns `true` if it was new.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        self.map.entry(key).or_default().insert(value)
    }

    pub(crate) fn get(&self, key: &K) -> SetView<'_, V> {
        SetView {
            set: self.map.get(key),
        }
    }

    /// Keys that have ever received a value.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

/// Borrowed view of one set in a registry index.
///
/// Lookups that answer with a set never fail; an unknown key yields an
/// empty view.
#[derive(Debug)]
pub struct SetView<'a, T> {
    set: Option<&'a FxHashSet<T>>,
}

impl<T> Clone for SetView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SetView<'_, T> {}

impl<'a, T: Eq + Hash> SetView<'a, T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.set.map_or(0, FxHashSet::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.set.is_some_and(|set| set.contains(value))
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        self.set.into_iter().flatten()
    }

    /// Copy the viewed set out of the registry.
    pub fn to_set(&self) -> FxHashSet<T>
    where
        T: Clone,
    {
        self.set.cloned().unwrap_or_default()
    }
}

impl<'a, T> IntoIterator for SetView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<&'a FxHashSet<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter().flatten()
    }
}
